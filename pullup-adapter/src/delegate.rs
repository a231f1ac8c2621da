/// Receives the refresh notification.
///
/// Called at most once per completed drag, only when the release-time overscroll exceeded the
/// refresh threshold while the footer was visible. The footer reset is applied right after the
/// call returns.
pub trait PullRefreshDelegate {
    fn on_pull_refresh_triggered(&mut self);
}

impl<F: FnMut()> PullRefreshDelegate for F {
    fn on_pull_refresh_triggered(&mut self) {
        self()
    }
}
