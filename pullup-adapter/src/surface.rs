use pullup::ScrollMetrics;

/// The host scroll view, as seen by [`crate::BottomPullController`].
///
/// The controller is the only writer of the bottom inset and the trailing decoration slot while it
/// is active. Hosts must not mutate either directly, or the visual state will race (last write
/// wins).
pub trait ScrollSurface {
    /// The caller-owned footer placeholder. The controller never mutates its contents.
    type Footer;

    /// Current offset/size/inset snapshot.
    fn scroll_metrics(&self) -> ScrollMetrics;

    /// Sets the bottom content inset. When `animated`, transition over `duration_ms`.
    fn set_bottom_inset(&mut self, value: f32, animated: bool, duration_ms: u64);

    /// Places `footer` into the trailing decoration slot.
    fn attach_footer(&mut self, footer: &Self::Footer);

    /// Empties the trailing decoration slot. Must be a no-op when the slot is already empty.
    fn detach_footer(&mut self, duration_ms: u64);
}
