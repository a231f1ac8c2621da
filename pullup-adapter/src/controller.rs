use alloc::boxed::Box;
use core::fmt;

use pullup::{Effect, PullOptions, PullPhase, PullTracker, ScrollEvent};

use crate::{PullRefreshDelegate, ScrollSurface};

/// A framework-neutral controller that wraps a [`PullTracker`] and applies its effects to a host
/// [`ScrollSurface`].
///
/// Adapters drive it by forwarding the host's drag-lifecycle callbacks:
/// - `drag_begin` / `position_changed` / `drag_end` / `deceleration_end`
///
/// Each call queries fresh metrics from the surface, so content reloads or viewport changes between
/// events are always observed.
pub struct BottomPullController<S: ScrollSurface> {
    tracker: PullTracker,
    surface: S,
    footer: S::Footer,
    delegate: Option<Box<dyn PullRefreshDelegate>>,
}

impl<S: ScrollSurface> BottomPullController<S> {
    pub fn new(surface: S, footer: S::Footer) -> Self {
        Self::with_options(surface, footer, PullOptions::default())
    }

    pub fn with_options(surface: S, footer: S::Footer, options: PullOptions) -> Self {
        Self {
            tracker: PullTracker::new(options),
            surface,
            footer,
            delegate: None,
        }
    }

    pub fn tracker(&self) -> &PullTracker {
        &self.tracker
    }

    pub fn options(&self) -> &PullOptions {
        self.tracker.options()
    }

    pub fn set_options(&mut self, options: PullOptions) {
        self.tracker.set_options(options);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut PullOptions)) {
        self.tracker.update_options(f);
    }

    pub fn phase(&self) -> PullPhase {
        self.tracker.phase()
    }

    pub fn is_footer_visible(&self) -> bool {
        self.tracker.is_footer_visible()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn footer(&self) -> &S::Footer {
        &self.footer
    }

    /// Replaces the footer placeholder. An already attached footer stays until the next reset.
    pub fn set_footer(&mut self, footer: S::Footer) {
        self.footer = footer;
    }

    pub fn set_delegate(&mut self, delegate: impl PullRefreshDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Forwards a host event. Returns `true` when the event fired a refresh.
    pub fn handle_event(&mut self, event: ScrollEvent) -> bool {
        let metrics = self.surface.scroll_metrics();
        let Self {
            tracker,
            surface,
            footer,
            delegate,
        } = self;
        tracker.handle_event(event, metrics, &mut |effect| {
            apply_effect(surface, footer, delegate, effect)
        })
    }

    pub fn drag_begin(&mut self) {
        self.handle_event(ScrollEvent::DragBegin);
    }

    pub fn position_changed(&mut self) {
        self.handle_event(ScrollEvent::PositionChanged);
    }

    pub fn drag_end(&mut self, will_decelerate: bool) -> bool {
        self.handle_event(ScrollEvent::DragEnd { will_decelerate })
    }

    pub fn deceleration_end(&mut self) {
        self.handle_event(ScrollEvent::DecelerationEnd);
    }
}

fn apply_effect<S: ScrollSurface>(
    surface: &mut S,
    footer: &S::Footer,
    delegate: &mut Option<Box<dyn PullRefreshDelegate>>,
    effect: Effect,
) {
    match effect {
        Effect::RefreshTriggered => match delegate {
            Some(d) => d.on_pull_refresh_triggered(),
            None => {
                atrace!("BottomPullController: refresh triggered without a delegate");
            }
        },
        Effect::AttachFooter => surface.attach_footer(footer),
        Effect::DetachFooter { duration_ms } => surface.detach_footer(duration_ms),
        Effect::AnimateBottomInset { to, duration_ms } => {
            surface.set_bottom_inset(to, duration_ms > 0, duration_ms)
        }
    }
}

impl<S> fmt::Debug for BottomPullController<S>
where
    S: ScrollSurface + fmt::Debug,
    S::Footer: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BottomPullController")
            .field("tracker", &self.tracker)
            .field("surface", &self.surface)
            .field("footer", &self.footer)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
