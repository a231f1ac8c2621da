use alloc::vec::Vec;

use crate::{Effect, PullOptions, PullPhase, PullSnapshot, ScrollEvent, ScrollMetrics};

/// A headless bottom pull-to-refresh state machine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with drag-lifecycle events and a fresh [`ScrollMetrics`] per event.
/// - Side effects (footer attach/detach, inset animation, refresh) are emitted as [`Effect`]s in
///   the order they must be applied.
///
/// For a controller that applies effects to a host surface, see the `pullup-adapter` crate.
#[derive(Clone, Debug, Default)]
pub struct PullTracker {
    options: PullOptions,
    phase: PullPhase,
    saved_bottom_inset: Option<f32>,
    dragging: bool,
}

impl PullTracker {
    pub fn new(options: PullOptions) -> Self {
        let options = sanitize(options);
        pdebug!(
            difference_threshold = options.difference_threshold,
            refresh_threshold = options.refresh_threshold,
            animation_duration_ms = options.animation_duration_ms,
            "PullTracker::new"
        );
        Self {
            options,
            phase: PullPhase::Idle,
            saved_bottom_inset: None,
            dragging: false,
        }
    }

    pub fn options(&self) -> &PullOptions {
        &self.options
    }

    /// Replaces the options. Takes effect from the next event; the current phase is kept.
    pub fn set_options(&mut self, options: PullOptions) {
        self.options = sanitize(options);
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut PullOptions)) {
        let mut options = self.options;
        f(&mut options);
        self.set_options(options);
    }

    pub fn phase(&self) -> PullPhase {
        self.phase
    }

    pub fn is_footer_visible(&self) -> bool {
        self.phase == PullPhase::Revealed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The bottom inset restored when the current pull ends, if a pull is in progress.
    pub fn saved_bottom_inset(&self) -> Option<f32> {
        self.saved_bottom_inset
    }

    pub fn snapshot(&self) -> PullSnapshot {
        PullSnapshot {
            phase: self.phase,
            saved_bottom_inset: self.saved_bottom_inset,
            dragging: self.dragging,
        }
    }

    /// Restores state from a previously captured snapshot.
    ///
    /// The host is responsible for the footer slot matching `snapshot.phase`.
    pub fn restore_snapshot(&mut self, snapshot: PullSnapshot) {
        self.phase = snapshot.phase;
        self.saved_bottom_inset = snapshot.saved_bottom_inset;
        self.dragging = snapshot.dragging;
    }

    /// Dispatches an event to the matching handler.
    ///
    /// Returns `true` when the event fired a refresh.
    pub fn handle_event(
        &mut self,
        event: ScrollEvent,
        metrics: ScrollMetrics,
        emit: &mut dyn FnMut(Effect),
    ) -> bool {
        match event {
            ScrollEvent::DragBegin => {
                self.on_drag_begin(metrics);
                false
            }
            ScrollEvent::PositionChanged => {
                self.on_position_changed(metrics, emit);
                false
            }
            ScrollEvent::DragEnd { will_decelerate } => {
                self.on_drag_end(metrics, will_decelerate, emit)
            }
            ScrollEvent::DecelerationEnd => {
                self.on_deceleration_end(emit);
                false
            }
        }
    }

    /// Like [`Self::handle_event`], but collects the emitted effects into a `Vec`.
    pub fn handle_event_collect(
        &mut self,
        event: ScrollEvent,
        metrics: ScrollMetrics,
    ) -> Vec<Effect> {
        let mut out = Vec::new();
        self.handle_event(event, metrics, &mut |e| out.push(e));
        out
    }

    /// Starts a drag. Saves the bottom inset when the drag starts near or past the bottom edge.
    ///
    /// Never emits effects.
    pub fn on_drag_begin(&mut self, metrics: ScrollMetrics) {
        self.dragging = true;
        let distance = metrics.overscroll_distance();
        if metrics.is_scrollable() && distance <= self.options.difference_threshold {
            ptrace!(
                distance,
                bottom_inset = metrics.bottom_inset,
                "PullTracker: pull starting near bottom edge"
            );
            self.saved_bottom_inset = Some(metrics.bottom_inset);
        } else {
            self.saved_bottom_inset = None;
        }
    }

    /// Handles a scroll sample of the drag in progress.
    ///
    /// Reveals the footer once the user has pulled at least `difference_threshold` past the bottom
    /// edge. The reveal is one-directional: retreating above the threshold does not hide the
    /// footer, only drag end / deceleration end do.
    pub fn on_position_changed(&mut self, metrics: ScrollMetrics, emit: &mut dyn FnMut(Effect)) {
        if !self.dragging {
            ptrace!("PullTracker: position sample outside a drag ignored");
            return;
        }
        if self.phase == PullPhase::Revealed || !metrics.is_scrollable() {
            return;
        }
        let distance = metrics.overscroll_distance();
        if distance > -self.options.difference_threshold {
            return;
        }

        // A drag that began in the interior and reached the edge starts the pull here.
        let restore = *self.saved_bottom_inset.get_or_insert(metrics.bottom_inset);
        self.phase = PullPhase::Revealed;
        pdebug!(distance, restore, "PullTracker: footer revealed");

        emit(Effect::AttachFooter);
        emit(Effect::AnimateBottomInset {
            to: restore,
            duration_ms: self.options.animation_duration_ms,
        });
    }

    /// Ends the drag. Fires the refresh when released deep enough while revealed, then resets.
    ///
    /// Returns `true` when the refresh fired. `Effect::RefreshTriggered` precedes the reset
    /// effects, so listeners must not assume the footer is still attached afterwards.
    pub fn on_drag_end(
        &mut self,
        metrics: ScrollMetrics,
        will_decelerate: bool,
        emit: &mut dyn FnMut(Effect),
    ) -> bool {
        self.dragging = false;
        let distance = metrics.overscroll_distance();
        let refresh = self.phase == PullPhase::Revealed
            && metrics.is_scrollable()
            && distance < -self.options.refresh_threshold;
        if refresh {
            pdebug!(distance, "PullTracker: refresh triggered");
            emit(Effect::RefreshTriggered);
        }

        self.reset(emit);
        if !will_decelerate {
            self.saved_bottom_inset = None;
        }
        refresh
    }

    /// Momentum scrolling finished. Unconditionally returns to `Idle`.
    pub fn on_deceleration_end(&mut self, emit: &mut dyn FnMut(Effect)) {
        self.dragging = false;
        self.reset(emit);
        self.saved_bottom_inset = None;
    }

    fn reset(&mut self, emit: &mut dyn FnMut(Effect)) {
        if self.phase == PullPhase::Revealed {
            pdebug!("PullTracker: footer hidden");
        }
        self.phase = PullPhase::Idle;

        let duration_ms = self.options.animation_duration_ms;
        if let Some(to) = self.saved_bottom_inset {
            emit(Effect::AnimateBottomInset { to, duration_ms });
        }
        emit(Effect::DetachFooter { duration_ms });
    }
}

fn sanitize(options: PullOptions) -> PullOptions {
    let sanitized = options.sanitized();
    if sanitized != options {
        pwarn!(
            difference_threshold = options.difference_threshold,
            refresh_threshold = options.refresh_threshold,
            "PullOptions: invalid thresholds replaced"
        );
    }
    sanitized
}
