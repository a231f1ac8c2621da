use crate::{Easing, Tween};

/// Drives a bottom inset value over time for hosts without their own animation engine.
///
/// Requests are last-write-wins: a new [`InsetAnimator::animate_to`] while a tween is running
/// restarts from the value currently on screen, so the inset never jumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsetAnimator {
    value: f32,
    tween: Option<Tween>,
    easing: Easing,
}

impl InsetAnimator {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            tween: None,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The last value produced by [`Self::tick`] (or set immediately).
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value the inset is heading to.
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.value, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Sets the value immediately, cancelling any running tween.
    pub fn set_immediate(&mut self, value: f32) {
        self.tween = None;
        self.value = value;
    }

    /// Starts (or retargets) a tween to `to`. A zero duration applies immediately.
    pub fn animate_to(&mut self, to: f32, now_ms: u64, duration_ms: u64) {
        if duration_ms == 0 {
            self.set_immediate(to);
            return;
        }
        match &mut self.tween {
            Some(tween) => {
                tween.retarget(now_ms, to, duration_ms);
                self.value = tween.from;
            }
            None => {
                self.tween = Some(Tween::new(self.value, to, now_ms, duration_ms, self.easing));
            }
        }
    }

    /// Advances the animation.
    ///
    /// Returns the new value while a tween is active (including the final sample), `None`
    /// otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        self.value = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.value)
    }
}

impl Default for InsetAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}
