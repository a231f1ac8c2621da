pub const DEFAULT_DIFFERENCE_THRESHOLD: f32 = 10.0;
pub const DEFAULT_REFRESH_THRESHOLD: f32 = 100.0;
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 200;

/// Configuration for [`crate::PullTracker`].
///
/// Distances are in content-coordinate units (the same units as [`crate::ScrollMetrics`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PullOptions {
    /// Distance past the bottom edge before the footer is revealed.
    ///
    /// A drag that begins within this distance of the bottom edge counts as a pull.
    pub difference_threshold: f32,
    /// Overscroll depth at release required to fire the refresh.
    pub refresh_threshold: f32,
    /// Duration of inset/footer transitions. `0` means "apply immediately".
    pub animation_duration_ms: u64,
}

impl Default for PullOptions {
    fn default() -> Self {
        Self {
            difference_threshold: DEFAULT_DIFFERENCE_THRESHOLD,
            refresh_threshold: DEFAULT_REFRESH_THRESHOLD,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

impl PullOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difference_threshold(mut self, difference_threshold: f32) -> Self {
        self.difference_threshold = difference_threshold;
        self
    }

    pub fn with_refresh_threshold(mut self, refresh_threshold: f32) -> Self {
        self.refresh_threshold = refresh_threshold;
        self
    }

    pub fn with_animation_duration_ms(mut self, animation_duration_ms: u64) -> Self {
        self.animation_duration_ms = animation_duration_ms;
        self
    }

    /// Returns a copy with usable thresholds.
    ///
    /// Non-finite thresholds fall back to their defaults; negative thresholds are treated as their
    /// magnitude.
    pub fn sanitized(self) -> Self {
        Self {
            difference_threshold: sanitize_threshold(
                self.difference_threshold,
                DEFAULT_DIFFERENCE_THRESHOLD,
            ),
            refresh_threshold: sanitize_threshold(
                self.refresh_threshold,
                DEFAULT_REFRESH_THRESHOLD,
            ),
            animation_duration_ms: self.animation_duration_ms,
        }
    }
}

fn sanitize_threshold(value: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        return fallback;
    }
    if value < 0.0 { -value } else { value }
}
