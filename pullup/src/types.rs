/// A snapshot of the host view's vertical scroll geometry.
///
/// Adapters build this from the real scroll container every time an event is delivered. The
/// tracker never stores it: content size and viewport can change between events (rotation, data
/// reload), so both derived queries are recomputed per call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub content_offset_y: f32,
    pub content_height: f32,
    pub viewport_height: f32,
    pub top_inset: f32,
    pub bottom_inset: f32,
}

impl ScrollMetrics {
    pub fn new(content_offset_y: f32, content_height: f32, viewport_height: f32) -> Self {
        Self {
            content_offset_y,
            content_height,
            viewport_height,
            top_inset: 0.0,
            bottom_inset: 0.0,
        }
    }

    pub fn with_insets(mut self, top_inset: f32, bottom_inset: f32) -> Self {
        self.top_inset = top_inset;
        self.bottom_inset = bottom_inset;
        self
    }

    pub fn with_offset(mut self, content_offset_y: f32) -> Self {
        self.content_offset_y = content_offset_y;
        self
    }

    /// The largest resting offset: the offset at which the content's bottom edge meets the
    /// viewport's bottom edge.
    pub fn max_offset(&self) -> f32 {
        self.content_height - self.viewport_height
    }

    /// Signed gap between the current offset and the bottom resting offset.
    ///
    /// Positive while content still extends below the viewport, zero at rest, negative once the
    /// user has dragged past the bottom edge (the magnitude is the overscroll depth).
    pub fn overscroll_distance(&self) -> f32 {
        self.max_offset() - self.content_offset_y
    }

    /// Whether the content exceeds the visible scrollable area.
    ///
    /// Short lists that never scroll must not reveal the footer.
    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height - self.top_inset - self.bottom_inset
    }
}

/// Drag-lifecycle events delivered by the host, in causal order per gesture.
///
/// `DecelerationEnd` only follows `DragEnd { will_decelerate: true }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEvent {
    DragBegin,
    PositionChanged,
    DragEnd { will_decelerate: bool },
    DecelerationEnd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PullPhase {
    /// Footer detached.
    #[default]
    Idle,
    /// Footer attached to the trailing decoration slot.
    Revealed,
}

/// A side effect requested by [`crate::PullTracker`].
///
/// Effects are emitted in the order the host must apply them. Animated effects are fire-and-forget:
/// a later request for the same property supersedes an earlier one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Notify the refresh listener. Always emitted before the reset effects of the same drag end.
    RefreshTriggered,
    /// Attach the footer placeholder to the trailing decoration slot.
    AttachFooter,
    /// Detach the footer, animated alongside the accompanying inset change.
    DetachFooter { duration_ms: u64 },
    /// Animate the bottom content inset to `to`.
    AnimateBottomInset { to: f32, duration_ms: u64 },
}
