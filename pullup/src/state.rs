use crate::PullPhase;

/// A lightweight, serializable snapshot of the tracker's persistent state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// This is useful when the host view is torn down and re-created mid-gesture (e.g. a list
/// reparented during a drag) without coupling the tracker to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullSnapshot {
    pub phase: PullPhase,
    /// Bottom inset saved when the current pull started. `None` outside a pull.
    pub saved_bottom_inset: Option<f32>,
    pub dragging: bool,
}
