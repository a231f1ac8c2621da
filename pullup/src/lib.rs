//! A headless bottom pull-to-refresh state machine.
//!
//! For a controller that drives a host scroll view (and inset tweens), see the `pullup-adapter`
//! crate.
//!
//! This crate classifies drag-lifecycle events and continuously sampled scroll offsets into a
//! small state machine: dragging past the natural end of content reveals a footer placeholder, and
//! releasing past a distance threshold requests a refresh.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - drag events (begin, position changed, end, deceleration end)
//! - a [`ScrollMetrics`] snapshot per event (offset, content/viewport height, insets)
//! - an implementation of the emitted [`Effect`]s (footer attach/detach, inset animation)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod state;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use options::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_DIFFERENCE_THRESHOLD, DEFAULT_REFRESH_THRESHOLD,
    PullOptions,
};
pub use state::PullSnapshot;
pub use tracker::PullTracker;
pub use types::{Effect, PullPhase, ScrollEvent, ScrollMetrics};
