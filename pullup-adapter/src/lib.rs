//! Adapter utilities for the `pullup` crate.
//!
//! The `pullup` crate is UI-agnostic and focuses on the pull-to-refresh state machine. This crate
//! provides small, framework-neutral pieces commonly needed by adapters:
//!
//! - [`ScrollSurface`]: the host scroll view capability (metrics, inset, footer slot)
//! - [`BottomPullController`]: forwards drag events and applies the emitted effects
//! - [`InsetAnimator`] / [`Tween`]: inset animation for hosts without an animation engine
//!
//! This crate is intentionally framework-agnostic (no UIKit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod controller;
mod delegate;
mod surface;
mod tween;


pub use animator::InsetAnimator;
pub use controller::BottomPullController;
pub use delegate::PullRefreshDelegate;
pub use surface::ScrollSurface;
pub use tween::{Easing, Tween};

pub use pullup::{Effect, PullOptions, PullPhase, ScrollEvent, ScrollMetrics};
