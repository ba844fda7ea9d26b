//! Animation support for ringscroll.
//!
//! Provides time-based easing curves and a small tween driver. The locator
//! in `ringscroll-foundation` only depends on the contract here: a tween has
//! a bounded duration, reports an eased sample per tick, and finishes exactly
//! at its target.

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::{AnimationSpec, Tween};
