//! Virtualized circular scrolling for large or unbounded datasets.
//!
//! A fixed pool of item views is bound to a sliding window of the dataset
//! and recycled as the user scrolls; in circular mode the window wraps past
//! the dataset ends with no visible seam.
//!
//! # Architecture
//!
//! - [`ItemPool`] - recyclable view slots with a rotating spatial cursor
//! - [`RingScroller`] - the position engine: scroll recompute, wrap
//!   correction, locates, and dataset mutations
//! - [`LocateTarget`] / [`LocationParam`] - programmatic jump targets
//!
//! The engine is headless and single-threaded: the host reports scroll
//! events through [`RingScroller::on_scroll_changed`] and ticks
//! [`RingScroller::update`] once per frame with its clock.

pub mod engine;
pub mod locate;
pub mod pool;
pub mod state;

pub use engine::RingScroller;
pub use locate::{LocateTarget, LocationParam};
pub use pool::{ItemPool, PoolSlot};
pub use state::{EnginePhase, RingStats};
