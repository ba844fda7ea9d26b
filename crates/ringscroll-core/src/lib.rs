//! Core contracts for the ringscroll engine: axis geometry, configuration,
//! and the capability traits the engine expects its host to provide.
//!
//! Nothing in this crate scrolls anything by itself. The engine in
//! `ringscroll-foundation` composes these pieces; rendering hosts implement
//! [`ScrollHost`] and [`PooledItem`] to plug in.

pub mod axis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod host;

pub use axis::{Axis, ScrollDirection, ScrollSort};
pub use config::{EdgeInsets, RingConfig};
pub use error::RingError;
pub use geometry::AxisGeometry;
pub use host::{PooledItem, ScrollHost, ViewFactory};
