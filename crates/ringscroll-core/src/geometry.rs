//! 1-D projection of the host's 2-D scroll geometry.
//!
//! The engine never branches on vertical-vs-horizontal or forward-vs-reverse
//! itself; it reads and writes everything through [`AxisGeometry`], which
//! projects host rectangles and offsets onto a single normalized coordinate
//! (the "seat") that always grows in the scroll direction.

use crate::axis::{Axis, ScrollDirection};
use crate::config::EdgeInsets;

/// Pure main-axis projection keyed by a configured direction.
///
/// Holds no state beyond the direction; every method is a pure function of
/// its inputs, so callers may cache results within one scroll-event pass.
#[derive(Debug, Clone, Copy)]
pub struct AxisGeometry {
    direction: ScrollDirection,
}

impl AxisGeometry {
    pub fn new(direction: ScrollDirection) -> Self {
        Self { direction }
    }

    #[inline]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }

    /// Sign-adjusted main-axis component of a 2-D offset.
    #[inline]
    pub fn main(&self, offset: (f32, f32)) -> f32 {
        let raw = match self.axis() {
            Axis::Horizontal => offset.0,
            Axis::Vertical => offset.1,
        };
        raw * self.direction.sign()
    }

    /// Writes `value` into the main-axis component of `offset`, undoing the
    /// sign adjustment and preserving the cross-axis component.
    #[inline]
    pub fn with_main(&self, offset: (f32, f32), value: f32) -> (f32, f32) {
        let raw = value * self.direction.sign();
        match self.axis() {
            Axis::Horizontal => (raw, offset.1),
            Axis::Vertical => (offset.0, raw),
        }
    }

    /// Main-axis component of a size. Extents carry no sign.
    #[inline]
    pub fn main_extent(&self, size: (f32, f32)) -> f32 {
        match self.axis() {
            Axis::Horizontal => size.0,
            Axis::Vertical => size.1,
        }
    }

    /// Writes `value` into the main-axis component of `size`.
    #[inline]
    pub fn with_main_extent(&self, size: (f32, f32), value: f32) -> (f32, f32) {
        match self.axis() {
            Axis::Horizontal => (value, size.1),
            Axis::Vertical => (size.0, value),
        }
    }

    /// Margin on the edge items flow away from.
    pub fn leading_margin(&self, insets: EdgeInsets) -> f32 {
        match self.direction {
            ScrollDirection::TopToBottom => insets.top,
            ScrollDirection::BottomToTop => insets.bottom,
            ScrollDirection::LeftToRight => insets.left,
            ScrollDirection::RightToLeft => insets.right,
        }
    }

    /// Margin on the edge items flow toward.
    pub fn trailing_margin(&self, insets: EdgeInsets) -> f32 {
        match self.direction {
            ScrollDirection::TopToBottom => insets.bottom,
            ScrollDirection::BottomToTop => insets.top,
            ScrollDirection::LeftToRight => insets.right,
            ScrollDirection::RightToLeft => insets.left,
        }
    }
}
