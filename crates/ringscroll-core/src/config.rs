//! Engine configuration, injected read-only at construction.

use crate::axis::{ScrollDirection, ScrollSort};
use crate::error::RingError;

/// Directional margin extents around the content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    /// Same margin on all four edges.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

/// Static configuration of a ring scroller.
///
/// `init_items` fixes the pool size for the lifetime of a run; the pool never
/// grows or shrinks with the dataset. `item_extent` and `spacing_extent` are
/// whole units along the scroll axis (items are uniform).
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    /// Number of pooled item views, created once at start.
    pub init_items: usize,
    /// Axis and travel sense of the list.
    pub direction: ScrollDirection,
    /// Initial dataset ordering.
    pub sort: ScrollSort,
    /// Wrap seamlessly past the dataset ends.
    pub circular: bool,
    /// Item size along the scroll axis.
    pub item_extent: u32,
    /// Gap between adjacent items along the scroll axis.
    pub spacing_extent: u32,
    /// Margins applied around the content (non-circular mode only).
    pub margins: EdgeInsets,
    /// Process one scroll event out of every `refresh_ratio`. 1 = every event.
    pub refresh_ratio: u32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            init_items: 8,
            direction: ScrollDirection::TopToBottom,
            sort: ScrollSort::Forward,
            circular: false,
            item_extent: 48,
            spacing_extent: 0,
            margins: EdgeInsets::ZERO,
            refresh_ratio: 1,
        }
    }
}

impl RingConfig {
    /// Distance between the leading edges of two adjacent items.
    #[inline]
    pub fn step(&self) -> f32 {
        (self.item_extent + self.spacing_extent) as f32
    }

    /// Rejects configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), RingError> {
        if self.init_items == 0 {
            return Err(RingError::invalid_config("init_items must be at least 1"));
        }
        if self.item_extent == 0 {
            return Err(RingError::invalid_config("item_extent must be positive"));
        }
        if self.refresh_ratio == 0 {
            return Err(RingError::invalid_config("refresh_ratio must be at least 1"));
        }
        Ok(())
    }
}
