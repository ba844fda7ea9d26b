//! Observable engine state.

/// What the engine is doing right now.
///
/// Scroll events are processed synchronously, so `Scrolling` is only ever
/// observed from within callbacks they trigger; `Locating` persists across
/// frames while an animated locate is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnginePhase {
    #[default]
    Idle,
    Scrolling,
    Locating,
}

/// Counters describing pool usage and recycling behavior.
///
/// Used for testing and debugging virtualization behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingStats {
    /// Slots currently bound to a data index.
    pub bound_items: usize,
    /// Total slots in the pool.
    pub pool_items: usize,
    /// Rebinds performed by boundary-crossing recycling.
    pub rebind_count: usize,
    /// Seamless wrap corrections applied in circular mode.
    pub wrap_count: usize,
}
