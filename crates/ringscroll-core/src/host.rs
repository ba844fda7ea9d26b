//! Capability traits the engine expects from its rendering host.
//!
//! The engine is headless: it owns positions and bindings, the host owns
//! pixels. A host implements [`ScrollHost`] for the scroll container and
//! [`PooledItem`] for each recyclable item view; the engine drives both and
//! never reaches past these seams.

/// The scroll container: a viewport over a content rectangle.
///
/// Offsets and sizes are raw 2-D host values; the engine projects them onto
/// the scroll axis itself. The content size must only ever be written by the
/// engine; it is a derived function of the dataset, never independent state.
pub trait ScrollHost {
    /// Current content offset relative to the viewport anchor.
    fn content_offset(&self) -> (f32, f32);

    /// Moves the content. Must not re-enter the engine.
    fn set_content_offset(&mut self, offset: (f32, f32));

    /// Current scroll velocity, used to infer travel direction.
    fn velocity(&self) -> (f32, f32);

    /// Size of the visible viewport rectangle.
    fn viewport_size(&self) -> (f32, f32);

    /// Size of the content rectangle.
    fn content_size(&self) -> (f32, f32);

    /// Resizes the content rectangle.
    fn set_content_size(&mut self, size: (f32, f32));

    /// Enables or disables user scrolling. Returns false if the host could
    /// not apply the change; the engine degrades gracefully on failure.
    fn set_scroll_enabled(&mut self, enabled: bool) -> bool;
}

/// One recyclable item view.
///
/// The engine calls `bind` whenever the slot is assigned a data index and
/// `place` whenever its main-axis position changes; those two calls are the
/// only way displayed content moves. `on_update` ticks every frame for
/// item-local animation.
pub trait PooledItem<T> {
    /// One-time component wiring after the view is instantiated.
    fn init_components(&mut self) {}

    /// One-time event wiring after the view is instantiated.
    fn init_events(&mut self) {}

    /// Per-frame tick.
    fn on_update(&mut self) {}

    /// Tears down bound content. The view itself stays alive for rebinding
    /// unless the whole engine is being destroyed.
    fn on_destroy(&mut self) {}

    /// Displays `data`, currently at `index` in the dataset.
    fn bind(&mut self, data: &T, index: usize);

    /// Positions the view at `main_offset` along the scroll axis.
    fn place(&mut self, main_offset: f32);
}

/// Factory producing pooled item views. Called at most `init_items` times
/// over the lifetime of a run.
pub type ViewFactory<T> = Box<dyn FnMut() -> Box<dyn PooledItem<T>>>;
