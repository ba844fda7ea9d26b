//! Fixed-size pool of recyclable item views.
//!
//! Slots are created through the injected factory during start and never
//! after; steady-state binding always reuses. Storage stays in insertion
//! order (the order per-frame ticks run in) while a rotating cursor tracks
//! which slot is spatially first, so recycling an edge slot is O(1) with no
//! reshuffling.

use ringscroll_core::{PooledItem, ViewFactory};
use smallvec::SmallVec;

/// Inline capacity for slot storage. Typical pools hold a screenful of
/// items plus one or two, so 8 avoids heap allocation in the common case.
type SlotVec<T> = SmallVec<[PoolSlot<T>; 8]>;

/// One recyclable view slot.
///
/// The pool owns the binding (`bound_index`) and the main-axis `position`;
/// the wrapped view owns its internal render state.
pub struct PoolSlot<T> {
    view: Box<dyn PooledItem<T>>,
    bound_index: Option<usize>,
    position: f32,
}

impl<T> PoolSlot<T> {
    fn new(view: Box<dyn PooledItem<T>>) -> Self {
        Self {
            view,
            bound_index: None,
            position: 0.0,
        }
    }

    /// Data index this slot currently displays, if any.
    #[inline]
    pub fn bound_index(&self) -> Option<usize> {
        self.bound_index
    }

    /// Main-axis coordinate of the slot's leading edge.
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    pub(crate) fn bind(&mut self, data: &T, index: usize) {
        self.bound_index = Some(index);
        self.view.bind(data, index);
    }

    pub(crate) fn place(&mut self, position: f32) {
        self.position = position;
        self.view.place(position);
    }

    /// Unbinds without touching the view; it stays alive for rebinding.
    pub(crate) fn release(&mut self) {
        self.bound_index = None;
    }

    pub(crate) fn teardown_content(&mut self) {
        self.view.on_destroy();
        self.bound_index = None;
    }
}

/// Fixed-capacity collection of [`PoolSlot`]s.
pub struct ItemPool<T> {
    slots: SlotVec<T>,
    capacity: usize,
    /// Slot id (insertion index) that is currently spatially first.
    first: usize,
}

impl<T> ItemPool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: SmallVec::new(),
            capacity,
            first: 0,
        }
    }

    /// Instantiates one view through the factory and wires it up.
    ///
    /// Only legal while filling the pool at start; asking for a slot beyond
    /// the configured capacity is a logic error, not a runtime condition.
    pub(crate) fn create(&mut self, factory: &mut ViewFactory<T>) -> usize {
        assert!(
            self.slots.len() < self.capacity,
            "item pool exceeded configured capacity ({})",
            self.capacity
        );
        let mut view = factory();
        view.init_components();
        view.init_events();
        self.slots.push(PoolSlot::new(view));
        self.slots.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots currently bound to a data index.
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|s| s.bound_index.is_some()).count()
    }

    #[inline]
    pub fn slot(&self, id: usize) -> &PoolSlot<T> {
        &self.slots[id]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, id: usize) -> &mut PoolSlot<T> {
        &mut self.slots[id]
    }

    /// Slot id at spatial offset `k` from the spatially-first slot.
    #[inline]
    pub(crate) fn spatial(&self, k: usize) -> usize {
        (self.first + k) % self.slots.len()
    }

    /// Id of the slot at the leading edge of the bound window.
    #[inline]
    pub fn spatial_first_id(&self) -> usize {
        self.first
    }

    /// Id of the slot at the trailing edge of the bound window.
    #[inline]
    pub fn spatial_last_id(&self) -> usize {
        self.spatial(self.slots.len() - 1)
    }

    /// The spatially-first slot moved to the trailing edge.
    pub(crate) fn rotate_forward(&mut self) {
        self.first = (self.first + 1) % self.slots.len();
    }

    /// The spatially-last slot moved to the leading edge.
    pub(crate) fn rotate_backward(&mut self) {
        self.first = (self.first + self.slots.len() - 1) % self.slots.len();
    }

    pub(crate) fn reset_rotation(&mut self) {
        self.first = 0;
    }

    /// Bound (data index, position) pairs in spatial order.
    pub fn bound_items(&self) -> Vec<(usize, f32)> {
        (0..self.slots.len())
            .map(|k| self.slot(self.spatial(k)))
            .filter_map(|s| s.bound_index.map(|i| (i, s.position)))
            .collect()
    }

    /// Per-frame tick, insertion order.
    pub(crate) fn for_each_update(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.view.on_update();
        }
    }

    /// Tears down bound content on every slot but keeps the views for reuse.
    pub(crate) fn release_all(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.teardown_content();
        }
        self.first = 0;
    }

    /// Full teardown: destroys views and drops the slots.
    pub(crate) fn destroy_all(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.view.on_destroy();
        }
        self.slots.clear();
        self.first = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullItem;

    impl PooledItem<u32> for NullItem {
        fn bind(&mut self, _data: &u32, _index: usize) {}
        fn place(&mut self, _main_offset: f32) {}
    }

    fn factory() -> ViewFactory<u32> {
        Box::new(|| Box::new(NullItem))
    }

    #[test]
    fn creates_up_to_capacity() {
        let mut pool = ItemPool::new(3);
        let mut f = factory();
        for _ in 0..3 {
            pool.create(&mut f);
        }
        assert_eq!(pool.len(), 3);
    }

    #[test]
    #[should_panic(expected = "exceeded configured capacity")]
    fn creating_past_capacity_panics() {
        let mut pool = ItemPool::new(1);
        let mut f = factory();
        pool.create(&mut f);
        pool.create(&mut f);
    }

    #[test]
    fn rotation_walks_the_ring() {
        let mut pool = ItemPool::<u32>::new(3);
        let mut f = factory();
        for _ in 0..3 {
            pool.create(&mut f);
        }
        assert_eq!(pool.spatial_first_id(), 0);
        assert_eq!(pool.spatial_last_id(), 2);
        pool.rotate_forward();
        assert_eq!(pool.spatial_first_id(), 1);
        assert_eq!(pool.spatial_last_id(), 0);
        pool.rotate_backward();
        assert_eq!(pool.spatial_first_id(), 0);
    }

    #[test]
    fn release_all_unbinds_but_keeps_slots() {
        let mut pool = ItemPool::new(2);
        let mut f = factory();
        for _ in 0..2 {
            pool.create(&mut f);
        }
        pool.slot_mut(0).bind(&7, 0);
        pool.slot_mut(1).bind(&8, 1);
        assert_eq!(pool.bound_count(), 2);
        pool.release_all();
        assert_eq!(pool.bound_count(), 0);
        assert_eq!(pool.len(), 2);
    }
}
