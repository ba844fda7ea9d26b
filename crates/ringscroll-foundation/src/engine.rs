//! The circular position engine.
//!
//! Maps a continuous scroll offset to data-index bindings over a fixed slot
//! pool, recycling edge slots as the viewport crosses item boundaries. In
//! circular mode the whole window relocates by exactly one dataset extent
//! when the raw offset reaches the scroll range's edges, so wrapping never
//! produces a visible jump.
//!
//! Everything runs synchronously on the host's thread: scroll events are
//! processed to completion inside [`RingScroller::on_scroll_changed`], and
//! animated locates are time-sliced across [`RingScroller::update`] ticks.

use std::rc::Rc;

use ringscroll_animation::AnimationSpec;
use ringscroll_core::{
    AxisGeometry, RingConfig, RingError, ScrollHost, ScrollSort, ViewFactory,
};

use crate::locate::{ActiveLocate, LocateTarget, LocationParam};
use crate::pool::ItemPool;
use crate::state::{EnginePhase, RingStats};

/// Sub-pixel slack when testing the raw offset against the scroll range's
/// leading edge. Tunable; verify visually rather than by arithmetic alone.
pub const EDGE_EPSILON: f32 = 1.0;

/// Seat distances below this count as "already there" for locates.
pub const SEAT_EPSILON: f32 = 0.5;

/// Safety cap on recycles per pass, far above any realistic fling.
const MAX_RECYCLES_PER_PASS: usize = 4096;

/// Virtualized, optionally circular scroll engine over a dataset of `T`.
///
/// Owns the dataset, the slot pool, and the mapping from scroll offset to
/// bindings. The host `H` owns pixels and reports geometry; item views are
/// produced once by the injected factory and recycled forever after.
pub struct RingScroller<T, H: ScrollHost> {
    cfg: RingConfig,
    geometry: AxisGeometry,
    host: H,
    factory: ViewFactory<T>,

    data: Vec<T>,
    pool: ItemPool<T>,

    /// Leading-edge coordinate of the first bound slot.
    content_site: f32,
    /// Data index shown by the spatially-first slot.
    head_index: usize,

    first_run: bool,
    refresh_locked: bool,
    refresh_timer: u32,
    phase: EnginePhase,

    locate_spec: AnimationSpec,
    active_locate: Option<ActiveLocate>,
    locate_observers: Vec<(u64, Rc<dyn Fn()>)>,
    next_observer_id: u64,

    rebind_count: usize,
    wrap_count: usize,
}

impl<T, H: ScrollHost> RingScroller<T, H> {
    /// Builds an engine over `host` with views produced by `factory`.
    ///
    /// Fails fast when the configuration is unusable or the host reports a
    /// viewport with no extent along the scroll axis.
    pub fn new(cfg: RingConfig, host: H, factory: ViewFactory<T>) -> Result<Self, RingError> {
        cfg.validate()?;
        let geometry = AxisGeometry::new(cfg.direction);
        if geometry.main_extent(host.viewport_size()) <= 0.0 {
            return Err(RingError::invalid_config(
                "viewport has no extent along the scroll axis",
            ));
        }
        Ok(Self {
            pool: ItemPool::new(cfg.init_items),
            cfg,
            geometry,
            host,
            factory,
            data: Vec::new(),
            content_site: 0.0,
            head_index: 0,
            first_run: false,
            refresh_locked: false,
            refresh_timer: 0,
            phase: EnginePhase::Idle,
            locate_spec: AnimationSpec::default(),
            active_locate: None,
            locate_observers: Vec::new(),
            next_observer_id: 0,
            rebind_count: 0,
            wrap_count: 0,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Starts a run: fills the pool, sizes the content, and binds the
    /// initial window starting at index 0.
    ///
    /// `initial` is appended to whatever the dataset already holds (relevant
    /// when restarting after [`reset_items`](Self::reset_items)); with
    /// [`ScrollSort::Backward`] it is reversed first so the last inserted
    /// item leads.
    pub fn start(&mut self, initial: Option<Vec<T>>) {
        self.first_run = true;
        if let Some(mut items) = initial {
            if self.cfg.sort == ScrollSort::Backward {
                items.reverse();
            }
            self.data.extend(items);
        }
        self.set_refresh_locked(self.cfg.init_items >= self.data.len());
        while self.pool.len() < self.cfg.init_items {
            self.pool.create(&mut self.factory);
        }
        self.apply_content_extent();
        self.content_site = self.top_seat();
        self.head_index = 0;
        if self.cfg.circular {
            self.set_now_seat(self.top_seat());
        }
        self.rebind_window();
    }

    /// Full teardown: destroys views, drops observers, clears the dataset.
    /// The engine is inert afterward.
    pub fn destroy(&mut self) {
        self.active_locate = None;
        self.locate_observers.clear();
        self.pool.destroy_all();
        self.data.clear();
        self.refresh_locked = true;
        self.phase = EnginePhase::Idle;
    }

    /// Per-frame tick with the host's clock. Advances any in-flight locate,
    /// then ticks every pooled view.
    pub fn update(&mut self, now_ms: u64) {
        if let Some(mut locate) = self.active_locate.take() {
            let (seat, finished) = locate.sample(now_ms);
            self.set_now_seat(seat);
            self.refresh();
            if finished {
                self.phase = EnginePhase::Idle;
                self.fire_locate_observers();
            } else {
                self.active_locate = Some(locate);
                self.phase = EnginePhase::Locating;
            }
        }
        self.pool.for_each_update();
    }

    /// Mirrors `enabled` onto the host's scroll interaction. If the host
    /// refuses the toggle the engine locks its own refresh instead of
    /// propagating the failure.
    pub fn set_slide_lockout(&mut self, enabled: bool) {
        if !self.host.set_scroll_enabled(enabled) {
            log::error!("scroll host refused interaction toggle; locking refresh");
            self.refresh_locked = true;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scroll path
    // ─────────────────────────────────────────────────────────────────────

    /// Host entry point for offset-changed events.
    ///
    /// The very first event after [`start`](Self::start) is the host's
    /// layout settle and is swallowed: there is nothing to recycle yet.
    pub fn on_scroll_changed(&mut self) {
        if self.refresh_locked || self.data.is_empty() || self.pool.is_empty() {
            return;
        }
        if self.first_run {
            self.first_run = false;
            return;
        }
        self.refresh_timer += 1;
        if self.refresh_timer < self.cfg.refresh_ratio {
            return;
        }
        self.refresh_timer = 0;

        self.phase = EnginePhase::Scrolling;
        self.refresh();
        self.phase = if self.active_locate.is_some() {
            EnginePhase::Locating
        } else {
            EnginePhase::Idle
        };
    }

    /// Recomputes bindings for the current offset: boundary-crossing
    /// recycling in both directions, then the circular wrap correction.
    fn refresh(&mut self) {
        if self.data.is_empty() || self.pool.is_empty() {
            return;
        }
        let step = self.cfg.step();
        let spacing = self.cfg.spacing_extent as f32;
        let mut recycled = 0usize;
        while self.now_seat() - self.content_site > step && self.can_recycle_forward() {
            self.recycle_forward();
            recycled += 1;
            if recycled >= MAX_RECYCLES_PER_PASS {
                log::warn!("recycling pass hit the safety cap; offset moved too far in one event");
                break;
            }
        }
        while self.content_site - self.now_seat() > spacing && self.can_recycle_backward() {
            self.recycle_backward();
            recycled += 1;
            if recycled >= MAX_RECYCLES_PER_PASS {
                log::warn!("recycling pass hit the safety cap; offset moved too far in one event");
                break;
            }
        }
        if self.cfg.circular {
            self.wrap_correct();
            return;
        }
        // At the hard ends of the raw range the distance conditions can
        // leave a step of viewport uncovered; pin the window to the dataset
        // end instead of clamping one item short.
        if self.at_trailing_edge() {
            while self.can_recycle_forward() {
                self.recycle_forward();
            }
        } else if self.at_leading_edge() {
            while self.can_recycle_backward() {
                self.recycle_backward();
            }
        }
    }

    /// Recycling needs a full window: with the whole dataset already bound
    /// there is nothing to rotate in, and wrapping a dataset smaller than
    /// the pool would alias one index to two slots.
    fn can_recycle(&self) -> bool {
        !self.pool.is_empty() && self.pool.bound_count() == self.pool.len()
    }

    fn can_recycle_forward(&self) -> bool {
        self.can_recycle()
            && if self.cfg.circular {
                self.data.len() > self.pool.len()
            } else {
                self.head_index + self.pool.len() < self.data.len()
            }
    }

    fn can_recycle_backward(&self) -> bool {
        self.can_recycle()
            && if self.cfg.circular {
                self.data.len() > self.pool.len()
            } else {
                self.head_index > 0
            }
    }

    /// Moves the spatially-first slot to the trailing edge, bound to the
    /// next forward index.
    fn recycle_forward(&mut self) {
        let len = self.data.len();
        let n = self.pool.len();
        let next_index = if self.cfg.circular {
            (self.head_index + n) % len
        } else {
            self.head_index + n
        };
        let step = self.cfg.step();
        let slot_id = self.pool.spatial_first_id();
        let tail_pos = self.pool.slot(self.pool.spatial_last_id()).position();
        self.pool.slot_mut(slot_id).bind(&self.data[next_index], next_index);
        self.pool.slot_mut(slot_id).place(tail_pos + step);
        self.pool.rotate_forward();
        self.content_site += step;
        self.head_index = if self.cfg.circular {
            (self.head_index + 1) % len
        } else {
            self.head_index + 1
        };
        self.rebind_count += 1;
    }

    /// Moves the spatially-last slot to the leading edge, bound to the
    /// previous index.
    fn recycle_backward(&mut self) {
        let len = self.data.len();
        let prev_index = if self.cfg.circular {
            (self.head_index + len - 1) % len
        } else {
            self.head_index - 1
        };
        let step = self.cfg.step();
        let slot_id = self.pool.spatial_last_id();
        let head_pos = self.pool.slot(self.pool.spatial_first_id()).position();
        self.pool.slot_mut(slot_id).bind(&self.data[prev_index], prev_index);
        self.pool.slot_mut(slot_id).place(head_pos - step);
        self.pool.rotate_backward();
        self.content_site -= step;
        self.head_index = prev_index;
        self.rebind_count += 1;
    }

    /// Relocates the window by exactly one dataset extent when the raw
    /// offset reaches either end of the scroll range.
    ///
    /// Seat, anchor, and every slot position shift together in the same
    /// frame, so on-screen positions (`position - seat`) are unchanged; the
    /// content border (two viewport spans) guarantees the shifted offset
    /// stays inside the host's range.
    fn wrap_correct(&mut self) {
        let ds = self.dataset_extent();
        if ds <= 0.0 {
            return;
        }
        if self.at_trailing_edge() {
            if self.now_seat() - ds >= -EDGE_EPSILON {
                self.shift_all(-ds);
                self.wrap_count += 1;
            }
        } else if self.at_leading_edge() && self.now_seat() + ds <= self.foot_seat() + EDGE_EPSILON
        {
            self.shift_all(ds);
            self.wrap_count += 1;
        }
    }

    fn shift_all(&mut self, delta: f32) {
        self.content_site += delta;
        for k in 0..self.pool.len() {
            let position = self.pool.slot(k).position() + delta;
            self.pool.slot_mut(k).place(position);
        }
        let seat = self.now_seat() + delta;
        self.set_now_seat(seat);
    }

    /// Rebinds the whole window at the current anchor: indices
    /// `head..head+n` laid out one step apart from `content_site`, surplus
    /// slots released. The immediate-consistency path for mutations and
    /// location restores.
    fn rebind_window(&mut self) {
        if self.pool.is_empty() {
            return;
        }
        self.pool.reset_rotation();
        let len = self.data.len();
        if len == 0 {
            for k in 0..self.pool.len() {
                self.pool.slot_mut(k).release();
            }
            self.head_index = 0;
            return;
        }
        let n = self.bound_target();
        let step = self.cfg.step();
        if self.cfg.circular {
            self.head_index %= len;
        } else {
            let clamped = self.head_index.min(len - n);
            if clamped < self.head_index {
                // The anchor names the head slot's position; keep them in step.
                self.content_site -= (self.head_index - clamped) as f32 * step;
                self.head_index = clamped;
            }
        }
        for k in 0..self.pool.len() {
            if k < n {
                let index = (self.head_index + k) % len;
                self.pool.slot_mut(k).bind(&self.data[index], index);
                self.pool.slot_mut(k).place(self.content_site + k as f32 * step);
            } else {
                self.pool.slot_mut(k).release();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Locator
    // ─────────────────────────────────────────────────────────────────────

    /// Jumps to `target`, animated over the configured spec or instantly.
    ///
    /// Instant locates whose target already equals the current seat are
    /// true no-ops: no completion observer fires.
    pub fn to_location(&mut self, target: LocateTarget, animate: bool) {
        let seat = match target {
            LocateTarget::Seat(seat) => {
                if self.cfg.circular {
                    seat
                } else {
                    self.clamp_seat(seat)
                }
            }
            LocateTarget::Index(index) => match self.resolve_index_seat(index) {
                Some(seat) => seat,
                None => {
                    log::debug!("locate index {index} out of range; ignoring");
                    return;
                }
            },
        };
        self.locate_to_seat(seat, animate);
    }

    /// Jumps to the first item matching `seek` against `probe`. A miss is a
    /// silent no-op and fires nothing.
    pub fn to_location_match(
        &mut self,
        seek: impl Fn(&T, &T) -> bool,
        probe: &T,
        animate: bool,
    ) {
        match self.data.iter().position(|item| seek(item, probe)) {
            Some(index) => self.to_location(LocateTarget::Index(index), animate),
            None => log::debug!("locate predicate matched nothing; ignoring"),
        }
    }

    /// Jumps to the resting leading position.
    pub fn to_top(&mut self, animate: bool) {
        let seat = self.top_seat();
        self.locate_to_seat(seat, animate);
    }

    /// Jumps to the resting trailing position.
    pub fn to_bottom(&mut self, animate: bool) {
        let seat = self.bottom_seat().max(self.top_seat());
        self.locate_to_seat(seat, animate);
    }

    /// Snapshot of the current scroll location.
    pub fn location_param(&self) -> LocationParam {
        LocationParam {
            seat: self.now_seat(),
            content_site: self.content_site,
            head_index: self.head_index,
        }
    }

    /// Restores a previously captured location. Instant restores put the
    /// anchor and window back exactly; animated ones tween to the seat and
    /// let recycling rebuild the window on the way.
    pub fn to_location_param(&mut self, param: LocationParam, animate: bool) {
        if animate {
            self.locate_to_seat(param.seat, true);
            return;
        }
        self.active_locate = None;
        self.head_index = param.head_index;
        self.content_site = param.content_site;
        self.rebind_window();
        self.set_now_seat(param.seat);
        self.refresh();
        self.phase = EnginePhase::Idle;
        self.fire_locate_observers();
    }

    /// Replaces the locate animation spec used by subsequent calls.
    pub fn set_locate_spec(&mut self, spec: AnimationSpec) {
        self.locate_spec = spec;
    }

    /// Registers a completion observer; returns its removal id.
    pub fn add_locate_observer(&mut self, observer: impl Fn() + 'static) -> u64 {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.locate_observers.push((id, Rc::new(observer)));
        id
    }

    /// Removes a previously registered completion observer.
    pub fn remove_locate_observer(&mut self, id: u64) {
        self.locate_observers.retain(|(known, _)| *known != id);
    }

    fn locate_to_seat(&mut self, seat: f32, animate: bool) {
        if animate {
            // Last writer wins: an in-flight locate is dropped and its
            // completion suppressed.
            self.active_locate = Some(ActiveLocate::new(self.now_seat(), seat, self.locate_spec));
            self.phase = EnginePhase::Locating;
            return;
        }
        if self.active_locate.is_none() && (self.now_seat() - seat).abs() <= SEAT_EPSILON {
            return;
        }
        self.active_locate = None;
        self.set_now_seat(seat);
        self.refresh();
        self.phase = EnginePhase::Idle;
        self.fire_locate_observers();
    }

    /// Seat that puts `index` at the window's visible midpoint. In circular
    /// mode the shorter ring direction from the current center wins.
    fn resolve_index_seat(&self, index: usize) -> Option<f32> {
        let len = self.data.len();
        if index >= len || self.pool.is_empty() {
            return None;
        }
        let step = self.cfg.step();
        if self.cfg.circular && len > self.pool.len() {
            let core = self.visible_center_index().unwrap_or(self.head_index);
            let forward = (index + len - core) % len;
            if forward == 0 {
                return Some(self.now_seat());
            }
            let backward = len - forward;
            let steps = if forward <= backward {
                forward as f32
            } else {
                -(backward as f32)
            };
            Some(self.now_seat() + steps * step)
        } else {
            let n = self.bound_target() as isize;
            let lead = index as isize - (n - 1) / 2 + 1;
            Some(self.clamp_seat(self.top_seat() + lead as f32 * step))
        }
    }

    fn fire_locate_observers(&mut self) {
        let observers: Vec<Rc<dyn Fn()>> = self
            .locate_observers
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer();
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Appends `item` to the dataset.
    pub fn add_item(&mut self, item: T) {
        let end = self.data.len();
        self.insert_item(item, end);
    }

    /// Inserts `item` at `index` (clamped to the end). When the touched
    /// index intersects or precedes the bound window the window rebinds
    /// immediately, so visible content never shows stale data.
    pub fn insert_item(&mut self, item: T, index: usize) {
        let index = index.min(self.data.len());
        let prev_bound = self.pool.bound_count();
        self.data.insert(index, item);
        self.set_refresh_locked(self.cfg.init_items >= self.data.len());
        self.apply_content_extent();
        let touches_window = self.cfg.circular
            || index < self.head_index + prev_bound
            || self.bound_target() != prev_bound;
        if touches_window {
            self.rebind_window();
        }
    }

    /// Removes the item at `index`. Slots bound to removed or index-shifted
    /// entries rebind before the next frame renders.
    pub fn delete_item(&mut self, index: usize) {
        if index >= self.data.len() {
            log::debug!("delete index {index} out of range; ignoring");
            return;
        }
        self.data.remove(index);
        self.set_refresh_locked(self.cfg.init_items >= self.data.len());
        self.apply_content_extent();
        if self.data.is_empty() {
            self.rebind_window();
            self.content_site = self.top_seat();
            return;
        }
        if !self.cfg.circular {
            // The content shrank; pull the seat back into range if needed.
            let seat = self.clamp_seat(self.now_seat());
            if seat != self.now_seat() {
                self.set_now_seat(seat);
            }
        }
        self.rebind_window();
    }

    /// Removes the first item matching `seek` against `probe`. A miss is a
    /// silent no-op.
    pub fn delete_item_match(&mut self, seek: impl Fn(&T, &T) -> bool, probe: &T) {
        match self.data.iter().position(|item| seek(item, probe)) {
            Some(index) => self.delete_item(index),
            None => log::debug!("delete predicate matched nothing; ignoring"),
        }
    }

    /// Replaces the data at `index` and refreshes whichever slot currently
    /// shows it. No-op when the index is unbound.
    pub fn update_item(&mut self, item: T, index: usize) {
        if index >= self.data.len() {
            log::debug!("update index {index} out of range; ignoring");
            return;
        }
        self.data[index] = item;
        for k in 0..self.pool.len() {
            if self.pool.slot(k).bound_index() == Some(index) {
                self.pool.slot_mut(k).bind(&self.data[index], index);
                break;
            }
        }
    }

    /// Releases every binding and clears the dataset. The pool keeps its
    /// capacity and its views; anchors reset to their initial values. An
    /// in-flight locate is cancelled with its completion suppressed.
    pub fn reset_items(&mut self) {
        self.active_locate = None;
        self.pool.release_all();
        self.data.clear();
        self.head_index = 0;
        self.first_run = false;
        self.refresh_timer = 0;
        self.phase = EnginePhase::Idle;
        self.apply_content_extent();
        self.content_site = self.top_seat();
        self.set_now_seat(0.0);
        self.set_refresh_locked(true);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Derived geometry
    // ─────────────────────────────────────────────────────────────────────

    /// Normalized scroll offset: grows as the user scrolls into the list.
    pub fn now_seat(&self) -> f32 {
        self.geometry.main(self.host.content_offset())
    }

    fn set_now_seat(&mut self, value: f32) {
        let cached = self.host.content_offset();
        self.host.set_content_offset(self.geometry.with_main(cached, value));
    }

    /// Resting leading seat: the leading margin, or one viewport span of
    /// border in circular mode.
    pub fn top_seat(&self) -> f32 {
        if self.cfg.circular {
            self.view_extent()
        } else {
            self.geometry.leading_margin(self.cfg.margins)
        }
    }

    /// Resting trailing seat.
    pub fn bottom_seat(&self) -> f32 {
        let content = self.content_extent();
        if self.cfg.circular {
            content - 2.0 * self.view_extent()
        } else {
            content - self.view_extent()
        }
    }

    /// Raw end of the scroll range.
    fn foot_seat(&self) -> f32 {
        self.content_extent() - self.view_extent()
    }

    /// True when the raw offset sits at the leading end of the scroll range.
    pub fn at_leading_edge(&self) -> bool {
        self.now_seat() <= EDGE_EPSILON
    }

    /// True when the raw offset sits at the trailing end of the scroll
    /// range. Truncation mirrors the integer comparison hosts apply to
    /// content sizes.
    pub fn at_trailing_edge(&self) -> bool {
        self.now_seat().abs() >= self.foot_seat().trunc()
    }

    fn view_extent(&self) -> f32 {
        self.geometry.main_extent(self.host.viewport_size())
    }

    fn dataset_extent(&self) -> f32 {
        self.data.len() as f32 * self.cfg.step()
    }

    /// Extra content span beyond the items: two viewport spans of wrap room
    /// in circular mode, the directional margins otherwise.
    fn content_border(&self) -> f32 {
        if self.cfg.circular {
            2.0 * self.view_extent()
        } else {
            self.geometry.leading_margin(self.cfg.margins)
                + self.geometry.trailing_margin(self.cfg.margins)
        }
    }

    /// Content extent is always derived from the dataset, never stored.
    fn content_extent(&self) -> f32 {
        let len = self.data.len();
        if len == 0 {
            return self.content_border();
        }
        len as f32 * self.cfg.step() - self.cfg.spacing_extent as f32 + self.content_border()
    }

    fn apply_content_extent(&mut self) {
        let size = self.host.content_size();
        let updated = self.geometry.with_main_extent(size, self.content_extent());
        self.host.set_content_size(updated);
    }

    fn clamp_seat(&self, seat: f32) -> f32 {
        let top = self.top_seat();
        seat.clamp(top, self.bottom_seat().max(top))
    }

    /// How many slots should be bound for the current dataset.
    fn bound_target(&self) -> usize {
        self.cfg.init_items.min(self.data.len())
    }

    fn set_refresh_locked(&mut self, value: bool) {
        self.refresh_locked = value && !self.cfg.circular;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Number of items in the dataset.
    pub fn data_count(&self) -> usize {
        self.data.len()
    }

    /// Number of pooled views.
    pub fn item_count(&self) -> usize {
        self.pool.len()
    }

    /// Data index at the pool window's midpoint, if any data is bound.
    pub fn visible_center_index(&self) -> Option<usize> {
        if self.data.is_empty() || self.pool.bound_count() == 0 {
            return None;
        }
        Some((self.head_index + self.cfg.init_items) / 2 % self.data.len())
    }

    /// Travel sense of the current host velocity along the scroll axis.
    pub fn slide_direction(&self) -> i8 {
        if self.geometry.main(self.host.velocity()) > 0.0 {
            1
        } else {
            -1
        }
    }

    /// Bound (data index, position) pairs in spatial order.
    pub fn bound_items(&self) -> Vec<(usize, f32)> {
        self.pool.bound_items()
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_refresh_locked(&self) -> bool {
        self.refresh_locked
    }

    /// Leading-edge coordinate of the first bound slot.
    pub fn content_site(&self) -> f32 {
        self.content_site
    }

    pub fn stats(&self) -> RingStats {
        RingStats {
            bound_items: self.pool.bound_count(),
            pool_items: self.pool.len(),
            rebind_count: self.rebind_count,
            wrap_count: self.wrap_count,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
