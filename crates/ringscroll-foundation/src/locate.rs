//! Programmatic jump targets and the in-flight locate transition.

use ringscroll_animation::{AnimationSpec, Tween};

/// What a locate call should move to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocateTarget {
    /// An explicit 1-D seat coordinate (clamped to the scroll range unless
    /// circular).
    Seat(f32),
    /// A data index, resolved so the pool's visible-center item lands on it.
    Index(usize),
}

/// Snapshot of a scroll location, restorable later.
///
/// Captures everything needed to put the window back exactly: the seat, the
/// leading anchor, and the data index of the first bound slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationParam {
    pub seat: f32,
    pub content_site: f32,
    pub head_index: usize,
}

/// An animated locate in flight.
///
/// The tween is created lazily on the first `update` tick after the request,
/// so the transition starts from the host's actual frame clock rather than a
/// clock the engine would have to keep itself.
pub(crate) struct ActiveLocate {
    from: f32,
    target: f32,
    spec: AnimationSpec,
    tween: Option<Tween>,
}

impl ActiveLocate {
    pub(crate) fn new(from: f32, target: f32, spec: AnimationSpec) -> Self {
        Self {
            from,
            target,
            spec,
            tween: None,
        }
    }

    /// Samples the transition at `now_ms`. Returns the eased seat and
    /// whether the transition has finished.
    pub(crate) fn sample(&mut self, now_ms: u64) -> (f32, bool) {
        let (from, target, spec) = (self.from, self.target, self.spec);
        let tween = self
            .tween
            .get_or_insert_with(|| Tween::new(from, target, now_ms, spec));
        (tween.sample(now_ms), tween.is_finished(now_ms))
    }
}
