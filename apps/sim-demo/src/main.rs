//! Adapter-driven demo: a simulated scroll host scrolls through a circular
//! list, then runs an animated locate back to a named entry.
//!
//! No rendering; each "frame" prints the window the engine would have a
//! real host draw.

use std::cell::RefCell;
use std::rc::Rc;

use ringscroll_animation::{AnimationSpec, Easing};
use ringscroll_core::{PooledItem, RingConfig, ScrollHost, ViewFactory};
use ringscroll_foundation::{LocateTarget, RingScroller};

/// In-memory stand-in for a real scroll container.
#[derive(Debug, Default)]
struct SimHost {
    offset: (f32, f32),
    content: (f32, f32),
    viewport: (f32, f32),
    velocity: (f32, f32),
    enabled: bool,
}

impl ScrollHost for SimHost {
    fn content_offset(&self) -> (f32, f32) {
        self.offset
    }

    fn set_content_offset(&mut self, offset: (f32, f32)) {
        self.offset = offset;
    }

    fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    fn viewport_size(&self) -> (f32, f32) {
        self.viewport
    }

    fn content_size(&self) -> (f32, f32) {
        self.content
    }

    fn set_content_size(&mut self, size: (f32, f32)) {
        self.content = size;
    }

    fn set_scroll_enabled(&mut self, enabled: bool) -> bool {
        self.enabled = enabled;
        true
    }
}

/// A pooled "view" that remembers what it shows and where it sits.
#[derive(Default)]
struct LineItem {
    shown: Option<(usize, String)>,
    position: f32,
}

impl PooledItem<String> for LineItem {
    fn bind(&mut self, data: &String, index: usize) {
        log::debug!("bind #{index} -> {data}");
        self.shown = Some((index, data.clone()));
    }

    fn place(&mut self, main_offset: f32) {
        self.position = main_offset;
    }

    fn on_destroy(&mut self) {
        if let Some((index, label)) = self.shown.take() {
            log::debug!("teardown #{index} ({label}) at {:+.0}", self.position);
        }
    }
}

fn print_window(label: &str, engine: &RingScroller<String, SimHost>) {
    let seat = engine.now_seat();
    let window: Vec<String> = engine
        .bound_items()
        .into_iter()
        .map(|(index, position)| format!("#{index}@{:+.0}", position - seat))
        .collect();
    println!(
        "{label:<12} seat={seat:>5.0} center={:?} [{}]",
        engine.visible_center_index(),
        window.join(" ")
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let host = SimHost {
        viewport: (320.0, 96.0),
        enabled: true,
        ..Default::default()
    };

    let factory: ViewFactory<String> = Box::new(|| Box::new(LineItem::default()));

    let cfg = RingConfig {
        init_items: 5,
        circular: true,
        item_extent: 32,
        spacing_extent: 4,
        ..Default::default()
    };

    let mut engine =
        RingScroller::new(cfg, host, factory).expect("simulated host satisfies the config");

    let data: Vec<String> = (0..12).map(|i| format!("entry-{i:02}")).collect();
    engine.start(Some(data));
    engine.on_scroll_changed(); // layout settle
    log::info!(
        "engine started: {} data items over a pool of {}",
        engine.data_count(),
        engine.item_count()
    );
    print_window("start", &engine);

    // Simulate a steady drag through the ring at 60 fps.
    let mut now_ms = 0u64;
    for frame in 1..=90u64 {
        now_ms += 16;
        let seat = engine.now_seat() + 6.0;
        let offset = engine.host().content_offset();
        engine.host_mut().set_content_offset((offset.0, seat));
        engine.on_scroll_changed();
        engine.update(now_ms);
        if frame % 30 == 0 {
            print_window(&format!("drag f{frame}"), &engine);
        }
    }
    let stats = engine.stats();
    println!(
        "dragged through {} rebinds, {} wrap corrections",
        stats.rebind_count, stats.wrap_count
    );

    // Animated locate back to a named entry, shorter ring direction.
    engine.set_locate_spec(AnimationSpec::tween(400, Easing::FastOutSlowIn));
    let arrived = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&arrived);
    engine.add_locate_observer(move || *flag.borrow_mut() = true);
    engine.to_location_match(|item, probe| item == probe, &"entry-02".to_string(), true);

    while !*arrived.borrow() {
        now_ms += 16;
        engine.update(now_ms);
    }
    print_window("located", &engine);

    engine.to_location(LocateTarget::Index(7), false);
    print_window("jumped", &engine);

    engine.destroy();
    println!("done");
}
