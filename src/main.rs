//! Valentine Card entry point
//!
//! Handles platform-specific initialization. The browser build mounts the card
//! into `<body>`; the native build runs the effects headless as a smoke check.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_card {
    use std::cell::RefCell;
    use std::rc::Rc;

    use valentine_card::Settings;
    use valentine_card::platform::dom;
    use valentine_card::ui::App;
    use wasm_bindgen::prelude::*;

    thread_local! {
        static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Valentine Card starting...");

        let document = dom::document()?;
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let settings = Settings::load();
        let app = App::start(dom::body()?, settings)?;
        APP.with(|slot| *slot.borrow_mut() = Some(app));

        log::info!("Valentine Card running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_card::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Valentine Card (native) starting...");
    log::info!("The card itself needs a browser - run with `trunk serve` for the web version");

    let settings = valentine_card::Settings::load();
    run_fireworks(&settings);
    run_positioner();
    run_hearts();
}

/// Simulate the transition screen's fireworks at 60 fps
#[cfg(not(target_arch = "wasm32"))]
fn run_fireworks(settings: &valentine_card::Settings) {
    use valentine_card::consts::TRANSITION_DURATION_MS;
    use valentine_card::sim::FireworksEngine;

    const FRAME_MS: u32 = 16;
    let mut engine = FireworksEngine::with_quality(2024, 1280.0, 720.0, settings.quality);
    let interval = settings.firework_interval_ms();
    let (mut next_spawn, mut bursts, mut peak) = (interval, 0, 0);

    let mut elapsed = 0;
    while elapsed < TRANSITION_DURATION_MS {
        elapsed += FRAME_MS;
        while next_spawn <= elapsed {
            engine.spawn();
            next_spawn += interval;
        }
        bursts += engine.step();
        peak = peak.max(engine.particle_count());
    }
    log::info!(
        "Fireworks: {} frames, {} bursts, peak {} particles, {} still active",
        engine.frame(),
        bursts,
        peak,
        engine.fireworks().len()
    );
}

/// Click the evasive button a few times in a phone-sized viewport, then rotate it
#[cfg(not(target_arch = "wasm32"))]
fn run_positioner() {
    use valentine_card::sim::{ElementSize, EvasivePositioner, OpeningState, ViewportBounds};

    let size = ElementSize::new(96.0, 48.0);
    let mut positioner = EvasivePositioner::new(7);
    let mut opening = OpeningState::new();
    for _ in 0..5 {
        opening.decline();
        let pos = positioner.place(size, ViewportBounds::new(390.0, 844.0));
        log::info!("Decline -> \"{}\" at ({}, {})", opening.current_message(), pos.x, pos.y);
    }
    if let Some(pos) = positioner.reclamp(size, ViewportBounds::new(844.0, 390.0)) {
        log::info!("Rotated: reclamped to ({}, {})", pos.x, pos.y);
    }
}

/// Run the pop-heart spawner for ten seconds
#[cfg(not(target_arch = "wasm32"))]
fn run_hearts() {
    use valentine_card::sim::HeartSpawner;

    let mut spawner = HeartSpawner::new(11, 0.0);
    let (mut spawned, mut peak) = (0, 0);
    for tick in 1..=100 {
        spawned += spawner.advance(tick as f64 * 100.0).spawned.len();
        peak = peak.max(spawner.hearts().len());
    }
    log::info!("Hearts: {} spawned, peak {} visible (cap {})", spawned, peak, spawner.cap());
}
