//! Full-viewport fireworks canvas

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlCanvasElement};

use crate::platform::{AnimationLoop, EventListener, Interval, dom};
use crate::renderer::{CanvasSurface, Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::FireworksEngine;

struct Scene {
    engine: FireworksEngine,
    surface: CanvasSurface,
    glow: bool,
}

/// Owns the canvas, the spawn interval, the frame loop and the resize listener
pub struct FireworksCanvas {
    canvas: HtmlCanvasElement,
    _spawn: Interval,
    _frames: AnimationLoop,
    _resize: EventListener,
}

impl FireworksCanvas {
    pub fn mount(parent: &Element, settings: &Settings) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = dom::create("canvas", "fireworks-canvas")?;
        let mut surface = CanvasSurface::new(canvas.clone())?;
        parent.append_child(&canvas)?;

        let (width, height) = dom::window_size();
        surface.resize(width, height);
        let scene = Rc::new(RefCell::new(Scene {
            engine: FireworksEngine::with_quality(dom::seed(), width, height, settings.quality),
            surface,
            glow: settings.glow_enabled(),
        }));

        let resize = {
            let scene = scene.clone();
            let window = dom::window()?;
            EventListener::new(&window, "resize", move |_| {
                let (width, height) = dom::window_size();
                let mut scene = scene.borrow_mut();
                scene.surface.resize(width, height);
                scene.engine.resize(width, height);
            })?
        };

        // Spawning runs on wall-clock time, independent of frame rate
        let spawn = {
            let scene = scene.clone();
            Interval::new(settings.firework_interval_ms(), move || {
                scene.borrow_mut().engine.spawn();
            })?
        };

        let frames = AnimationLoop::start(move |_time| {
            let mut scene = scene.borrow_mut();
            let Scene {
                engine,
                surface,
                glow,
            } = &mut *scene;
            engine.step();
            draw_frame(engine, surface, *glow);
        })?;

        log::info!(
            "Fireworks started ({}x{}, quality {})",
            width,
            height,
            settings.quality.as_str()
        );
        Ok(Self {
            canvas,
            _spawn: spawn,
            _frames: frames,
            _resize: resize,
        })
    }
}

impl Drop for FireworksCanvas {
    fn drop(&mut self) {
        log::info!("Fireworks stopped");
        self.canvas.remove();
    }
}
