//! Viewport metrics strategy
//!
//! Picks the finest viewport API the browser offers once, at startup: the
//! Visual Viewport API where present (accounts for pinch zoom and on-screen
//! keyboards), whole-window metrics otherwise.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{VisualViewport, Window};

use super::dom;
use super::listener::EventListener;
use crate::sim::ViewportBounds;

#[derive(Clone)]
pub enum ViewportSource {
    Visual { window: Window, viewport: VisualViewport },
    Window(Window),
}

impl ViewportSource {
    pub fn detect() -> Result<Self, JsValue> {
        let window = dom::window()?;
        Ok(match window.visual_viewport() {
            Some(viewport) => {
                log::info!("Viewport metrics: visual viewport");
                ViewportSource::Visual { window, viewport }
            }
            None => {
                log::info!("Viewport metrics: window (no visual viewport API)");
                ViewportSource::Window(window)
            }
        })
    }

    /// Currently visible rectangle
    pub fn bounds(&self) -> ViewportBounds {
        match self {
            ViewportSource::Visual { viewport, .. } => ViewportBounds::new(
                viewport.width() as f32,
                viewport.height() as f32,
            )
            .with_offset(viewport.offset_left() as f32, viewport.offset_top() as f32),
            ViewportSource::Window(_) => {
                let (w, h) = dom::window_size();
                ViewportBounds::new(w, h)
            }
        }
    }

    /// Run `callback` on window resize and orientation change, plus visual
    /// viewport resize/scroll when that API is in use. Listeners detach when
    /// the returned guards drop.
    pub fn on_change(&self, callback: impl FnMut() + 'static) -> Result<Vec<EventListener>, JsValue> {
        let callback = Rc::new(RefCell::new(callback));
        let listen = |target: &web_sys::EventTarget, event: &'static str| {
            let callback = callback.clone();
            EventListener::new(target, event, move |_| {
                // A handler that triggers a nested event of its own is skipped, not re-entered
                if let Ok(mut f) = callback.try_borrow_mut() {
                    f();
                }
            })
        };

        let window = match self {
            ViewportSource::Visual { window, .. } | ViewportSource::Window(window) => window,
        };
        let mut listeners = vec![
            listen(window.as_ref(), "resize")?,
            listen(window.as_ref(), "orientationchange")?,
        ];
        if let ViewportSource::Visual { viewport, .. } = self {
            listeners.push(listen(viewport.as_ref(), "resize")?);
            listeners.push(listen(viewport.as_ref(), "scroll")?);
        }
        Ok(listeners)
    }
}
