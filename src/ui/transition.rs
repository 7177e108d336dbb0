//! Transition screen: fade to black, fireworks, then hand over to the celebration

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use super::FireworksCanvas;
use crate::platform::{Timeout, dom};
use crate::settings::Settings;
use crate::sim::TransitionTimeline;

pub struct TransitionScreen {
    root: HtmlElement,
    fireworks: Rc<RefCell<Option<FireworksCanvas>>>,
    _show_fireworks: Timeout,
    _complete: Timeout,
}

impl TransitionScreen {
    pub fn mount(
        parent: &Element,
        settings: &Settings,
        timeline: TransitionTimeline,
        on_complete: Rc<dyn Fn()>,
    ) -> Result<Self, JsValue> {
        let root: HtmlElement = dom::create("div", "screen transition")?;
        dom::append_text(&root, "div", "fade-to-black", "")?;
        parent.append_child(&root)?;

        let fireworks: Rc<RefCell<Option<FireworksCanvas>>> = Rc::new(RefCell::new(None));
        let show_fireworks = {
            let fireworks = fireworks.clone();
            let root = root.clone();
            let settings = settings.clone();
            Timeout::new(timeline.fireworks_at_ms, move || {
                match FireworksCanvas::mount(&root, &settings) {
                    Ok(canvas) => *fireworks.borrow_mut() = Some(canvas),
                    // Decorative only: the transition still completes
                    Err(e) => log::warn!("Fireworks unavailable: {:?}", e),
                }
            })?
        };
        let complete = Timeout::new(timeline.complete_at_ms, move || on_complete())?;

        Ok(Self {
            root,
            fireworks,
            _show_fireworks: show_fireworks,
            _complete: complete,
        })
    }
}

impl Drop for TransitionScreen {
    fn drop(&mut self) {
        // Stop the animation before its canvas leaves the DOM
        self.fireworks.borrow_mut().take();
        self.root.remove();
    }
}
