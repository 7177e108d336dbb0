//! The decline button that jumps away on every click

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement};

use crate::platform::{AnimationFrame, EventListener, SizeObserver, ViewportSource, dom};
use crate::sim::{ElementSize, EvasivePositioner};

struct Inner {
    button: HtmlButtonElement,
    positioner: EvasivePositioner,
    viewport: ViewportSource,
}

impl Inner {
    fn measure(&self) -> ElementSize {
        let rect = self.button.get_bounding_client_rect();
        ElementSize::new(rect.width() as f32, rect.height() as f32)
    }

    fn apply(&self, pos: Vec2) {
        let left = format!("{}px", pos.x);
        let top = format!("{}px", pos.y);
        let styles = [
            ("position", "fixed"),
            ("left", left.as_str()),
            ("top", top.as_str()),
            ("z-index", "50"),
        ];
        if let Err(e) = dom::set_styles(&self.button, &styles) {
            log::warn!("Failed to move button: {:?}", e);
        }
    }

    fn place(&mut self) {
        let (size, bounds) = (self.measure(), self.viewport.bounds());
        let pos = self.positioner.place(size, bounds);
        self.apply(pos);
    }

    fn reclamp(&mut self) {
        let (size, bounds) = (self.measure(), self.viewport.bounds());
        if let Some(pos) = self.positioner.reclamp(size, bounds) {
            self.apply(pos);
        }
    }
}

/// A button that runs its action, then relocates inside the visible viewport
pub struct EvasiveButton {
    _click: EventListener,
    _viewport: Vec<EventListener>,
    _observer: Option<SizeObserver>,
    _revalidate: Rc<RefCell<Option<AnimationFrame>>>,
}

impl EvasiveButton {
    pub fn mount(
        parent: &Element,
        label: &str,
        class: &str,
        seed: u64,
        viewport: ViewportSource,
        mut on_activate: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let button: HtmlButtonElement = dom::create("button", class)?;
        button.set_text_content(Some(label));
        parent.append_child(&button)?;

        let inner = Rc::new(RefCell::new(Inner {
            button: button.clone(),
            positioner: EvasivePositioner::new(seed),
            viewport: viewport.clone(),
        }));
        let revalidate: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        let click = {
            let inner = inner.clone();
            let revalidate = revalidate.clone();
            EventListener::new(&button, "click", move |_| {
                // Action first, then move
                on_activate();
                inner.borrow_mut().place();

                // Re-check once layout has settled on the new position
                let frame_inner = inner.clone();
                let frame = AnimationFrame::once(move |_| {
                    let mut inner = frame_inner.borrow_mut();
                    if inner.positioner.take_revalidation() {
                        inner.reclamp();
                    }
                });
                match frame {
                    Ok(frame) => *revalidate.borrow_mut() = Some(frame),
                    Err(e) => log::warn!("Could not schedule button revalidation: {:?}", e),
                }
            })?
        };

        let viewport_listeners = {
            let inner = inner.clone();
            viewport.on_change(move || inner.borrow_mut().reclamp())?
        };

        let observer = {
            let inner = inner.clone();
            SizeObserver::observe(&button, move || {
                if let Ok(mut inner) = inner.try_borrow_mut() {
                    inner.reclamp();
                }
            })
        };

        Ok(Self {
            _click: click,
            _viewport: viewport_listeners,
            _observer: observer,
            _revalidate: revalidate,
        })
    }
}
