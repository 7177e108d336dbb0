//! Cancellable timers and frame scheduling
//!
//! Each handle owns its JS closure and clears the underlying timer or frame
//! request when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;

/// `setInterval` registration
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = dom::window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// `setTimeout` registration; the callback runs at most once
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: u32, callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(f) = callback.take() {
                f();
            }
        });
        let id = dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// A single `requestAnimationFrame` callback
pub struct AnimationFrame {
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    pub fn once(callback: impl FnOnce(f64) + 'static) -> Result<Self, JsValue> {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            if let Some(f) = callback.take() {
                f(time);
            }
        });
        let id = dom::window()?.request_animation_frame(closure.as_ref().unchecked_ref())?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// A callback re-run on every display refresh until dropped
pub struct AnimationLoop {
    pending: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = dom::window()?;
        let pending = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        // Weak self-reference so dropping the loop frees the closure
        let this = Rc::downgrade(&closure);
        let next = pending.clone();
        let win = window.clone();
        *closure.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            next.set(None);
            frame(time);
            let Some(slot) = this.upgrade() else {
                return;
            };
            if let Some(cb) = slot.borrow().as_ref() {
                match win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next.set(Some(id)),
                    Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
                };
            }
        }));

        if let Some(cb) = closure.borrow().as_ref() {
            pending.set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
        }
        Ok(Self { pending, closure })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.closure.borrow_mut().take();
    }
}
