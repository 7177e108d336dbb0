//! Opening screen: the question, a yes button and an evasive no button

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use super::EvasiveButton;
use crate::consts::MESSAGE_CYCLE_MS;
use crate::content::OPENING_SCREEN;
use crate::platform::{EventListener, Interval, ViewportSource, dom};
use crate::sim::OpeningState;

/// Question text and the sparkle shown next to it
#[derive(Clone)]
struct MessageView {
    text: HtmlElement,
    sparkle: HtmlElement,
}

impl MessageView {
    fn render(&self, state: &OpeningState) {
        self.text.set_text_content(Some(state.current_message()));
        self.sparkle.set_hidden(!state.show_sparkle());
    }
}

pub struct OpeningScreen {
    root: HtmlElement,
    _yes: EventListener,
    _no: EvasiveButton,
    _cycle: Rc<RefCell<Option<Interval>>>,
}

impl OpeningScreen {
    pub fn mount(
        parent: &Element,
        viewport: ViewportSource,
        on_accept: Rc<dyn Fn()>,
    ) -> Result<Self, JsValue> {
        let root: HtmlElement = dom::create("div", "screen opening")?;

        let title = dom::append_text(&root, "h1", "title", "")?;
        dom::append_text(&title, "span", "", OPENING_SCREEN.name)?;
        dom::append_text(&title, "span", "heart-glow", OPENING_SCREEN.heart_emojis)?;

        let question: HtmlElement = dom::append_text(&root, "p", "question", "")?;
        let view = MessageView {
            text: dom::append_text(&question, "span", "", "")?,
            sparkle: dom::append_text(&question, "span", "sparkle", "💖")?,
        };

        let buttons: HtmlElement = dom::create("div", "buttons")?;
        root.append_child(&buttons)?;

        let yes: HtmlButtonElement = dom::create("button", "romantic-button yes-button")?;
        yes.set_text_content(Some(OPENING_SCREEN.yes_button));
        buttons.append_child(&yes)?;
        let yes_listener = EventListener::new(&yes, "click", move |_| on_accept())?;

        let state = Rc::new(RefCell::new(OpeningState::new()));
        view.render(&state.borrow());

        let cycle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let on_decline = {
            let state = state.clone();
            let view = view.clone();
            let cycle = cycle.clone();
            move || {
                state.borrow_mut().decline();
                view.render(&state.borrow());

                // Restart the auto-cycle so it never fires right after a click
                let (state, view) = (state.clone(), view.clone());
                let interval = Interval::new(MESSAGE_CYCLE_MS, move || {
                    if state.borrow_mut().auto_cycle().is_some() {
                        view.render(&state.borrow());
                    }
                });
                match interval {
                    Ok(interval) => *cycle.borrow_mut() = Some(interval),
                    Err(e) => log::warn!("Message cycling disabled: {:?}", e),
                }
            }
        };
        let no = EvasiveButton::mount(
            &buttons,
            OPENING_SCREEN.no_button,
            "romantic-button no-button",
            dom::seed(),
            viewport,
            on_decline,
        )?;

        dom::append_text(&root, "p", "quote", &format!("\"{}\"", OPENING_SCREEN.quote))?;
        parent.append_child(&root)?;

        Ok(Self {
            root,
            _yes: yes_listener,
            _no: no,
            _cycle: cycle,
        })
    }
}

impl Drop for OpeningScreen {
    fn drop(&mut self) {
        self.root.remove();
    }
}
