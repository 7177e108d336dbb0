//! Ambient pop hearts

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::content::HEART_GLYPH;
use crate::platform::{Interval, dom};
use crate::sim::HeartSpawner;

/// How often the spawner clock is advanced
const TICK_MS: u32 = 100;

pub struct PopHearts {
    container: HtmlElement,
    _ticker: Interval,
}

impl PopHearts {
    pub fn mount(parent: &Element) -> Result<Self, JsValue> {
        let container: HtmlElement = dom::create("div", "pop-hearts-container")?;
        parent.append_child(&container)?;

        let mut spawner = HeartSpawner::new(dom::seed(), dom::now_ms());
        let mut nodes: HashMap<u32, HtmlElement> = HashMap::new();
        let parent_el = container.clone();

        let ticker = Interval::new(TICK_MS, move || {
            let events = spawner.advance(dom::now_ms());
            for id in &events.expired {
                if let Some(node) = nodes.remove(id) {
                    node.remove();
                }
            }
            for heart in spawner.hearts().iter().filter(|h| events.spawned.contains(&h.id)) {
                let node = match dom::append_text(&parent_el, "div", "pop-heart", HEART_GLYPH) {
                    Ok(node) => node,
                    Err(e) => {
                        log::warn!("Failed to add pop heart: {:?}", e);
                        continue;
                    }
                };
                let left = format!("{}%", heart.x_pct);
                let top = format!("{}%", heart.y_pct);
                let _ = dom::set_styles(&node, &[("left", left.as_str()), ("top", top.as_str())]);
                nodes.insert(heart.id, node);
            }
        })?;

        Ok(Self {
            container,
            _ticker: ticker,
        })
    }
}

impl Drop for PopHearts {
    fn drop(&mut self) {
        self.container.remove();
    }
}
