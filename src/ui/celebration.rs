//! Celebration screen: title, floating hearts, pop hearts and a music toggle

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use super::PopHearts;
use crate::audio::MusicPlayer;
use crate::consts::FLOATING_HEART_COUNT;
use crate::content::{CELEBRATION_SCREEN, HEART_GLYPH, MUSIC_SRC};
use crate::platform::{EventListener, dom};
use crate::settings::Settings;
use crate::sim::floating_hearts;

pub struct CelebrationScreen {
    root: HtmlElement,
    _music: EventListener,
    _pop_hearts: Option<PopHearts>,
}

impl CelebrationScreen {
    pub fn mount(parent: &Element, settings: &Settings) -> Result<Self, JsValue> {
        let root: HtmlElement = dom::create("div", "screen celebration")?;

        for heart in floating_hearts(dom::seed(), FLOATING_HEART_COUNT) {
            let el = dom::append_text(&root, "div", "floating-heart", HEART_GLYPH)?;
            let left = format!("{}%", heart.left_pct);
            let delay = format!("{}s", heart.delay_s);
            let duration = format!("{}s", heart.duration_s);
            dom::set_styles(
                &el,
                &[
                    ("left", left.as_str()),
                    ("animation-delay", delay.as_str()),
                    ("animation-duration", duration.as_str()),
                ],
            )?;
        }

        let content = dom::append_text(&root, "div", "content", "")?;
        dom::append_text(&content, "h1", "title bloom glow", CELEBRATION_SCREEN.title)?;
        let subtitle = dom::append_text(&content, "p", "subtitle bloom", CELEBRATION_SCREEN.subtitle)?;
        dom::set_styles(&subtitle, &[("animation-delay", "0.2s")])?;

        let emojis = dom::append_text(&content, "div", "emoji-row bloom", "")?;
        dom::set_styles(&emojis, &[("animation-delay", "0.6s")])?;
        for (i, emoji) in CELEBRATION_SCREEN.heart_emojis.iter().enumerate() {
            let span = dom::append_text(&emojis, "span", "bounce-gentle heart-glow", emoji)?;
            let delay = format!("{}s", i as f32 * 0.2);
            dom::set_styles(&span, &[("animation-delay", delay.as_str())])?;
        }

        let button: HtmlButtonElement = dom::create("button", "romantic-button music-button")?;
        button.set_text_content(Some(CELEBRATION_SCREEN.play_music));
        content.append_child(&button)?;

        let player = Rc::new(RefCell::new(MusicPlayer::new(
            MUSIC_SRC,
            settings.effective_music_volume(),
        )));
        let music = {
            let label = button.clone();
            EventListener::new(&button, "click", move |_| {
                let playing = player.borrow_mut().toggle();
                let text = if playing {
                    CELEBRATION_SCREEN.pause_music
                } else {
                    CELEBRATION_SCREEN.play_music
                };
                label.set_text_content(Some(text));
            })?
        };

        let pop_hearts = if settings.pop_hearts {
            Some(PopHearts::mount(&root)?)
        } else {
            None
        };

        parent.append_child(&root)?;
        Ok(Self {
            root,
            _music: music,
            _pop_hearts: pop_hearts,
        })
    }
}

impl Drop for CelebrationScreen {
    fn drop(&mut self) {
        self.root.remove();
    }
}
