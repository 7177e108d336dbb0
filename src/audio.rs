//! Background music for the celebration screen
//!
//! Wraps a looping `<audio>` element. Playback can be refused by the browser
//! (autoplay policy, missing file); that is logged and otherwise ignored.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Music player state
pub struct MusicPlayer {
    element: Option<HtmlAudioElement>,
    playing: bool,
}

impl MusicPlayer {
    pub fn new(src: &str, volume: f64) -> Self {
        // Try to create the element (may fail in locked-down contexts)
        let element = match HtmlAudioElement::new_with_src(src) {
            Ok(el) => {
                el.set_loop(true);
                el.set_volume(volume);
                Some(el)
            }
            Err(e) => {
                log::warn!("Failed to create audio element - music disabled: {:?}", e);
                None
            }
        };
        Self {
            element,
            playing: false,
        }
    }

    /// Flip between playing and paused; returns the new state
    pub fn toggle(&mut self) -> bool {
        let Some(el) = &self.element else {
            return self.playing;
        };
        if self.playing {
            let _ = el.pause();
        } else {
            match el.play() {
                Ok(promise) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::warn!("Audio play failed: {:?}", e);
                        }
                    });
                }
                Err(e) => log::warn!("Audio play failed: {:?}", e),
            }
        }
        self.playing = !self.playing;
        self.playing
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        if let Some(el) = &self.element {
            let _ = el.pause();
        }
    }
}
