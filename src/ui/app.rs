//! Top-level screen switching

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{CelebrationScreen, OpeningScreen, TransitionScreen};
use crate::platform::ViewportSource;
use crate::settings::Settings;
use crate::sim::{Screen, TransitionTimeline};

/// Whichever screen is currently in the DOM
enum Mounted {
    Opening(OpeningScreen),
    Transition(TransitionScreen),
    Celebration(CelebrationScreen),
}

/// The card: one mounted screen at a time
pub struct App {
    root: HtmlElement,
    settings: Settings,
    viewport: ViewportSource,
    screen: Screen,
    mounted: Option<Mounted>,
}

impl App {
    pub fn start(root: HtmlElement, settings: Settings) -> Result<Rc<RefCell<App>>, JsValue> {
        let viewport = ViewportSource::detect()?;
        let app = Rc::new(RefCell::new(App {
            root,
            settings,
            viewport,
            screen: Screen::Opening,
            mounted: None,
        }));
        App::show(&app, Screen::Opening)?;
        Ok(app)
    }

    fn show(app: &Rc<RefCell<App>>, screen: Screen) -> Result<(), JsValue> {
        let weak = Rc::downgrade(app);
        let mut this = app.borrow_mut();
        if this.mounted.is_some() && this.screen == screen {
            return Ok(());
        }

        // Unmount first so the old screen's timers and listeners are gone
        this.mounted = None;
        log::info!("Showing {} screen", screen.name());

        let mounted = match screen {
            Screen::Opening => Mounted::Opening(OpeningScreen::mount(
                &this.root,
                this.viewport.clone(),
                navigate(weak, Screen::Opening.accept()),
            )?),
            Screen::Transition => Mounted::Transition(TransitionScreen::mount(
                &this.root,
                &this.settings,
                TransitionTimeline::default(),
                navigate(weak, Screen::Transition.complete_transition()),
            )?),
            Screen::Celebration => {
                Mounted::Celebration(CelebrationScreen::mount(&this.root, &this.settings)?)
            }
        };
        this.screen = screen;
        this.mounted = Some(mounted);
        Ok(())
    }
}

/// Callback that switches to `screen` once the current event handler has returned,
/// so the component that fired it is never dropped mid-callback
fn navigate(app: Weak<RefCell<App>>, screen: Screen) -> Rc<dyn Fn()> {
    Rc::new(move || {
        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(app) = app.upgrade() else {
                return;
            };
            if let Err(e) = App::show(&app, screen) {
                log::error!("Failed to show {} screen: {:?}", screen.name(), e);
            }
        });
    })
}
