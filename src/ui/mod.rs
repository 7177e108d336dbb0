//! Screen components
//!
//! Each component builds its DOM on `mount` and owns every timer, frame
//! request and listener it starts; dropping it unmounts everything.

pub mod app;
pub mod celebration;
pub mod evasive;
pub mod fireworks_canvas;
pub mod opening;
pub mod pop_hearts;
pub mod transition;

pub use app::App;
pub use celebration::CelebrationScreen;
pub use evasive::EvasiveButton;
pub use fireworks_canvas::FireworksCanvas;
pub use opening::OpeningScreen;
pub use pop_hearts::PopHearts;
pub use transition::TransitionScreen;
