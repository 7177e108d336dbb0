//! Rendering module
//!
//! Effects draw through the [`Surface`] trait; the browser backend is a Canvas 2D context.

pub mod color;
pub mod fireworks;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::Rgba;
pub use fireworks::draw_frame;
pub use surface::Surface;
