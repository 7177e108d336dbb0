//! Drawing-surface contract for full-viewport effects

use glam::Vec2;

use super::color::Rgba;

/// A 2D drawing surface owned exclusively by one effect while mounted
pub trait Surface {
    /// Current size in pixels
    fn size(&self) -> (f32, f32);

    /// Match the surface to the viewport
    fn resize(&mut self, width: f32, height: f32);

    /// Fill the whole surface (a translucent color fades the previous frame)
    fn fill_rect(&mut self, color: Rgba);

    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroked circle outline
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba);
}
