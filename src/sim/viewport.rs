//! Viewport geometry shared by the positioner and the fireworks surface

use glam::Vec2;

/// The currently visible rectangle available for placing elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub width: f32,
    pub height: f32,
    pub offset_left: f32,
    pub offset_top: f32,
}

impl ViewportBounds {
    /// Viewport anchored at the page origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            offset_left: 0.0,
            offset_top: 0.0,
        }
    }

    pub fn with_offset(mut self, left: f32, top: f32) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self
    }

    /// Rectangle, inset by `padding`, where an element of `size` stays fully visible.
    /// `None` when the viewport is smaller than the element plus padding on both sides.
    pub fn safe_rect(&self, size: ElementSize, padding: f32) -> Option<SafeRect> {
        let max_x = self.width - size.width - padding;
        let max_y = self.height - size.height - padding;
        if max_x < padding || max_y < padding {
            return None;
        }
        Some(SafeRect {
            min: Vec2::new(self.offset_left + padding, self.offset_top + padding),
            max: Vec2::new(self.offset_left + max_x, self.offset_top + max_y),
        })
    }

    /// Position that centers an element of `size`, never negative
    pub fn centered(&self, size: ElementSize) -> Vec2 {
        Vec2::new(
            self.offset_left + ((self.width - size.width) / 2.0).max(0.0),
            self.offset_top + ((self.height - size.height) / 2.0).max(0.0),
        )
    }
}

/// Rendered size of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementSize {
    pub width: f32,
    pub height: f32,
}

impl ElementSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Inclusive placement bounds for an element's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl SafeRect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_rect_scenario() {
        let viewport = ViewportBounds::new(1024.0, 768.0);
        let rect = viewport.safe_rect(ElementSize::new(100.0, 40.0), 20.0).unwrap();
        assert_eq!(rect.min, Vec2::new(20.0, 20.0));
        assert_eq!(rect.max, Vec2::new(904.0, 708.0));
    }

    #[test]
    fn test_safe_rect_degenerate() {
        let viewport = ViewportBounds::new(120.0, 600.0);
        assert!(viewport.safe_rect(ElementSize::new(100.0, 40.0), 20.0).is_none());
        // Exactly fits: min == max
        let viewport = ViewportBounds::new(140.0, 80.0);
        let rect = viewport.safe_rect(ElementSize::new(100.0, 40.0), 20.0).unwrap();
        assert_eq!(rect.min, rect.max);
    }

    #[test]
    fn test_offset_shifts_rect() {
        let viewport = ViewportBounds::new(400.0, 300.0).with_offset(0.0, 50.0);
        let rect = viewport.safe_rect(ElementSize::new(100.0, 40.0), 20.0).unwrap();
        assert_eq!(rect.min.y, 70.0);
        assert_eq!(rect.max.y, 290.0);
    }

    #[test]
    fn test_centered_never_negative() {
        let viewport = ViewportBounds::new(50.0, 20.0);
        let p = viewport.centered(ElementSize::new(100.0, 40.0));
        assert_eq!(p, Vec2::ZERO);
    }
}
