//! Evasive control positioner
//!
//! Keeps one control fully inside the visible viewport, jumping to a fresh
//! uniformly random spot inside the padded safe rectangle on every activation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::viewport::{ElementSize, SafeRect, ViewportBounds};
use crate::consts::EVASIVE_PADDING;

/// Position state for the evasive control
#[derive(Debug, Clone)]
pub struct EvasivePositioner {
    padding: f32,
    /// `None` until the first placement; the control uses normal layout flow until then
    position: Option<Vec2>,
    /// Set by `place`, consumed by the host once layout has settled
    revalidate_pending: bool,
    rng: Pcg32,
}

impl EvasivePositioner {
    pub fn new(seed: u64) -> Self {
        Self::with_padding(seed, EVASIVE_PADDING)
    }

    pub fn with_padding(seed: u64, padding: f32) -> Self {
        Self {
            padding: padding.max(0.0),
            position: None,
            revalidate_pending: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Current top-left position, if the control has been placed
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Forget the placement (screen remounted)
    pub fn reset(&mut self) {
        self.position = None;
        self.revalidate_pending = false;
    }

    /// Move the control to a new random position inside the safe rectangle.
    ///
    /// Falls back to centering when the viewport cannot fit the control plus
    /// padding. Schedules a deferred revalidation (see [`Self::take_revalidation`]).
    pub fn place(&mut self, size: ElementSize, viewport: ViewportBounds) -> Vec2 {
        let pos = match viewport.safe_rect(size, self.padding) {
            Some(rect) => {
                let x = self.rng.random_range(rect.min.x..=rect.max.x);
                let y = self.rng.random_range(rect.min.y..=rect.max.y);
                snap(Vec2::new(x, y), &rect)
            }
            None => {
                log::debug!(
                    "Viewport {}x{} too small for control {}x{}, centering",
                    viewport.width,
                    viewport.height,
                    size.width,
                    size.height
                );
                viewport.centered(size).round()
            }
        };
        self.position = Some(pos);
        self.revalidate_pending = true;
        pos
    }

    /// Clamp the existing position back into the safe rectangle.
    ///
    /// Never picks a new random spot. Returns the new position only when it moved.
    pub fn reclamp(&mut self, size: ElementSize, viewport: ViewportBounds) -> Option<Vec2> {
        let current = self.position?;
        let clamped = match viewport.safe_rect(size, self.padding) {
            Some(rect) if rect.contains(current) => return None,
            Some(rect) => snap(rect.clamp(current), &rect),
            None => viewport.centered(size).round(),
        };
        if clamped == current {
            return None;
        }
        self.position = Some(clamped);
        Some(clamped)
    }

    /// Whether a placement is waiting for its post-layout revalidation
    pub fn take_revalidation(&mut self) -> bool {
        std::mem::take(&mut self.revalidate_pending)
    }
}

/// Round to whole pixels without leaving the rectangle (sub-pixel rects keep `p` as is)
fn snap(p: Vec2, rect: &SafeRect) -> Vec2 {
    let axis = |v: f32, lo: f32, hi: f32| {
        let (lo, hi) = (lo.ceil(), hi.floor());
        if lo <= hi { v.round().clamp(lo, hi) } else { v }
    };
    Vec2::new(
        axis(p.x, rect.min.x, rect.max.x),
        axis(p.y, rect.min.y, rect.max.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn in_bounds(p: Vec2, size: ElementSize, vp: ViewportBounds, padding: f32) -> bool {
        p.x >= padding
            && p.x <= vp.width - size.width - padding
            && p.y >= padding
            && p.y <= vp.height - size.height - padding
    }

    #[test]
    fn test_place_scenario_1000_calls() {
        let mut positioner = EvasivePositioner::with_padding(42, 20.0);
        let size = ElementSize::new(100.0, 40.0);
        let vp = ViewportBounds::new(1024.0, 768.0);
        for _ in 0..1000 {
            let p = positioner.place(size, vp);
            assert!(p.x >= 20.0 && p.x <= 904.0, "x out of range: {}", p.x);
            assert!(p.y >= 20.0 && p.y <= 708.0, "y out of range: {}", p.y);
            assert_eq!(p, p.round());
        }
    }

    #[test]
    fn test_not_placed_until_first_place() {
        let mut positioner = EvasivePositioner::new(1);
        let vp = ViewportBounds::new(800.0, 600.0);
        let size = ElementSize::new(80.0, 40.0);
        assert!(!positioner.is_placed());
        assert_eq!(positioner.reclamp(size, vp), None);
        positioner.place(size, vp);
        assert!(positioner.is_placed());
        positioner.reset();
        assert!(!positioner.is_placed());
    }

    #[test]
    fn test_degenerate_viewport_centers() {
        let mut positioner = EvasivePositioner::with_padding(7, 20.0);
        let size = ElementSize::new(100.0, 40.0);
        let vp = ViewportBounds::new(130.0, 500.0);
        assert_eq!(positioner.place(size, vp), Vec2::new(15.0, 230.0));

        let tiny = ViewportBounds::new(60.0, 30.0);
        assert_eq!(positioner.place(size, tiny), Vec2::ZERO);
    }

    #[test]
    fn test_reclamp_after_shrink() {
        let mut positioner = EvasivePositioner::with_padding(3, 20.0);
        let size = ElementSize::new(100.0, 40.0);
        positioner.place(size, ViewportBounds::new(1920.0, 1080.0));
        positioner.position = Some(Vec2::new(1700.0, 900.0));

        let small = ViewportBounds::new(800.0, 600.0);
        assert_eq!(positioner.reclamp(size, small), Some(Vec2::new(680.0, 540.0)));
        // Second reclamp is a no-op
        assert_eq!(positioner.reclamp(size, small), None);
    }

    #[test]
    fn test_place_schedules_single_revalidation() {
        let mut positioner = EvasivePositioner::new(9);
        assert!(!positioner.take_revalidation());
        positioner.place(ElementSize::new(10.0, 10.0), ViewportBounds::new(300.0, 300.0));
        assert!(positioner.take_revalidation());
        assert!(!positioner.take_revalidation());
    }

    #[test]
    fn test_fractional_size_stays_inside_after_rounding() {
        let mut positioner = EvasivePositioner::with_padding(11, 16.0);
        let size = ElementSize::new(97.4, 41.6);
        let vp = ViewportBounds::new(375.5, 667.25);
        for _ in 0..500 {
            let p = positioner.place(size, vp);
            assert!(in_bounds(p, size, vp, 16.0), "{p:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_place_within_safe_rect(
            seed in any::<u64>(),
            w in 1.0f32..400.0,
            h in 1.0f32..200.0,
            extra_w in 1.0f32..2000.0,
            extra_h in 1.0f32..2000.0,
        ) {
            let padding = 20.0;
            let size = ElementSize::new(w, h);
            let vp = ViewportBounds::new(w + 2.0 * padding + extra_w, h + 2.0 * padding + extra_h);
            let mut positioner = EvasivePositioner::with_padding(seed, padding);
            let p = positioner.place(size, vp);
            prop_assert!(in_bounds(p, size, vp, padding));
        }

        #[test]
        fn prop_small_viewport_centers_non_negative(
            seed in any::<u64>(),
            vw in 0.0f32..100.0,
            vh in 0.0f32..100.0,
        ) {
            let size = ElementSize::new(100.0, 100.0);
            let vp = ViewportBounds::new(vw, vh);
            let mut positioner = EvasivePositioner::with_padding(seed, 20.0);
            let p = positioner.place(size, vp);
            prop_assert!(p.x >= 0.0 && p.y >= 0.0);
            prop_assert_eq!(p, vp.centered(size).round());
        }

        #[test]
        fn prop_reclamp_bounds_and_idempotent(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            vw in 200.0f32..3000.0,
            vh in 200.0f32..3000.0,
        ) {
            let size = ElementSize::new(100.0, 40.0);
            let vp = ViewportBounds::new(vw, vh);
            let mut positioner = EvasivePositioner::with_padding(0, 20.0);
            positioner.position = Some(Vec2::new(x, y));
            positioner.reclamp(size, vp);
            let once = positioner.position().unwrap();
            prop_assert!(in_bounds(once, size, vp, 20.0));
            prop_assert_eq!(positioner.reclamp(size, vp), None);
            prop_assert_eq!(positioner.position().unwrap(), once);
        }

        #[test]
        fn prop_reclamp_into_too_small_viewport_centers(
            seed in any::<u64>(),
            vw in 0.0f32..140.0,
            vh in 0.0f32..80.0,
        ) {
            let size = ElementSize::new(100.0, 40.0);
            let mut positioner = EvasivePositioner::with_padding(seed, 20.0);
            positioner.place(size, ViewportBounds::new(1280.0, 800.0));

            let small = ViewportBounds::new(vw, vh);
            positioner.reclamp(size, small);
            let once = positioner.position().unwrap();
            prop_assert!(once.x >= 0.0 && once.y >= 0.0);
            prop_assert_eq!(once, small.centered(size).round());
            prop_assert_eq!(positioner.reclamp(size, small), None);
            prop_assert_eq!(positioner.position().unwrap(), once);
        }
    }
}
