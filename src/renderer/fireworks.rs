//! Draws a fireworks frame onto any [`Surface`]

use super::color::{BACKDROP, FLASH_COLOR, ROCKET_COLOR, palette};
use super::surface::Surface;
use crate::consts::{BURST_RING_WIDTH, FADE_ALPHA, ROCKET_RADIUS};
use crate::sim::{FireworkPhase, FireworksEngine};

/// Fade the previous frame, then draw rockets, burst rings and particles.
///
/// With `glow` each particle gets a second, larger and fainter halo.
pub fn draw_frame(engine: &FireworksEngine, surface: &mut impl Surface, glow: bool) {
    surface.fill_rect(BACKDROP.with_alpha(FADE_ALPHA));

    for firework in engine.fireworks() {
        match firework.phase {
            FireworkPhase::Ascending => {
                surface.fill_circle(firework.pos, ROCKET_RADIUS, ROCKET_COLOR);
            }
            FireworkPhase::Exploded => {
                let ring = firework.ring_opacity();
                if ring > 0.0 {
                    surface.stroke_circle(
                        firework.pos,
                        firework.burst_ring,
                        BURST_RING_WIDTH,
                        ROCKET_COLOR.with_alpha(ring),
                    );
                    surface.fill_circle(
                        firework.pos,
                        firework.burst_ring * 0.5,
                        FLASH_COLOR.with_alpha(ring * 0.5),
                    );
                }

                for particle in &firework.particles {
                    let color = palette(particle.color);
                    surface.fill_circle(particle.pos, particle.size, color.with_alpha(particle.life));
                    if glow {
                        surface.fill_circle(
                            particle.pos,
                            particle.size * 2.0,
                            color.with_alpha(particle.life * 0.3),
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Rgba;
    use glam::Vec2;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(Rgba),
        Fill(Vec2, f32, Rgba),
        Stroke(Vec2, f32, f32, Rgba),
    }

    #[derive(Default)]
    struct RecordingSurface {
        size: (f32, f32),
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            self.size
        }
        fn resize(&mut self, width: f32, height: f32) {
            self.size = (width, height);
        }
        fn fill_rect(&mut self, color: Rgba) {
            self.ops.push(Op::Clear(color));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
            self.ops.push(Op::Fill(center, radius, color));
        }
        fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
            self.ops.push(Op::Stroke(center, radius, line_width, color));
        }
    }

    #[test]
    fn test_frame_starts_with_translucent_fade() {
        let engine = FireworksEngine::new(1, 100.0, 100.0);
        let mut surface = RecordingSurface::default();
        draw_frame(&engine, &mut surface, true);
        assert_eq!(surface.ops, vec![Op::Clear(BACKDROP.with_alpha(0.15))]);
    }

    #[test]
    fn test_ascending_rocket_is_a_dot() {
        let mut engine = FireworksEngine::new(1, 800.0, 600.0);
        engine.launch(Vec2::new(400.0, 600.0), 100.0, -10.0);
        engine.step();
        let mut surface = RecordingSurface::default();
        draw_frame(&engine, &mut surface, true);
        assert_eq!(surface.ops.len(), 2);
        assert_eq!(surface.ops[1], Op::Fill(Vec2::new(400.0, 590.0), 3.0, ROCKET_COLOR));
    }

    #[test]
    fn test_burst_draws_ring_and_glowing_particles() {
        let mut engine = FireworksEngine::new(1, 800.0, 600.0);
        engine.launch(Vec2::new(400.0, 300.0), 400.0, -1.0);
        engine.step();
        engine.step();
        let firework = &engine.fireworks()[0];
        let n = firework.particles.len();

        let mut surface = RecordingSurface::default();
        draw_frame(&engine, &mut surface, true);
        // fade + ring stroke + flash + 2 per particle
        assert_eq!(surface.ops.len(), 3 + 2 * n);
        assert!(matches!(surface.ops[1], Op::Stroke(_, r, w, _) if r == 2.0 && w == 3.0));

        let mut plain = RecordingSurface::default();
        draw_frame(&engine, &mut plain, false);
        assert_eq!(plain.ops.len(), 3 + n);
    }

    #[test]
    fn test_particle_opacity_tracks_life() {
        let mut engine = FireworksEngine::new(4, 800.0, 600.0);
        engine.launch(Vec2::new(400.0, 300.0), 400.0, -1.0);
        for _ in 0..40 {
            engine.step();
        }
        let life = engine.fireworks()[0].particles[0].life;
        let mut surface = RecordingSurface::default();
        draw_frame(&engine, &mut surface, true);
        // Ring is done by now: fade, then core + halo of the first particle
        match (&surface.ops[1], &surface.ops[2]) {
            (Op::Fill(_, _, core), Op::Fill(_, _, halo)) => {
                assert!((core.a - life).abs() < 1e-6);
                assert!((halo.a - life * 0.3).abs() < 1e-6);
            }
            other => panic!("unexpected ops: {other:?}"),
        }
    }
}
