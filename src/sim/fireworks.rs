//! Fireworks particle simulation
//!
//! Rockets rise from the bottom edge toward a random target height, burst into
//! a ring of particles, and are dropped once their particles have faded and the
//! burst ring has finished. Units are pixels and animation frames.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::consts::*;
use crate::random_in;
use crate::settings::QualityPreset;

/// Number of palette entries a burst can pick from
pub const PALETTE_SIZE: u32 = 5;

/// Lifecycle of a single firework
///
/// A rocket bursts when it climbs to its target height, or at its apex
/// (vertical velocity no longer negative) if gravity stops it short of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworkPhase {
    /// Rising, no particles yet
    Ascending,
    /// Burst has happened; never goes back to `Ascending`
    Exploded,
}

/// One fragment of a burst
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Palette index for color lookup
    pub color: u32,
    /// 1.0 at birth, removed once <= 0
    pub life: f32,
    pub size: f32,
}

impl Particle {
    /// Advance one frame; returns false once the particle has expired
    fn step(&mut self) -> bool {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.vel.x *= PARTICLE_DRAG;
        self.life -= PARTICLE_DECAY;
        self.life > 0.0
    }
}

/// A rocket plus, after it bursts, its particles
#[derive(Debug, Clone)]
pub struct Firework {
    pub id: u32,
    pub pos: Vec2,
    pub vertical_vel: f32,
    pub target_y: f32,
    pub phase: FireworkPhase,
    pub particles: Vec<Particle>,
    /// Current burst ring radius (0 until the first exploded frame)
    pub burst_ring: f32,
}

impl Firework {
    pub fn new(id: u32, pos: Vec2, target_y: f32, vertical_vel: f32) -> Self {
        Self {
            id,
            pos,
            vertical_vel,
            target_y,
            phase: FireworkPhase::Ascending,
            particles: Vec::new(),
            burst_ring: 0.0,
        }
    }

    pub fn is_exploded(&self) -> bool {
        self.phase == FireworkPhase::Exploded
    }

    /// Exploded, all particles gone, ring animation complete
    pub fn is_finished(&self) -> bool {
        self.is_exploded() && self.particles.is_empty() && self.burst_ring >= BURST_RING_MAX
    }

    /// Opacity of the burst ring, 0 when it should not be drawn
    pub fn ring_opacity(&self) -> f32 {
        if !self.is_exploded() || self.burst_ring <= 0.0 {
            return 0.0;
        }
        (1.0 - self.burst_ring / BURST_RING_MAX).max(0.0)
    }

    /// Advance one frame. Returns true on the frame the firework bursts.
    fn step(&mut self, rng: &mut Pcg32, burst_band: (usize, usize)) -> bool {
        match self.phase {
            FireworkPhase::Ascending => {
                self.pos.y += self.vertical_vel;
                self.vertical_vel += ROCKET_GRAVITY;
                // Burst at the target, or at the apex if the launch was too weak to reach it
                if self.pos.y <= self.target_y || self.vertical_vel >= 0.0 {
                    self.explode(rng, burst_band);
                    return true;
                }
                false
            }
            FireworkPhase::Exploded => {
                if self.burst_ring < BURST_RING_MAX {
                    self.burst_ring = (self.burst_ring + BURST_RING_STEP).min(BURST_RING_MAX);
                }
                self.particles.retain_mut(Particle::step);
                false
            }
        }
    }

    fn explode(&mut self, rng: &mut Pcg32, (min, max): (usize, usize)) {
        let count = if max > min { rng.random_range(min..max) } else { min.max(1) };
        let color = rng.random_range(0..PALETTE_SIZE);

        self.particles.reserve_exact(count);
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let speed = random_in(rng, PARTICLE_MIN_SPEED, PARTICLE_MAX_SPEED);
            self.particles.push(Particle {
                pos: self.pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                color,
                life: 1.0,
                size: random_in(rng, PARTICLE_MIN_SIZE, PARTICLE_MAX_SIZE),
            });
        }
        self.phase = FireworkPhase::Exploded;
    }
}

/// Owns every active firework for one mounted canvas
#[derive(Debug, Clone)]
pub struct FireworksEngine {
    width: f32,
    height: f32,
    fireworks: Vec<Firework>,
    rng: Pcg32,
    burst_band: (usize, usize),
    max_active: usize,
    frame: u64,
    next_id: u32,
}

impl FireworksEngine {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_quality(seed, width, height, QualityPreset::default())
    }

    pub fn with_quality(seed: u64, width: f32, height: f32, quality: QualityPreset) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            fireworks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            burst_band: quality.burst_particles(),
            max_active: quality.max_fireworks(),
            frame: 0,
            next_id: 1,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Match the drawing surface; active fireworks are kept as they are
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn particle_count(&self) -> usize {
        self.fireworks.iter().map(|f| f.particles.len()).sum()
    }

    /// Launch a rocket from the bottom edge at a random x and target height.
    /// Skipped (returns `None`) when the active cap is reached.
    pub fn spawn(&mut self) -> Option<u32> {
        if self.fireworks.len() >= self.max_active {
            log::debug!("Firework cap ({}) reached, skipping spawn", self.max_active);
            return None;
        }
        let x = self.width * 0.1 + random_in(&mut self.rng, 0.0, self.width * 0.8);
        let target_y = self.height * 0.15 + random_in(&mut self.rng, 0.0, self.height * 0.5);
        let launch = random_in(&mut self.rng, ROCKET_MIN_LAUNCH, ROCKET_MAX_LAUNCH);
        Some(self.launch(Vec2::new(x, self.height), target_y, -launch))
    }

    /// Launch a rocket with explicit parameters
    pub fn launch(&mut self, pos: Vec2, target_y: f32, vertical_vel: f32) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.fireworks.push(Firework::new(id, pos, target_y, vertical_vel));
        id
    }

    /// Advance every firework by one frame and drop the finished ones.
    /// Returns the number of bursts that happened this frame.
    pub fn step(&mut self) -> usize {
        self.frame += 1;
        let mut bursts = 0;
        for firework in self.fireworks.iter_mut() {
            if firework.step(&mut self.rng, self.burst_band) {
                bursts += 1;
            }
        }
        self.fireworks.retain(|f| !f.is_finished());
        bursts
    }
}
