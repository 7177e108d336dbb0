//! Valentine Card - an interactive greeting card for the browser
//!
//! Core modules:
//! - `sim`: Deterministic effect simulation (evasive button, fireworks, hearts, screen flow)
//! - `renderer`: Drawing-surface abstraction and the Canvas 2D backend
//! - `platform`: Browser glue (DOM, timers, listeners, viewport metrics)
//! - `ui`: Screen components that mount/unmount DOM and timers
//! - `content`: Static copy for every screen

pub mod content;
pub mod renderer;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use settings::{QualityPreset, Settings};

/// Card configuration constants
pub mod consts {
    /// Inset of the safe rectangle from every viewport edge (px)
    pub const EVASIVE_PADDING: f32 = 20.0;

    /// Rocket gravity (px/frame²), decelerates the upward launch
    pub const ROCKET_GRAVITY: f32 = 0.15;
    /// Launch velocity band (px/frame, negative is up)
    pub const ROCKET_MIN_LAUNCH: f32 = 10.0;
    pub const ROCKET_MAX_LAUNCH: f32 = 15.0;
    /// Rocket head radius
    pub const ROCKET_RADIUS: f32 = 3.0;

    /// Particle gravity (px/frame²)
    pub const PARTICLE_GRAVITY: f32 = 0.08;
    /// Horizontal air drag applied every frame
    pub const PARTICLE_DRAG: f32 = 0.99;
    /// Life lost per frame (life starts at 1.0)
    pub const PARTICLE_DECAY: f32 = 0.012;
    /// Burst speed band (px/frame)
    pub const PARTICLE_MIN_SPEED: f32 = 3.0;
    pub const PARTICLE_MAX_SPEED: f32 = 7.0;
    /// Core dot radius band (halo is twice this)
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_MAX_SIZE: f32 = 4.0;

    /// Burst ring grows this much per frame...
    pub const BURST_RING_STEP: f32 = 2.0;
    /// ...until it reaches this radius
    pub const BURST_RING_MAX: f32 = 30.0;
    pub const BURST_RING_WIDTH: f32 = 3.0;

    /// Opacity of the black overlay composited every frame (trail effect)
    pub const FADE_ALPHA: f32 = 0.15;

    /// Fireworks spawn interval (ms)
    pub const FIREWORK_INTERVAL_MS: u32 = 500;

    /// Ambient pop hearts
    pub const MAX_VISIBLE_HEARTS: usize = 8;
    pub const HEART_LIFETIME_MS: f64 = 2500.0;
    pub const HEART_MIN_SPAWN_DELAY_MS: f64 = 800.0;
    pub const HEART_MAX_SPAWN_DELAY_MS: f64 = 1500.0;

    /// Celebration screen floating hearts
    pub const FLOATING_HEART_COUNT: usize = 20;

    /// Transition screen timings (ms after mount)
    pub const FIREWORKS_DELAY_MS: u32 = 500;
    pub const TRANSITION_DURATION_MS: u32 = 3500;

    /// Decline message auto-cycle period (ms)
    pub const MESSAGE_CYCLE_MS: u32 = 3000;
}

/// Uniform sample in `[min, max)`, tolerating an empty range
#[inline]
pub fn random_in(rng: &mut impl rand::Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
