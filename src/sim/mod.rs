//! Deterministic effect simulation module
//!
//! All effect logic lives here. This module must stay platform-free:
//! - Seeded RNG only
//! - Time is passed in (frames or milliseconds), never read
//! - No rendering or DOM dependencies

pub mod fireworks;
pub mod flow;
pub mod hearts;
pub mod positioner;
pub mod viewport;

pub use fireworks::{Firework, FireworkPhase, FireworksEngine, Particle};
pub use flow::{OpeningState, Screen, TransitionTimeline};
pub use hearts::{FloatingHeart, Heart, HeartEvents, HeartSpawner, floating_hearts};
pub use positioner::EvasivePositioner;
pub use viewport::{ElementSize, SafeRect, ViewportBounds};
