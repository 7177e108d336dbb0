//! Browser platform layer
//!
//! Thin, owned wrappers over the pieces of the web platform the card needs.
//! Every wrapper cancels or detaches itself on drop, so a component that owns
//! them leaves no timers, frame requests or listeners behind when unmounted.

pub mod dom;
pub mod listener;
pub mod timer;
pub mod viewport;

pub use listener::{EventListener, SizeObserver};
pub use timer::{AnimationFrame, AnimationLoop, Interval, Timeout};
pub use viewport::ViewportSource;
