//! Particle layer components.
//!
//! One component per collection owned by the page state. Each record
//! renders as a keyed fixed-position node whose sampled parameters
//! (position, size, duration, angle) flow into CSS custom properties;
//! the keyframes in the theme do the actual motion.

mod burst;
mod fading;
mod hearts;
mod rain;

pub use burst::BurstLayer;
pub use fading::{FadingHeartLayer, FadingImageLayer};
pub use hearts::HeartLayer;
pub use rain::RainLayer;
