//! Particle records for the proposal page
//!
//! Every animated ornament on the page is one of these records. A record
//! is sampled once at spawn time and never mutated afterwards; all motion
//! is expressed by the parameters it carries (the UI turns them into CSS
//! animation values). Records live in bounded collections owned by
//! [`crate::ProposalState`] and are dropped by window truncation, not by
//! explicit removal.

use rand::Rng;

/// Random render key for a particle.
///
/// Only used to key DOM nodes so the renderer can tell records apart;
/// collisions are harmless beyond a reused animation node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(pub u64);

impl ParticleId {
    /// Sample a fresh id from the given RNG
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self(rng.random())
    }
}

impl std::fmt::Display for ParticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// An image tumbling from the top of the viewport while the visitor
/// reads the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingImage {
    pub id: ParticleId,
    /// Horizontal spawn position in viewport-width percent (0-100)
    pub x: f32,
    /// Index into the content's particle image set
    pub image: usize,
    /// Fall duration in seconds
    pub duration: f32,
    /// Rendered size in pixels
    pub size: u32,
}

/// A heart glyph drifting down the full viewport height.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingHeart {
    pub id: ParticleId,
    /// Horizontal spawn position in viewport-width percent (0-100)
    pub x: f32,
    /// Drift duration in seconds
    pub duration: f32,
    /// Animation start delay in seconds
    pub delay: f32,
}

/// One image of the celebration burst, thrown outward from the center
/// of the viewport the instant "Yes" lands.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstImage {
    pub id: ParticleId,
    /// Emission angle in degrees, evenly spaced around the circle
    pub angle: f32,
    /// Index into the content's particle image set
    pub image: usize,
    /// Rendered size in pixels
    pub size: u32,
}

/// An image blooming in and out at a random viewport position during
/// the post-decision shower.
#[derive(Debug, Clone, PartialEq)]
pub struct FadingImage {
    pub id: ParticleId,
    /// Position in viewport percent (0-100 each axis)
    pub x: f32,
    pub y: f32,
    /// Index into the content's particle image set
    pub image: usize,
    /// Rendered size in pixels
    pub size: u32,
    /// Bloom duration in seconds
    pub duration: f32,
}

/// A heart glyph blooming in and out during the post-decision shower.
#[derive(Debug, Clone, PartialEq)]
pub struct FadingHeart {
    pub id: ParticleId,
    /// Position in viewport percent (0-100 each axis)
    pub x: f32,
    pub y: f32,
    /// Glyph size in pixels
    pub size: u32,
    /// Bloom duration in seconds
    pub duration: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particle_id_display_is_fixed_width_hex() {
        let id = ParticleId(0xab);
        assert_eq!(id.to_string(), "00000000000000ab");
    }

    #[test]
    fn particle_id_sampling_varies() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = ParticleId::sample(&mut rng);
        let b = ParticleId::sample(&mut rng);
        assert_ne!(a, b);
    }
}
