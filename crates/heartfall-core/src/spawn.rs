//! Spawn sampling for particle records
//!
//! All timing constants, window caps, and sampling ranges for the page's
//! particle collections live here. Sampling is uniform within fixed
//! ranges and generic over [`rand::Rng`] so tests can drive it with a
//! seeded generator.

use rand::Rng;

use crate::particle::{
    BurstImage, FadingHeart, FadingImage, FallingImage, FloatingHeart, ParticleId,
};

/// Number of numbered particle images the content set provides
pub const IMAGE_COUNT: usize = 8;

/// Tick period of the falling-image spawner (ms)
pub const RAIN_INTERVAL_MS: u64 = 700;
/// Tick period of the floating-heart spawner (ms)
pub const HEART_INTERVAL_MS: u64 = 500;
/// Tick period of the post-decision fading-image spawner (ms)
pub const FADING_IMAGE_INTERVAL_MS: u64 = 800;
/// Tick period of the post-decision fading-heart spawner (ms)
pub const FADING_HEART_INTERVAL_MS: u64 = 600;
/// Delay between the outcome transition and the first post-decision tick (ms)
pub const POST_DECISION_DELAY_MS: u64 = 2000;

/// Most falling images alive at once
pub const RAIN_WINDOW: usize = 16;
/// Most floating hearts alive at once
pub const HEART_WINDOW: usize = 21;
/// Most fading images alive at once
pub const FADING_IMAGE_WINDOW: usize = 21;
/// Most fading hearts alive at once
pub const FADING_HEART_WINDOW: usize = 16;

/// Size of the celebration burst batch
pub const BURST_COUNT: usize = 30;

/// Append `item`, keeping only the most recent `window` entries.
///
/// Truncates to the newest `window - 1` entries before pushing, so the
/// collection holds at most `window` records after every append.
pub fn push_recent<T>(items: &mut Vec<T>, item: T, window: usize) {
    if items.len() >= window {
        let excess = items.len() - (window - 1);
        items.drain(..excess);
    }
    items.push(item);
}

/// Sample a falling image: anywhere across the viewport width, falling
/// for 2-5 s at 60-99 px.
pub fn falling_image(rng: &mut impl Rng) -> FallingImage {
    FallingImage {
        id: ParticleId::sample(rng),
        x: rng.random_range(0.0..100.0),
        image: rng.random_range(0..IMAGE_COUNT),
        duration: rng.random_range(2.0..5.0),
        size: rng.random_range(60..100),
    }
}

/// Sample a floating heart: anywhere across the viewport width, drifting
/// for 4-8 s after a 0-0.5 s delay.
pub fn floating_heart(rng: &mut impl Rng) -> FloatingHeart {
    FloatingHeart {
        id: ParticleId::sample(rng),
        x: rng.random_range(0.0..100.0),
        duration: rng.random_range(4.0..8.0),
        delay: rng.random_range(0.0..0.5),
    }
}

/// Sample the full celebration burst: [`BURST_COUNT`] images at evenly
/// spaced emission angles, each with a random image and size.
pub fn burst_batch(rng: &mut impl Rng) -> Vec<BurstImage> {
    (0..BURST_COUNT)
        .map(|i| BurstImage {
            id: ParticleId::sample(rng),
            angle: (i as f32) * 360.0 / BURST_COUNT as f32,
            image: rng.random_range(0..IMAGE_COUNT),
            size: rng.random_range(40..90),
        })
        .collect()
}

/// Sample a fading image: random viewport position, 40-99 px, blooming
/// for 3-7 s.
pub fn fading_image(rng: &mut impl Rng) -> FadingImage {
    FadingImage {
        id: ParticleId::sample(rng),
        x: rng.random_range(0.0..100.0),
        y: rng.random_range(0.0..100.0),
        image: rng.random_range(0..IMAGE_COUNT),
        size: rng.random_range(40..100),
        duration: rng.random_range(3.0..7.0),
    }
}

/// Sample a fading heart: random viewport position, 20-49 px glyph,
/// blooming for 3-7 s.
pub fn fading_heart(rng: &mut impl Rng) -> FadingHeart {
    FadingHeart {
        id: ParticleId::sample(rng),
        x: rng.random_range(0.0..100.0),
        y: rng.random_range(0.0..100.0),
        size: rng.random_range(20..50),
        duration: rng.random_range(3.0..7.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xCA7)
    }

    #[test]
    fn push_recent_never_exceeds_window() {
        let mut items = Vec::new();
        for i in 0..100 {
            push_recent(&mut items, i, 16);
            assert!(items.len() <= 16);
        }
        // Oldest entries were dropped, newest survive in order
        assert_eq!(*items.last().unwrap(), 99);
        assert_eq!(items[0], 84);
    }

    #[test]
    fn push_recent_below_window_keeps_everything() {
        let mut items = Vec::new();
        for i in 0..5 {
            push_recent(&mut items, i, 16);
        }
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn falling_image_fields_stay_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let drop = falling_image(&mut rng);
            assert!((0.0..100.0).contains(&drop.x));
            assert!(drop.image < IMAGE_COUNT);
            assert!((2.0..5.0).contains(&drop.duration));
            assert!((60..100).contains(&drop.size));
        }
    }

    #[test]
    fn floating_heart_fields_stay_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let heart = floating_heart(&mut rng);
            assert!((0.0..100.0).contains(&heart.x));
            assert!((4.0..8.0).contains(&heart.duration));
            assert!((0.0..0.5).contains(&heart.delay));
        }
    }

    #[test]
    fn burst_batch_angles_are_evenly_spaced() {
        let mut rng = rng();
        let batch = burst_batch(&mut rng);
        assert_eq!(batch.len(), BURST_COUNT);
        for (i, cat) in batch.iter().enumerate() {
            assert_eq!(cat.angle, i as f32 * 12.0);
            assert!(cat.image < IMAGE_COUNT);
            assert!((40..90).contains(&cat.size));
        }
    }

    #[test]
    fn fading_samples_stay_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let img = fading_image(&mut rng);
            assert!((0.0..100.0).contains(&img.x));
            assert!((0.0..100.0).contains(&img.y));
            assert!((40..100).contains(&img.size));
            assert!((3.0..7.0).contains(&img.duration));

            let heart = fading_heart(&mut rng);
            assert!((20..50).contains(&heart.size));
            assert!((3.0..7.0).contains(&heart.duration));
        }
    }
}
