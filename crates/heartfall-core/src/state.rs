//! Proposal view-state
//!
//! [`ProposalState`] owns everything the page renders from: the "No"
//! click counter, the one-way outcome flag, and the four bounded
//! particle collections. The UI layer holds one of these in a signal,
//! drives the `tick_*` operations from its timers, and the `press_*`
//! operations from its click handlers.
//!
//! Guards live here rather than in the timers: a tick on a collection
//! whose show condition does not hold appends nothing, so timers can
//! stay dumb periodic loops.

use rand::Rng;

use crate::controls::Offset;
use crate::particle::{BurstImage, FadingHeart, FadingImage, FallingImage, FloatingHeart};
use crate::spawn;

/// Live state of the proposal page.
#[derive(Debug, Clone, Default)]
pub struct ProposalState {
    no_count: u32,
    yes_pressed: bool,
    animations_enabled: bool,
    no_button_offset: Offset,
    rain: Vec<FallingImage>,
    hearts: Vec<FloatingHeart>,
    burst: Vec<BurstImage>,
    fading_images: Vec<FadingImage>,
    fading_hearts: Vec<FadingHeart>,
}

impl ProposalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the ambient spawners live. One-way for the session; called
    /// when the visitor's pointer first enters the timeline section.
    pub fn enable_animations(&mut self) {
        if !self.animations_enabled {
            tracing::debug!("ambient animations enabled");
            self.animations_enabled = true;
        }
    }

    /// Whether ambient spawners may append records.
    fn ambient_live(&self) -> bool {
        self.animations_enabled && !self.yes_pressed
    }

    /// Periodic tick of the falling-image spawner. Appends one record
    /// while the ambient condition holds; inert otherwise.
    pub fn tick_rain(&mut self, rng: &mut impl Rng) {
        if self.ambient_live() {
            spawn::push_recent(&mut self.rain, spawn::falling_image(rng), spawn::RAIN_WINDOW);
        }
    }

    /// Periodic tick of the floating-heart spawner.
    pub fn tick_hearts(&mut self, rng: &mut impl Rng) {
        if self.ambient_live() {
            spawn::push_recent(
                &mut self.hearts,
                spawn::floating_heart(rng),
                spawn::HEART_WINDOW,
            );
        }
    }

    /// Periodic tick of the post-decision fading-image spawner. Appends
    /// only after the outcome transition.
    pub fn tick_fading_images(&mut self, rng: &mut impl Rng) {
        if self.yes_pressed {
            spawn::push_recent(
                &mut self.fading_images,
                spawn::fading_image(rng),
                spawn::FADING_IMAGE_WINDOW,
            );
        }
    }

    /// Periodic tick of the post-decision fading-heart spawner.
    pub fn tick_fading_hearts(&mut self, rng: &mut impl Rng) {
        if self.yes_pressed {
            spawn::push_recent(
                &mut self.fading_hearts,
                spawn::fading_heart(rng),
                spawn::FADING_HEART_WINDOW,
            );
        }
    }

    /// A "No" click: bump the counter and throw the button to a fresh
    /// random offset.
    pub fn press_no(&mut self, rng: &mut impl Rng) {
        self.no_count += 1;
        self.no_button_offset = Offset::sample(rng);
        tracing::debug!(no_count = self.no_count, "negative click");
    }

    /// The outcome transition: flip the flag, clear both ambient
    /// collections, and seed the celebration burst.
    ///
    /// Returns `true` only on the actual false-to-true flip, so callers
    /// can start the post-decision spawners exactly once. There is no
    /// reverse transition.
    pub fn press_yes(&mut self, rng: &mut impl Rng) -> bool {
        if self.yes_pressed {
            return false;
        }
        self.yes_pressed = true;
        self.rain.clear();
        self.hearts.clear();
        self.burst = spawn::burst_batch(rng);
        tracing::info!(no_count = self.no_count, "she said yes");
        true
    }

    pub fn no_count(&self) -> u32 {
        self.no_count
    }

    pub fn yes_pressed(&self) -> bool {
        self.yes_pressed
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    pub fn no_button_offset(&self) -> Offset {
        self.no_button_offset
    }

    pub fn rain(&self) -> &[FallingImage] {
        &self.rain
    }

    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }

    pub fn burst(&self) -> &[BurstImage] {
        &self.burst
    }

    pub fn fading_images(&self) -> &[FadingImage] {
        &self.fading_images
    }

    pub fn fading_hearts(&self) -> &[FadingHeart] {
        &self.fading_hearts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x10ff)
    }

    #[test]
    fn ticks_are_inert_until_enabled() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        state.tick_rain(&mut rng);
        state.tick_hearts(&mut rng);
        assert!(state.rain().is_empty());
        assert!(state.hearts().is_empty());

        state.enable_animations();
        state.tick_rain(&mut rng);
        state.tick_hearts(&mut rng);
        assert_eq!(state.rain().len(), 1);
        assert_eq!(state.hearts().len(), 1);
    }

    #[test]
    fn ambient_windows_hold_under_long_runs() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        state.enable_animations();
        for _ in 0..1000 {
            state.tick_rain(&mut rng);
            state.tick_hearts(&mut rng);
            assert!(state.rain().len() <= spawn::RAIN_WINDOW);
            assert!(state.hearts().len() <= spawn::HEART_WINDOW);
        }
        assert_eq!(state.rain().len(), spawn::RAIN_WINDOW);
        assert_eq!(state.hearts().len(), spawn::HEART_WINDOW);
    }

    #[test]
    fn press_no_bumps_counter_and_moves_button() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        assert_eq!(state.no_button_offset(), Offset::default());
        state.press_no(&mut rng);
        state.press_no(&mut rng);
        assert_eq!(state.no_count(), 2);
        let offset = state.no_button_offset();
        assert!((-100.0..100.0).contains(&offset.x));
        assert!((-100.0..100.0).contains(&offset.y));
    }

    #[test]
    fn outcome_transition_clears_ambient_and_seeds_burst() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        state.enable_animations();
        for _ in 0..10 {
            state.tick_rain(&mut rng);
            state.tick_hearts(&mut rng);
        }

        assert!(state.press_yes(&mut rng));
        assert!(state.yes_pressed());
        assert!(state.rain().is_empty());
        assert!(state.hearts().is_empty());
        assert_eq!(state.burst().len(), spawn::BURST_COUNT);
        for (i, cat) in state.burst().iter().enumerate() {
            assert_eq!(cat.angle, i as f32 * 12.0);
        }
    }

    #[test]
    fn outcome_transition_is_one_way_and_single_shot() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        assert!(state.press_yes(&mut rng));
        let burst: Vec<_> = state.burst().to_vec();
        // Second press reports no transition and leaves the burst alone
        assert!(!state.press_yes(&mut rng));
        assert_eq!(state.burst(), &burst[..]);
    }

    #[test]
    fn ambient_ticks_stay_inert_after_outcome() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        state.enable_animations();
        state.press_yes(&mut rng);
        for _ in 0..10 {
            state.tick_rain(&mut rng);
            state.tick_hearts(&mut rng);
        }
        assert!(state.rain().is_empty());
        assert!(state.hearts().is_empty());
    }

    #[test]
    fn fading_ticks_only_run_after_outcome() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        state.tick_fading_images(&mut rng);
        state.tick_fading_hearts(&mut rng);
        assert!(state.fading_images().is_empty());
        assert!(state.fading_hearts().is_empty());

        state.press_yes(&mut rng);
        for _ in 0..1000 {
            state.tick_fading_images(&mut rng);
            state.tick_fading_hearts(&mut rng);
        }
        assert_eq!(state.fading_images().len(), spawn::FADING_IMAGE_WINDOW);
        assert_eq!(state.fading_hearts().len(), spawn::FADING_HEART_WINDOW);
    }
}
