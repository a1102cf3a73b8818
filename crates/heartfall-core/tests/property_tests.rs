//! Property-based tests for the proposal view-state
//!
//! Uses proptest to verify the window bounds and derived-control floors
//! across arbitrary interaction sequences.

use heartfall_core::spawn::{
    self, FADING_HEART_WINDOW, FADING_IMAGE_WINDOW, HEART_WINDOW, RAIN_WINDOW,
};
use heartfall_core::{controls, ProposalState};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything the UI can do to the state.
#[derive(Debug, Clone)]
enum PageOp {
    Enable,
    TickRain,
    TickHearts,
    TickFadingImages,
    TickFadingHearts,
    PressNo,
    PressYes,
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(PageOp::Enable),
            4 => Just(PageOp::TickRain),
            4 => Just(PageOp::TickHearts),
            3 => Just(PageOp::TickFadingImages),
            3 => Just(PageOp::TickFadingHearts),
            2 => Just(PageOp::PressNo),
            1 => Just(PageOp::PressYes),
        ],
        0..max_ops,
    )
}

fn apply(state: &mut ProposalState, rng: &mut StdRng, op: &PageOp) {
    match op {
        PageOp::Enable => state.enable_animations(),
        PageOp::TickRain => state.tick_rain(rng),
        PageOp::TickHearts => state.tick_hearts(rng),
        PageOp::TickFadingImages => state.tick_fading_images(rng),
        PageOp::TickFadingHearts => state.tick_fading_hearts(rng),
        PageOp::PressNo => state.press_no(rng),
        PageOp::PressYes => {
            state.press_yes(rng);
        }
    }
}

proptest! {
    /// No interaction sequence can push a collection past its window.
    #[test]
    fn windows_hold_for_any_op_sequence(ops in page_ops_strategy(300), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = ProposalState::new();
        for op in &ops {
            apply(&mut state, &mut rng, op);
            prop_assert!(state.rain().len() <= RAIN_WINDOW);
            prop_assert!(state.hearts().len() <= HEART_WINDOW);
            prop_assert!(state.fading_images().len() <= FADING_IMAGE_WINDOW);
            prop_assert!(state.fading_hearts().len() <= FADING_HEART_WINDOW);
            prop_assert!(state.burst().len() <= spawn::BURST_COUNT);
        }
    }

    /// Once the outcome flag is up, ambient collections stay empty.
    #[test]
    fn ambient_collections_stay_empty_after_yes(ops in page_ops_strategy(200), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = ProposalState::new();
        state.enable_animations();
        state.press_yes(&mut rng);
        for op in &ops {
            apply(&mut state, &mut rng, op);
            prop_assert!(state.rain().is_empty());
            prop_assert!(state.hearts().is_empty());
        }
        // And the burst stayed exactly as seeded
        prop_assert_eq!(state.burst().len(), spawn::BURST_COUNT);
    }

    /// Derived control values respect their formulas and floors for any
    /// counter value.
    #[test]
    fn control_geometry_formulas(n in 0u32..10_000) {
        prop_assert_eq!(controls::yes_font_px(n), n as f32 * 80.0 + 18.0);
        prop_assert_eq!(controls::no_font_px(n), (14.0 - n as f32 * 2.0).max(10.0));
        prop_assert!(controls::no_font_px(n) >= 10.0);
        prop_assert!((0.2..=1.0).contains(&controls::no_opacity(n)));
        prop_assert!(controls::no_height_px(n) >= 48.0);
        prop_assert!(controls::no_height_px(n) <= 56.0);
        prop_assert!(controls::yes_padding_y_px(n) >= 16.0);
        prop_assert!(controls::yes_padding_x_px(n) >= 40.0);
    }

    /// Burst emission angles are always the same even spacing no matter
    /// the RNG.
    #[test]
    fn burst_spacing_is_rng_independent(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = spawn::burst_batch(&mut rng);
        prop_assert_eq!(batch.len(), spawn::BURST_COUNT);
        for (i, cat) in batch.iter().enumerate() {
            prop_assert_eq!(cat.angle, i as f32 * 12.0);
        }
    }
}
