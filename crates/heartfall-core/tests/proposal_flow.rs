//! End-to-end flow of the proposal view-state.
//!
//! Drives `ProposalState` through a full session the way the desktop
//! timers and click handlers would: reading the page, dodging the No
//! button a few times, then pressing Yes and watching the celebration
//! shower fill in.

use heartfall_core::spawn::{
    BURST_COUNT, FADING_HEART_WINDOW, FADING_IMAGE_WINDOW, HEART_WINDOW, RAIN_WINDOW,
};
use heartfall_core::{controls, ProposalState};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn full_session_flow() {
    let mut rng = StdRng::seed_from_u64(214);
    let mut state = ProposalState::new();

    // Fresh page: nothing animates before the visitor reaches the
    // timeline section.
    for _ in 0..5 {
        state.tick_rain(&mut rng);
        state.tick_hearts(&mut rng);
    }
    assert!(state.rain().is_empty());
    assert!(state.hearts().is_empty());

    // Pointer enters the timeline: ambient spawners go live.
    state.enable_animations();
    for _ in 0..50 {
        state.tick_rain(&mut rng);
        state.tick_hearts(&mut rng);
    }
    assert_eq!(state.rain().len(), RAIN_WINDOW);
    assert_eq!(state.hearts().len(), HEART_WINDOW);

    // Three No clicks: counter and derived control geometry move.
    for _ in 0..3 {
        state.press_no(&mut rng);
    }
    assert_eq!(state.no_count(), 3);
    assert_eq!(controls::yes_font_px(3), 258.0);
    assert_eq!(controls::no_font_px(3), 10.0);
    assert_eq!(controls::no_height_px(3), 48.0);
    assert!((controls::no_opacity(3) - 0.55).abs() < 1e-6);

    // Yes: ambient collections empty, burst seeded in one synchronous
    // step.
    assert!(state.press_yes(&mut rng));
    assert!(state.yes_pressed());
    assert!(state.rain().is_empty());
    assert!(state.hearts().is_empty());
    assert_eq!(state.burst().len(), BURST_COUNT);
    for (i, cat) in state.burst().iter().enumerate() {
        assert_eq!(cat.angle, i as f32 * 12.0);
    }

    // Ambient spawners stay dead even though the enable flag still
    // holds.
    for _ in 0..20 {
        state.tick_rain(&mut rng);
        state.tick_hearts(&mut rng);
    }
    assert!(state.rain().is_empty());
    assert!(state.hearts().is_empty());

    // The post-decision shower fills its own windows.
    for _ in 0..50 {
        state.tick_fading_images(&mut rng);
        state.tick_fading_hearts(&mut rng);
    }
    assert_eq!(state.fading_images().len(), FADING_IMAGE_WINDOW);
    assert_eq!(state.fading_hearts().len(), FADING_HEART_WINDOW);
}

#[test]
fn no_clicks_after_yes_change_nothing_visible() {
    let mut rng = StdRng::seed_from_u64(215);
    let mut state = ProposalState::new();

    state.press_yes(&mut rng);
    let burst: Vec<_> = state.burst().to_vec();

    // A stray No event (e.g. queued before the re-render) still bumps
    // the counter but cannot resurrect the question card state.
    state.press_no(&mut rng);
    assert!(state.yes_pressed());
    assert_eq!(state.burst(), &burst[..]);
}
