//! The proposal page.
//!
//! Owns the [`ProposalState`] signal and every timer that drives it.
//! Timers are plain periodic loops; the state decides whether a tick
//! actually appends anything, so the loops never need to coordinate.
//! All tasks are spawned into this component's scope and die with it.

use std::time::Duration;

use dioxus::prelude::*;
use heartfall_core::spawn::{
    FADING_HEART_INTERVAL_MS, FADING_IMAGE_INTERVAL_MS, HEART_INTERVAL_MS, POST_DECISION_DELAY_MS,
    RAIN_INTERVAL_MS,
};
use heartfall_core::ProposalState;

use crate::components::particles::{
    BurstLayer, FadingHeartLayer, FadingImageLayer, HeartLayer, RainLayer,
};
use crate::components::{LetterSection, MemoriesSection, QuestionSection, TimelineSection};

#[component]
pub fn Home() -> Element {
    let mut state = use_signal(ProposalState::new);

    // Ambient spawner loops. They run for the whole life of the page;
    // ticks are inert until the visitor reaches the timeline, and again
    // after the outcome transition.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(RAIN_INTERVAL_MS)).await;
                state.write().tick_rain(&mut rand::rng());
            }
        });

        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(HEART_INTERVAL_MS)).await;
                state.write().tick_hearts(&mut rand::rng());
            }
        });
    });

    let on_enter_timeline = move |_: ()| {
        state.write().enable_animations();
    };

    let on_no = move |_: ()| {
        state.write().press_no(&mut rand::rng());
    };

    // The outcome transition seeds the burst synchronously; the shower
    // loops start here so they exist exactly once per session.
    let on_yes = move |_: ()| {
        let transitioned = state.write().press_yes(&mut rand::rng());
        if transitioned {
            spawn(async move {
                tokio::time::sleep(Duration::from_millis(POST_DECISION_DELAY_MS)).await;
                loop {
                    tokio::time::sleep(Duration::from_millis(FADING_IMAGE_INTERVAL_MS)).await;
                    state.write().tick_fading_images(&mut rand::rng());
                }
            });

            spawn(async move {
                tokio::time::sleep(Duration::from_millis(POST_DECISION_DELAY_MS)).await;
                loop {
                    tokio::time::sleep(Duration::from_millis(FADING_HEART_INTERVAL_MS)).await;
                    state.write().tick_fading_hearts(&mut rand::rng());
                }
            });
        }
    };

    let snapshot = state();

    rsx! {
        div { class: "page",
            // Background particle layers, behind every section
            div { class: "particle-layer",
                RainLayer { drops: snapshot.rain().to_vec() }
                HeartLayer { hearts: snapshot.hearts().to_vec() }
                BurstLayer { cats: snapshot.burst().to_vec() }
                FadingImageLayer { images: snapshot.fading_images().to_vec() }
                FadingHeartLayer { hearts: snapshot.fading_hearts().to_vec() }
            }

            LetterSection {}
            TimelineSection { on_enter: on_enter_timeline }
            MemoriesSection {}
            QuestionSection {
                no_count: snapshot.no_count(),
                yes_pressed: snapshot.yes_pressed(),
                offset: snapshot.no_button_offset(),
                on_yes,
                on_no,
            }
        }
    }
}
