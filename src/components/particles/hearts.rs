//! Floating-heart layer.

use dioxus::prelude::*;
use heartfall_core::FloatingHeart;

#[component]
pub fn HeartLayer(hearts: Vec<FloatingHeart>) -> Element {
    rsx! {
        for heart in hearts.iter() {
            div {
                key: "{heart.id}",
                class: "floating-heart",
                style: "left: {heart.x}vw; --drift-duration: {heart.duration}s; --drift-delay: {heart.delay}s;",
                "❤️"
            }
        }
    }
}
