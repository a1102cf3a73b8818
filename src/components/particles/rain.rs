//! Falling-image layer.

use dioxus::prelude::*;
use heartfall_core::FallingImage;

use crate::context::use_content;

#[component]
pub fn RainLayer(drops: Vec<FallingImage>) -> Element {
    let content = use_content();
    let content = content();

    rsx! {
        for drop in drops.iter() {
            {
                let src = content.particle_image(drop.image).to_string();
                let half = drop.size as f32 / 2.0;

                rsx! {
                    img {
                        key: "{drop.id}",
                        class: "falling-image",
                        src: "{src}",
                        style: "left: calc({drop.x}vw - {half}px); width: {drop.size}px; height: {drop.size}px; --fall-duration: {drop.duration}s;",
                    }
                }
            }
        }
    }
}
