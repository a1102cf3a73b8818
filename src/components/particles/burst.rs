//! Celebration burst layer.
//!
//! Each record's emission angle becomes a translation vector scaled to
//! 150 viewport units, plus a doubled-angle spin, handed to the
//! `burst-out` keyframes as custom properties.

use dioxus::prelude::*;
use heartfall_core::BurstImage;

use crate::context::use_content;

/// Flight distance from the viewport center, in vw/vh
const BURST_DISTANCE: f32 = 150.0;

#[component]
pub fn BurstLayer(cats: Vec<BurstImage>) -> Element {
    let content = use_content();
    let content = content();

    rsx! {
        for cat in cats.iter() {
            {
                let src = content.particle_image(cat.image).to_string();
                let radians = cat.angle.to_radians();
                let end_x = radians.cos() * BURST_DISTANCE;
                let end_y = radians.sin() * BURST_DISTANCE;
                let spin = cat.angle * 2.0;

                rsx! {
                    img {
                        key: "{cat.id}",
                        class: "burst-image",
                        src: "{src}",
                        style: "width: {cat.size}px; height: {cat.size}px; --end-x: {end_x}vw; --end-y: {end_y}vh; --spin: {spin}deg;",
                    }
                }
            }
        }
    }
}
