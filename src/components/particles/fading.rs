//! Post-decision shower layers: images and hearts blooming in and out
//! at random viewport positions.

use dioxus::prelude::*;
use heartfall_core::{FadingHeart, FadingImage};

use crate::context::use_content;

#[component]
pub fn FadingImageLayer(images: Vec<FadingImage>) -> Element {
    let content = use_content();
    let content = content();

    rsx! {
        for bloom in images.iter() {
            {
                let src = content.particle_image(bloom.image).to_string();

                rsx! {
                    img {
                        key: "{bloom.id}",
                        class: "fading-image",
                        src: "{src}",
                        style: "left: {bloom.x}vw; top: {bloom.y}vh; width: {bloom.size}px; height: {bloom.size}px; --bloom-duration: {bloom.duration}s;",
                    }
                }
            }
        }
    }
}

#[component]
pub fn FadingHeartLayer(hearts: Vec<FadingHeart>) -> Element {
    rsx! {
        for heart in hearts.iter() {
            div {
                key: "{heart.id}",
                class: "fading-heart",
                style: "left: {heart.x}vw; top: {heart.y}vh; font-size: {heart.size}px; --bloom-duration: {heart.duration}s;",
                "❤️"
            }
        }
    }
}
