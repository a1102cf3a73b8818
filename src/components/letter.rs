//! Letter Section Component
//!
//! The opening scene: a frosted card announcing the delivery, a cupid
//! hovering over its corner, and a bouncing arrow nudging the visitor
//! to scroll.

use dioxus::prelude::*;

use crate::context::use_content;

#[component]
pub fn LetterSection() -> Element {
    let content = use_content();
    let content = content();

    rsx! {
        section {
            class: "section letter-section",
            style: "background-image: url({content.images.background});",

            div { class: "letter-wrap",
                img {
                    class: "cupid",
                    src: "{content.images.cupid}",
                    alt: "Cupid",
                }

                div { class: "frosted-card letter-card",
                    span { class: "letter-glyph", "💌" }
                    h1 { class: "letter-heading", "{content.letter.heading}" }
                    p { class: "letter-body", "{content.letter.body}" }
                    span { class: "bounce-arrow", "↓" }
                }
            }
        }
    }
}
