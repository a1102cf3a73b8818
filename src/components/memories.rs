//! Memories Section Component
//!
//! A two-column grid of photo tiles, staggered in with a per-tile
//! animation delay.

use dioxus::prelude::*;

use crate::context::use_content;

#[component]
pub fn MemoriesSection() -> Element {
    let content = use_content();
    let content = content();

    rsx! {
        section { class: "section",
            div {
                h2 { class: "section-heading", "{content.memories_title} 🕰️" }

                div { class: "memories-grid",
                    for (index, slot) in content.memories.iter().enumerate() {
                        div {
                            key: "{slot.image}",
                            class: "memory-tile",
                            style: "--tile-index: {index}",

                            img {
                                src: "{slot.image}",
                                alt: "{slot.alt}",
                            }
                        }
                    }
                }
            }
        }
    }
}
