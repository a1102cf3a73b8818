//! Timeline Section Component
//!
//! Alternating cards walking through the relationship, one numbered
//! badge per entry. Entering this section is what wakes the ambient
//! particle spawners, so the page only starts snowing once the visitor
//! is actually reading.

use dioxus::prelude::*;

use crate::context::use_content;

#[derive(Props, Clone, PartialEq)]
pub struct TimelineSectionProps {
    /// Fired on pointer-enter; the page uses it to enable animations
    pub on_enter: EventHandler<()>,
}

#[component]
pub fn TimelineSection(props: TimelineSectionProps) -> Element {
    let content = use_content();
    let content = content();

    rsx! {
        section {
            class: "section",
            onmouseenter: move |_| props.on_enter.call(()),

            div {
                h2 { class: "section-heading", "{content.timeline_title} 📅" }

                div { class: "timeline-list",
                    for (index, event) in content.timeline.iter().enumerate() {
                        {
                            let number = index + 1;
                            let entry_class = if index % 2 == 1 {
                                "timeline-entry reverse"
                            } else {
                                "timeline-entry"
                            };

                            rsx! {
                                div {
                                    key: "{index}",
                                    class: "{entry_class}",

                                    div { class: "frosted-card timeline-card",
                                        h3 { class: "timeline-date", "{event.date}" }
                                        p { class: "timeline-desc", "{event.description}" }
                                    }

                                    div { class: "timeline-badge", "{number}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
