//! Question Card Component
//!
//! The proposal itself. Before the decision: the invitation copy and
//! the Yes/No pair, with the Yes button growing and the No button
//! shrinking, dimming, and jumping to a fresh offset on every refusal.
//! After the decision: the celebration view.
//!
//! All control geometry is derived from the click counter by
//! `heartfall_core::controls` and applied as inline style, so the
//! component holds no state of its own.

use dioxus::prelude::*;
use heartfall_core::{controls, Offset};

use crate::context::use_content;

#[derive(Props, Clone, PartialEq)]
pub struct QuestionSectionProps {
    /// How many times "No" has been clicked
    pub no_count: u32,
    /// Outcome flag; switches the card to the celebration view
    pub yes_pressed: bool,
    /// Current offset of the No button
    pub offset: Offset,
    pub on_yes: EventHandler<()>,
    pub on_no: EventHandler<()>,
}

#[component]
pub fn QuestionSection(props: QuestionSectionProps) -> Element {
    let content = use_content();
    let content = content();
    let on_yes = props.on_yes;
    let on_no = props.on_no;

    rsx! {
        section { class: "section",
            main { class: "frosted-card question-card",
                if props.yes_pressed {
                    Celebration {}
                } else {
                    img {
                        class: "question-cat",
                        src: "{content.images.question_cat}",
                        alt: "Question cat",
                    }

                    p { class: "question-tagline", "{content.question.tagline}" }
                    h1 { class: "question-heading", "{content.question.question}" }

                    div { class: "question-buttons",
                        YesButton {
                            label: content.question.yes_label.clone(),
                            no_count: props.no_count,
                            on_click: move |_| on_yes.call(()),
                        }
                        NoButton {
                            label: if props.no_count == 0 {
                                content.question.no_label.clone()
                            } else {
                                content.question.no_retry_label.clone()
                            },
                            no_count: props.no_count,
                            offset: props.offset,
                            on_click: move |_| on_no.call(()),
                        }
                    }
                }
            }
        }
    }
}

/// The affirmative control. Grows by 80 px of font per refusal until it
/// dwarfs everything else on the card.
#[component]
fn YesButton(label: String, no_count: u32, on_click: EventHandler<()>) -> Element {
    let font = controls::yes_font_px(no_count);
    let pad_y = controls::yes_padding_y_px(no_count);
    let pad_x = controls::yes_padding_x_px(no_count);

    rsx! {
        button {
            class: "btn-yes",
            style: "font-size: {font}px; padding: {pad_y}px {pad_x}px;",
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}

/// The negative control. Shrinks and fades with each click, floored so
/// it never fully disappears, and jumps to the sampled offset.
#[component]
fn NoButton(label: String, no_count: u32, offset: Offset, on_click: EventHandler<()>) -> Element {
    let font = controls::no_font_px(no_count);
    let height = controls::no_height_px(no_count);
    let opacity = controls::no_opacity(no_count);

    rsx! {
        button {
            class: "btn-no",
            style: "font-size: {font}px; height: {height}px; opacity: {opacity}; transform: translate({offset.x}px, {offset.y}px);",
            onclick: move |_| on_click.call(()),
            "{label}"
        }
    }
}

/// Post-decision view: the happy photo flanked by gifts, the gradient
/// headline, and the dedication.
#[component]
fn Celebration() -> Element {
    let content = use_content();
    let content = content();

    rsx! {
        div { class: "celebration",
            div { class: "celebration-photo-wrap",
                span { class: "gift-emoji left", "💝" }
                span { class: "gift-emoji right", "💖" }
                img {
                    class: "celebration-photo",
                    src: "{content.images.happy_cat}",
                    alt: "Happy cats",
                }
            }

            div { class: "celebration-text",
                h1 { class: "celebration-heading", "{content.question.celebration_heading}" }
                div { class: "celebration-divider" }
                p { class: "celebration-promise", "{content.question.promise} ⭐" }
                p { class: "celebration-dedication", "{content.question.dedication}" }
            }
        }
    }
}
