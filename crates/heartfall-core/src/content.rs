//! Page content model
//!
//! Everything the page says and shows is data: section headings, the
//! timeline entries, the memory slots, the question card copy, and the
//! image paths the particle layers draw from. The built-in defaults are
//! the canonical page; `--content <path>` swaps in a JSON file with the
//! same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};
use crate::spawn::IMAGE_COUNT;

/// The letter section shown before anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterContent {
    pub heading: String,
    pub body: String,
}

/// One entry of the timeline section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Display string, shown verbatim
    pub date: String,
    pub description: String,
}

/// One tile of the memories grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySlot {
    pub image: String,
    pub alt: String,
}

/// Copy for the question card, both before and after the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionContent {
    pub tagline: String,
    pub question: String,
    pub yes_label: String,
    pub no_label: String,
    /// No-button label once the visitor has clicked it at least once
    pub no_retry_label: String,
    pub celebration_heading: String,
    pub promise: String,
    pub dedication: String,
}

/// Image assets referenced by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    /// Numbered images the particle spawners sample from
    pub particles: Vec<String>,
    pub background: String,
    pub cupid: String,
    pub question_cat: String,
    pub happy_cat: String,
}

/// Full page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub letter: LetterContent,
    pub timeline_title: String,
    pub timeline: Vec<TimelineEvent>,
    pub memories_title: String,
    pub memories: Vec<MemorySlot>,
    pub question: QuestionContent,
    pub images: ImageSet,
}

impl SiteContent {
    /// Load content from a JSON file, replacing the built-in page
    /// wholesale.
    pub fn load(path: &Path) -> ContentResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let content: Self = serde_json::from_str(&raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Structural checks beyond what serde enforces.
    pub fn validate(&self) -> ContentResult<()> {
        if self.images.particles.is_empty() {
            return Err(ContentError::Invalid(
                "images.particles must name at least one image".to_string(),
            ));
        }
        if self.timeline.is_empty() {
            return Err(ContentError::Invalid(
                "timeline must have at least one entry".to_string(),
            ));
        }
        Ok(())
    }

    /// Path for a particle image index, wrapping past the end of the set
    /// so stale indices from a smaller custom set still resolve.
    pub fn particle_image(&self, index: usize) -> &str {
        &self.images.particles[index % self.images.particles.len()]
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            letter: LetterContent {
                heading: "Someone is thinking of you".to_string(),
                body: "Consider this an official delivery from Cupid.".to_string(),
            },
            timeline_title: "Our Timeline".to_string(),
            timeline: vec![
                TimelineEvent {
                    date: "September 2, 2024".to_string(),
                    description: "The moment everything started".to_string(),
                },
                TimelineEvent {
                    date: "November 4, 2024".to_string(),
                    description: "Coffee and endless conversations".to_string(),
                },
                TimelineEvent {
                    date: "November 31, 2024".to_string(),
                    description: "Butterflies everywhere".to_string(),
                },
                TimelineEvent {
                    date: "July 22, 2025".to_string(),
                    description: "A quiet spark we kept to ourselves".to_string(),
                },
                TimelineEvent {
                    date: "December 19, 2025".to_string(),
                    description: "A simple promise, softly said".to_string(),
                },
            ],
            memories_title: "Our Memories".to_string(),
            memories: (1..=4)
                .map(|i| MemorySlot {
                    image: format!("assets/images/memory{}.svg", i),
                    alt: format!("Memory {}", i),
                })
                .collect(),
            question: QuestionContent {
                tagline: "A Special Invitation".to_string(),
                question: "Will you be my Valentine?".to_string(),
                yes_label: "Yes".to_string(),
                no_label: "No".to_string(),
                no_retry_label: "Rethink this... 😿".to_string(),
                celebration_heading: "You just made my day".to_string(),
                promise: "Forever and always".to_string(),
                dedication: "My one and only Valentine 💕".to_string(),
            },
            images: ImageSet {
                particles: (1..=IMAGE_COUNT)
                    .map(|i| format!("assets/images/{}.svg", i))
                    .collect(),
                background: "assets/images/bg.svg".to_string(),
                cupid: "assets/images/cupid.svg".to_string(),
                question_cat: "assets/images/questioncat.svg".to_string(),
                happy_cat: "assets/images/happycat.svg".to_string(),
            },
        }
    }
}
