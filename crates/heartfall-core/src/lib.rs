//! Heartfall Core Library
//!
//! View-state model for the animated proposal page.
//!
//! ## Overview
//!
//! Heartfall renders a scripted proposal: ambient particle showers while
//! the visitor reads, a Yes/No question card whose controls mutate with
//! every "No" click, and a celebration burst once "Yes" lands. This crate
//! holds everything the UI layer derives its frames from, as a pure,
//! synchronous model:
//!
//! - the transient particle records and their bounded collections,
//! - uniform spawn sampling driven by any [`rand::Rng`],
//! - the one-way outcome transition and its burst batch,
//! - the derived Yes/No control geometry,
//! - the page content model with its built-in defaults.
//!
//! Timers and rendering live in the desktop crate; everything here can be
//! driven deterministically from tests with a seeded RNG.
//!
//! ## Quick Start
//!
//! ```
//! use heartfall_core::ProposalState;
//!
//! let mut rng = rand::rng();
//! let mut state = ProposalState::new();
//!
//! state.enable_animations();
//! state.tick_rain(&mut rng);
//! state.press_no(&mut rng);
//! assert!(state.press_yes(&mut rng));
//! assert_eq!(state.burst().len(), 30);
//! ```

pub mod content;
pub mod controls;
pub mod error;
pub mod particle;
pub mod spawn;
pub mod state;

// Re-exports
pub use content::{ImageSet, LetterContent, MemorySlot, QuestionContent, SiteContent, TimelineEvent};
pub use controls::Offset;
pub use error::{ContentError, ContentResult};
pub use particle::{BurstImage, FadingHeart, FadingImage, FallingImage, FloatingHeart, ParticleId};
pub use state::ProposalState;
