//! Color constants for the valentine palette.

#![allow(dead_code)]

// === ROSE (Primary accent, headings, buttons) ===
pub const ROSE: &str = "#e11d48";
pub const ROSE_SOFT: &str = "#f43f5e";
pub const ROSE_GLOW: &str = "rgba(225, 29, 72, 0.3)";
pub const ROSE_BORDER: &str = "#ffe4e6";

// === PINK (Backgrounds, particle fill) ===
pub const VALENTINE_PINK: &str = "#ffc0cb";
pub const BLUSH: &str = "#fff1f2";
pub const BLUSH_DEEP: &str = "#fecdd3";

// === TEXT ===
pub const TEXT_ROSE: &str = "#9f1239";
pub const TEXT_ROSE_SOFT: &str = "rgba(159, 18, 57, 0.7)";

// === SURFACES ===
pub const CARD_BG: &str = "rgba(255, 255, 255, 0.7)";
pub const WHITE: &str = "#ffffff";
