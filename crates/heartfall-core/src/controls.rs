//! Derived geometry of the Yes/No controls
//!
//! Every value the question card needs to style its two buttons is a
//! pure function of the "No" click counter. The Yes button grows without
//! bound; the No button shrinks and dims, floored so it never quite
//! disappears.

use rand::Rng;

/// Pixel offset applied to the No button after each click.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// Sample a fresh offset, uniform in +-100 px per axis.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(-100.0..100.0),
            y: rng.random_range(-100.0..100.0),
        }
    }
}

/// Yes button font size in px: grows by 80 px per No click.
pub fn yes_font_px(no_count: u32) -> f32 {
    no_count as f32 * 80.0 + 18.0
}

/// Yes button vertical padding in px, floored at 16.
pub fn yes_padding_y_px(no_count: u32) -> f32 {
    (yes_font_px(no_count) / 2.0).max(16.0)
}

/// Yes button horizontal padding in px, floored at 40.
pub fn yes_padding_x_px(no_count: u32) -> f32 {
    yes_font_px(no_count).max(40.0)
}

/// No button font size in px: shrinks by 2 px per click, floored at 10.
pub fn no_font_px(no_count: u32) -> f32 {
    (14.0 - no_count as f32 * 2.0).max(10.0)
}

/// No button opacity: fades by 0.15 per click, floored at 0.2.
pub fn no_opacity(no_count: u32) -> f32 {
    (1.0 - no_count as f32 * 0.15).max(0.2)
}

/// No button height in px: shrinks by 4 px per click, floored at 48.
pub fn no_height_px(no_count: u32) -> f32 {
    (56.0 - no_count as f32 * 4.0).max(48.0)
}
