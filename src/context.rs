//! Content context for Heartfall.
//!
//! The page content is resolved once in `main` and provided to all
//! components via context, so sections and particle layers read copy
//! and image paths from one place.

use dioxus::prelude::*;
use heartfall_core::SiteContent;

/// Hook to access the page content from context.
///
/// # Example
///
/// ```ignore
/// let content = use_content();
/// rsx! { h1 { "{content().question.question}" } }
/// ```
pub fn use_content() -> Signal<SiteContent> {
    use_context::<Signal<SiteContent>>()
}
