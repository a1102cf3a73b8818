use dioxus::prelude::*;
use heartfall_core::SiteContent;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The proposal page (the whole app is one scrolling view)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the page content context, and routing.
#[component]
pub fn App() -> Element {
    // Content is resolved once at startup; components read it via context
    let content: Signal<SiteContent> = use_signal(crate::get_content);
    use_context_provider(|| content);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
