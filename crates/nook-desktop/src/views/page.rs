//! Page body for the current route

use dioxus::prelude::*;
use nook_core::{Route, SearchMode};

use crate::state::AppState;

/// Renders the page selected by the current route
#[component]
pub fn Page() -> Element {
    let state = use_context::<AppState>();
    let route = (state.route)();
    let title = route.title();

    let body = match &route {
        Route::Search {
            request: Some(request),
        } => {
            let verb = match request.mode {
                SearchMode::Search => "Searching",
                SearchMode::Ask => "Asking",
            };
            format!("{verb} your knowledge base for \u{201c}{}\u{201d}", request.query)
        }
        Route::Search { request: None } => {
            "Type in the search box, or press Shift+Enter to ask.".to_string()
        }
        other => format!("{} lives at {}", other.title(), other.path()),
    };

    rsx! {
        main {
            class: "page",
            style: "flex: 1; padding: 24px; overflow-y: auto;",

            h1 {
                style: "font-size: 22px; font-weight: 600; margin: 0 0 12px 0;",
                "{title}"
            }
            p {
                style: "font-size: 14px; color: #656d76;",
                "{body}"
            }
        }
    }
}
