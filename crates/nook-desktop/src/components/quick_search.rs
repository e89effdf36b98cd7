//! Quick search box for the header

use dioxus::prelude::*;
use nook_core::search::{ARIA_LABEL, PLACEHOLDER};
use nook_core::QuickSearch as QuickSearchModel;

use crate::keyboard::key_press;
use crate::state::AppState;

/// Enter searches the knowledge base; the ask modifier (Shift by default)
/// asks instead
#[component]
pub fn QuickSearch() -> Element {
    let mut state = use_context::<AppState>();
    let ask_modifier = state.settings.peek().ask_modifier;
    let mut search = use_signal(|| QuickSearchModel::new(ask_modifier));
    let value = search.read().value().to_string();

    let handle_keydown = move |evt: Event<KeyboardData>| {
        let route = search.write().handle_key(&key_press(&evt));
        if let Some(route) = route {
            state.navigate(&route.path());
        }
    };

    rsx! {
        div {
            class: "quick-search",
            style: "position: relative; width: 100%; max-width: 360px;",

            input {
                r#type: "search",
                placeholder: PLACEHOLDER,
                "aria-label": ARIA_LABEL,
                value: "{value}",
                oninput: move |evt| search.write().set_value(evt.value()),
                onkeydown: handle_keydown,
                style: "
                    width: 100%;
                    padding: 6px 10px;
                    border: 1px solid #d0d7de;
                    border-radius: 6px;
                    font-size: 14px;
                    outline: none;
                ",
            }
        }
    }
}
