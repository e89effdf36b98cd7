//! Notice shown after a creation command

use dioxus::prelude::*;

use crate::state::AppState;

/// Banner acknowledging the pending creation request
#[component]
pub fn CreateNotice() -> Element {
    let mut state = use_context::<AppState>();
    let Some(kind) = (state.create_request)() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "create-notice",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 10px 16px;
                background: #ddf4ff;
                border-bottom: 1px solid #54aeff;
                font-size: 14px;
            ",
            span { "New {kind} requested" }
            button {
                onclick: move |_| state.create_request.set(None),
                "Dismiss"
            }
        }
    }
}
