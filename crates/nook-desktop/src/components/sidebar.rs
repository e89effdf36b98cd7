//! Sidebar with the navigation commands

use dioxus::prelude::*;
use nook_core::palette::{builtin, CommandTarget};

use crate::state::AppState;

/// Sidebar listing every page reachable from the palette
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let route = (state.route)();
    let active_path = route.path();
    let active_path = active_path.split('?').next().unwrap_or_default().to_string();
    let shortcut = state.settings.peek().palette_shortcut;

    let pages: Vec<(&'static str, &'static str)> = builtin()
        .iter()
        .filter_map(|entry| match entry.target {
            CommandTarget::NavigateTo(path) => Some((entry.name, path)),
            CommandTarget::Create(_) => None,
        })
        .collect();

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: 200px;
                background: #f6f8fa;
                border-right: 1px solid #d0d7de;
                padding: 16px;
                overflow-y: auto;
            ",

            h2 {
                style: "
                    font-size: 14px;
                    font-weight: 600;
                    margin-bottom: 12px;
                    color: #656d76;
                ",
                "Nook"
            }

            for (name, path) in pages {
                {
                    let is_active = active_path == path;
                    rsx! {
                        NavItem {
                            key: "{path}",
                            label: name,
                            is_active: is_active,
                            onclick: move |_| {
                                let mut state = state;
                                state.navigate(path);
                            },
                        }
                    }
                }
            }

            p {
                style: "margin-top: 16px; font-size: 12px; color: #8c959f;",
                "Press {shortcut} for commands"
            }
        }
    }
}

/// Navigation item in the sidebar
#[component]
fn NavItem(label: String, is_active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let bg = if is_active { "#0969da" } else { "transparent" };
    let text_color = if is_active { "#ffffff" } else { "#1f2328" };

    rsx! {
        div {
            style: "
                padding: 8px 10px;
                border-radius: 6px;
                cursor: pointer;
                margin-bottom: 4px;
                background: {bg};
                color: {text_color};
                transition: background 0.15s;
            ",
            onclick: onclick,
            "{label}"
        }
    }
}
