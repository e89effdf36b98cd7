//! Main application component

use dioxus::prelude::*;
use nook_core::keys::KeyListeners;
use nook_core::palette::CreateKind;
use nook_core::Route;

use crate::components::{CommandPalette, CreateNotice, QuickSearch, Sidebar};
use crate::keyboard::key_press;
use crate::state::AppState;
use crate::views::Page;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let route = use_signal(Route::default);
    let settings = use_signal(crate::settings);
    let create_request = use_signal(|| None::<CreateKind>);
    let mut focus_home = use_signal(|| None);

    let mut state = use_context_provider(|| AppState {
        route,
        settings,
        create_request,
        focus_home,
    });
    let listeners = use_context_provider(KeyListeners::new);

    // Every key press in the window goes through the shared listeners
    let handle_keydown = move |evt: Event<KeyboardData>| {
        if listeners.dispatch(&key_press(&evt)) {
            evt.prevent_default();
        }
    };

    rsx! {
        div {
            class: "app-container",
            tabindex: "0",
            autofocus: true,
            onkeydown: handle_keydown,
            onmounted: move |evt: MountedEvent| focus_home.set(Some(evt.data())),
            style: "
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                outline: none;
                font-family: system-ui, -apple-system, sans-serif;
                background: #ffffff;
                color: #1f2328;
            ",

            header {
                class: "toolbar",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 12px;
                    padding: 10px 16px;
                    border-bottom: 1px solid #d0d7de;
                ",
                strong { "Nook" }
                div { style: "flex: 1;" }
                QuickSearch {}
            }

            CreateNotice {}

            div {
                class: "content-area",
                style: "flex: 1; display: flex; overflow: hidden;",

                Sidebar {}
                Page {}
            }

            CommandPalette {
                on_create_source: move |()| state.request_create(CreateKind::Source),
                on_create_notebook: move |()| state.request_create(CreateKind::Notebook),
                on_create_podcast: move |()| state.request_create(CreateKind::Podcast),
            }
        }
    }
}
