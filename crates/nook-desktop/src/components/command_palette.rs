//! Command palette overlay (Cmd/Ctrl+K)

use dioxus::prelude::*;
use nook_core::keys::Key as PressKey;
use nook_core::palette::{
    CommandPalette as PaletteModel, CommandTarget, CreateCallbacks, CreateKind, PaletteAction,
    PaletteItem, PaletteState,
};

use crate::keyboard::{key_press, use_key_listener};
use crate::state::AppState;

/// Command palette, toggled by the configured shortcut from anywhere in the app
///
/// Creation commands call the matching handler; a missing handler makes the
/// command a no-op.
#[component]
pub fn CommandPalette(
    on_create_source: Option<EventHandler<()>>,
    on_create_notebook: Option<EventHandler<()>>,
    on_create_podcast: Option<EventHandler<()>>,
) -> Element {
    let state = use_context::<AppState>();
    let mut palette = use_signal(PaletteModel::builtin);
    let shortcut = state.settings.peek().palette_shortcut;

    // Closing removes the focused input, so focus goes back to the app
    // container where the shortcut listener lives.
    let mut last_state = use_signal(PaletteState::default);
    use_effect(move || {
        let current = palette.read().state();
        if current.closed_from(*last_state.peek()) {
            state.restore_focus();
        }
        last_state.set(current);
    });

    use_key_listener(move |press| {
        if shortcut.matches(press) {
            palette.write().toggle();
            true
        } else {
            false
        }
    });

    // The palette is already closed when this runs. The action itself runs on
    // a later poll of the spawned task, after the key or click handler returns.
    let dispatch = move |action: Option<PaletteAction>| {
        let Some(action) = action else {
            return;
        };
        let mut state = state;
        spawn(async move {
            tokio::task::yield_now().await;

            let mut callbacks = CreateCallbacks::new();
            for (kind, handler) in [
                (CreateKind::Source, on_create_source),
                (CreateKind::Notebook, on_create_notebook),
                (CreateKind::Podcast, on_create_podcast),
            ] {
                if let Some(handler) = handler {
                    callbacks = callbacks.with(kind, move || handler.call(()));
                }
            }
            action.perform(&mut |path: &str| state.navigate(path), &mut callbacks);
        });
    };

    let snapshot = palette.read().clone();
    if !snapshot.is_open() {
        return rsx! {};
    }

    let query = snapshot.query().to_string();
    let selected = snapshot.selected();
    let layout = snapshot.layout();
    let empty_message = layout.empty_message.unwrap_or_default();

    let mut start = 0;
    let sections: Vec<_> = layout
        .sections
        .into_iter()
        .map(|section| {
            let first = start;
            start += section.items.len();
            (section, first)
        })
        .collect();

    rsx! {
        div {
            class: "palette-backdrop",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                justify-content: center;
                align-items: flex-start;
                padding-top: 96px;
                background: rgba(0, 0, 0, 0.4);
                z-index: 100;
            ",
            onclick: move |_| palette.write().dismiss(),

            div {
                class: "palette-dialog",
                role: "dialog",
                "aria-label": "Command Palette",
                title: "Navigate, search, or ask your knowledge base",
                style: "
                    width: 520px;
                    max-height: 420px;
                    display: flex;
                    flex-direction: column;
                    border-radius: 10px;
                    overflow: hidden;
                    background: #ffffff;
                    color: #1f2328;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.25);
                ",
                onclick: move |evt| evt.stop_propagation(),

                input {
                    r#type: "text",
                    placeholder: "Type a command or search...",
                    value: "{query}",
                    autofocus: true,
                    style: "
                        padding: 12px 16px;
                        border: none;
                        border-bottom: 1px solid #d0d7de;
                        font-size: 15px;
                        outline: none;
                    ",
                    oninput: move |evt| palette.write().set_query(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        let press = key_press(&evt);
                        if matches!(press.key, PressKey::ArrowUp | PressKey::ArrowDown | PressKey::Enter) {
                            evt.prevent_default();
                        }
                        let action = palette.write().handle_key(&press);
                        dispatch(action);
                    },
                }

                div {
                    class: "palette-list",
                    style: "overflow-y: auto; padding: 6px 0;",

                    if !empty_message.is_empty() {
                        div {
                            style: "padding: 8px 16px; font-size: 13px; color: #656d76;",
                            "{empty_message}"
                        }
                    }

                    for (section, first) in sections {
                        if section.separated {
                            hr { style: "margin: 6px 0; border: none; border-top: 1px solid #d0d7de;" }
                        }
                        div {
                            key: "{section.heading}",
                            class: "palette-group",
                            div {
                                style: "padding: 6px 16px 2px; font-size: 11px; font-weight: 600; color: #656d76;",
                                "{section.heading}"
                            }
                            for (index, item) in section.items.into_iter().enumerate().map(move |(i, item)| (first + i, item)) {
                                PaletteRow {
                                    key: "{index}",
                                    label: item.label(&query),
                                    hint: row_hint(item),
                                    selected: index == selected,
                                    onhover: move |()| palette.write().select(index),
                                    onselect: move |()| {
                                        let action = palette.write().activate(item);
                                        dispatch(action);
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Secondary text shown at the right edge of a row
fn row_hint(item: PaletteItem<'_>) -> String {
    match item {
        PaletteItem::Command(entry) => match entry.target {
            CommandTarget::NavigateTo(path) => path.to_string(),
            CommandTarget::Create(_) => "new".to_string(),
        },
        PaletteItem::Fallback(mode) => mode.to_string(),
    }
}

#[component]
fn PaletteRow(
    label: String,
    hint: String,
    selected: bool,
    onhover: EventHandler<()>,
    onselect: EventHandler<()>,
) -> Element {
    let background = if selected { "#eaeef2" } else { "transparent" };

    rsx! {
        div {
            class: "palette-item",
            role: "option",
            "aria-selected": "{selected}",
            style: "
                display: flex;
                justify-content: space-between;
                padding: 8px 16px;
                font-size: 14px;
                cursor: pointer;
                background: {background};
            ",
            onmouseenter: move |_| onhover.call(()),
            onclick: move |_| onselect.call(()),
            span { "{label}" }
            span { style: "font-size: 12px; color: #8c959f;", "{hint}" }
        }
    }
}
