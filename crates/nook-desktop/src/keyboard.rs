//! Bridge between Dioxus keyboard events and the app-wide key listeners

use std::rc::Rc;

use dioxus::prelude::*;
use nook_core::keys::{self, KeyListeners, KeyPress};

/// Convert a Dioxus keyboard event into a toolkit-independent key press
pub fn key_press(evt: &Event<KeyboardData>) -> KeyPress {
    let key = match evt.key() {
        Key::Character(text) => keys::Key::Character(text),
        Key::Enter => keys::Key::Enter,
        Key::Escape => keys::Key::Escape,
        Key::ArrowUp => keys::Key::ArrowUp,
        Key::ArrowDown => keys::Key::ArrowDown,
        _ => keys::Key::Other,
    };
    let modifiers = evt.modifiers();

    KeyPress::new(
        key,
        keys::Modifiers {
            ctrl: modifiers.ctrl(),
            meta: modifiers.meta(),
            alt: modifiers.alt(),
            shift: modifiers.shift(),
        },
    )
}

/// Listen to every key press in the app while the calling component is
/// mounted. The subscription is released when the component unmounts.
pub fn use_key_listener(listener: impl FnMut(&KeyPress) -> bool + 'static) {
    let listeners = use_context::<KeyListeners>();
    use_hook(move || Rc::new(listeners.subscribe(listener)));
}
