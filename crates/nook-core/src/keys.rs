//! Keyboard model: key presses, shortcut chords and the app-wide listener
//! registry.
//!
//! The UI shell converts its native keyboard events into [`KeyPress`] values
//! so that shortcut recognition and the palette/quick search handlers stay
//! independent of any toolkit.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Logical key of a keyboard event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A printable key, as produced by the keyboard layout (`"k"`, `"K"`)
    Character(String),
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    /// Any key the command surfaces do not react to
    Other,
}

/// A single modifier key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Meta,
    Alt,
    Shift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ctrl => "Ctrl",
            Self::Meta => "Cmd",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
        };
        f.write_str(name)
    }
}

/// Modifier state held during a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };

    /// Modifier state with exactly one key held
    #[must_use]
    pub const fn only(modifier: Modifier) -> Self {
        let mut modifiers = Self::NONE;
        match modifier {
            Modifier::Ctrl => modifiers.ctrl = true,
            Modifier::Meta => modifiers.meta = true,
            Modifier::Alt => modifiers.alt = true,
            Modifier::Shift => modifiers.shift = true,
        }
        modifiers
    }

    /// Whether the given modifier is held
    #[must_use]
    pub const fn holds(self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Ctrl => self.ctrl,
            Modifier::Meta => self.meta,
            Modifier::Alt => self.alt,
            Modifier::Shift => self.shift,
        }
    }

    /// Command on macOS, Control elsewhere; either one counts
    #[must_use]
    pub const fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key event as seen by the command surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Press of a printable key
    #[must_use]
    pub fn character(text: &str, modifiers: Modifiers) -> Self {
        Self::new(Key::Character(text.to_string()), modifiers)
    }
}

/// A keyboard chord such as `Mod+K` or `Ctrl+Shift+P`
///
/// Modifiers named in the chord are required; modifiers not named are
/// ignored. `Mod` is satisfied by either Command or Control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcut {
    key: char,
    platform_command: bool,
    required: Modifiers,
}

impl Shortcut {
    /// Command/Control + K, the palette toggle
    pub const PALETTE: Self = Self {
        key: 'k',
        platform_command: true,
        required: Modifiers::NONE,
    };

    /// Check whether a key press triggers this chord
    ///
    /// The key comparison is exact, except that chords requiring Shift accept
    /// either letter case since the layout reports the shifted character.
    #[must_use]
    pub fn matches(&self, press: &KeyPress) -> bool {
        let Key::Character(text) = &press.key else {
            return false;
        };
        let mut chars = text.chars();
        let (Some(pressed), None) = (chars.next(), chars.next()) else {
            return false;
        };

        let key_matches = if self.required.shift {
            pressed.to_lowercase().eq(self.key.to_lowercase())
        } else {
            pressed == self.key
        };
        if !key_matches {
            return false;
        }

        let held = press.modifiers;
        if self.platform_command && !held.command() {
            return false;
        }
        [Modifier::Ctrl, Modifier::Meta, Modifier::Alt, Modifier::Shift]
            .into_iter()
            .filter(|m| self.required.holds(*m))
            .all(|m| held.holds(m))
    }
}

impl Default for Shortcut {
    fn default() -> Self {
        Self::PALETTE
    }
}

impl FromStr for Shortcut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidShortcut {
            shortcut: s.to_string(),
            reason: reason.to_string(),
        };

        let mut tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        let key_token = tokens.pop().unwrap_or_default();
        let mut key_chars = key_token.chars();
        let key = match (key_chars.next(), key_chars.next()) {
            (Some(c), None) if !c.is_whitespace() => c.to_ascii_lowercase(),
            (None, _) => return Err(invalid("missing key")),
            _ => return Err(invalid("key must be a single character")),
        };

        let mut shortcut = Self {
            key,
            platform_command: false,
            required: Modifiers::NONE,
        };
        for token in tokens {
            match token.to_ascii_lowercase().as_str() {
                "mod" | "cmdorctrl" => shortcut.platform_command = true,
                "ctrl" | "control" => shortcut.required.ctrl = true,
                "cmd" | "command" | "meta" | "super" => shortcut.required.meta = true,
                "alt" | "option" => shortcut.required.alt = true,
                "shift" => shortcut.required.shift = true,
                "" => return Err(invalid("empty modifier")),
                other => return Err(invalid(&format!("unknown modifier '{other}'"))),
            }
        }

        if !shortcut.platform_command && shortcut.required == Modifiers::NONE {
            return Err(invalid("at least one modifier is required"));
        }
        Ok(shortcut)
    }
}

impl TryFrom<String> for Shortcut {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Shortcut> for String {
    fn from(value: Shortcut) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.platform_command {
            f.write_str("Mod+")?;
        }
        for modifier in [Modifier::Ctrl, Modifier::Meta, Modifier::Alt, Modifier::Shift] {
            if self.required.holds(modifier) {
                write!(f, "{modifier}+")?;
            }
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

type Listener = Box<dyn FnMut(&KeyPress) -> bool>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Application-wide key listener registry
///
/// The shell feeds every key event through [`KeyListeners::dispatch`].
/// Components subscribe while mounted and keep the returned
/// [`KeySubscription`]; dropping it removes the listener.
///
/// Listeners must not subscribe or drop subscriptions while being called.
#[derive(Clone, Default)]
pub struct KeyListeners {
    inner: Rc<RefCell<Registry>>,
}

impl KeyListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It returns `true` when it consumed the event.
    pub fn subscribe(&self, listener: impl FnMut(&KeyPress) -> bool + 'static) -> KeySubscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));
        tracing::debug!(id, "Key listener registered");

        KeySubscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Offer a key press to listeners in registration order.
    ///
    /// Returns `true` when a listener consumed it; the caller should then
    /// suppress the event's default action.
    pub fn dispatch(&self, press: &KeyPress) -> bool {
        let mut registry = self.inner.borrow_mut();
        registry
            .listeners
            .iter_mut()
            .any(|(_, listener)| listener(press))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for a registered key listener; deregisters on drop
#[must_use = "dropping the subscription removes the listener"]
pub struct KeySubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
            tracing::debug!(id = self.id, "Key listener released");
        }
    }
}
