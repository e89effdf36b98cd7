//! Command palette state machine
//!
//! `Closed --toggle--> Open`, `Open --toggle|dismiss--> Closed` and
//! `Open --activate--> Closed`. Entering `Closed` always clears the query.

use crate::keys::{Key, KeyPress};
use crate::route::SearchRoute;
use crate::util::has_text;

use super::catalog::{self, CommandEntry, CommandTarget};
use super::dispatch::PaletteAction;
use super::layout::{PaletteItem, PaletteLayout};

/// Visibility of the palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaletteState {
    #[default]
    Closed,
    Open,
}

impl PaletteState {
    /// True when going from `previous` to `self` closed the palette
    #[must_use]
    pub const fn closed_from(self, previous: Self) -> bool {
        matches!((previous, self), (Self::Open, Self::Closed))
    }
}

/// Palette over a fixed catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPalette<'c> {
    catalog: &'c [CommandEntry],
    state: PaletteState,
    query: String,
    selected: usize,
}

impl CommandPalette<'static> {
    /// Palette over the builtin catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(catalog::builtin())
    }
}

impl Default for CommandPalette<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'c> CommandPalette<'c> {
    #[must_use]
    pub const fn new(catalog: &'c [CommandEntry]) -> Self {
        Self {
            catalog,
            state: PaletteState::Closed,
            query: String::new(),
            selected: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> PaletteState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == PaletteState::Open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Flat index of the highlighted row
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c [CommandEntry] {
        self.catalog
    }

    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.state = PaletteState::Open;
        self.selected = 0;
        tracing::debug!("Command palette opened");
    }

    /// Close without dispatching anything
    pub fn dismiss(&mut self) {
        if !self.is_open() {
            return;
        }
        self.close();
        tracing::debug!("Command palette dismissed");
    }

    /// Flip between open and closed; bound to the palette chord
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.dismiss();
        } else {
            self.open();
        }
    }

    /// Replace the query with the current input text. Ignored while closed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        self.query = query.into();
        self.selected = 0;
    }

    /// Rows for the current query
    #[must_use]
    pub fn layout(&self) -> PaletteLayout<'c> {
        PaletteLayout::build(&self.query, self.catalog)
    }

    pub fn select_next(&mut self) {
        let last = self.layout().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Highlight a row directly, e.g. on hover
    pub fn select(&mut self, index: usize) {
        if index < self.layout().len() {
            self.selected = index;
        }
    }

    /// Activate a row.
    ///
    /// The palette is closed and the query cleared before the action is
    /// handed back, so the caller performs it against a closed palette.
    /// Search and ask rows do nothing for a blank query and leave the palette
    /// open.
    pub fn activate(&mut self, item: PaletteItem<'_>) -> Option<PaletteAction> {
        if !self.is_open() {
            return None;
        }

        let action = match item {
            PaletteItem::Command(entry) => match entry.target {
                CommandTarget::NavigateTo(path) => PaletteAction::Navigate(path.to_string()),
                CommandTarget::Create(kind) => PaletteAction::Create(kind),
            },
            PaletteItem::Fallback(mode) => {
                if !has_text(&self.query) {
                    return None;
                }
                PaletteAction::Navigate(SearchRoute::new(self.query.clone(), mode).path())
            }
        };

        self.close();
        tracing::debug!(%action, "Command palette closed for dispatch");
        Some(action)
    }

    /// Activate the highlighted row
    pub fn activate_selected(&mut self) -> Option<PaletteAction> {
        let item = self.layout().item(self.selected)?;
        self.activate(item)
    }

    /// Handle navigation keys typed into the palette input.
    ///
    /// Returns the action to perform when Enter activated a row.
    pub fn handle_key(&mut self, press: &KeyPress) -> Option<PaletteAction> {
        if !self.is_open() {
            return None;
        }
        match press.key {
            Key::ArrowDown => self.select_next(),
            Key::ArrowUp => self.select_previous(),
            Key::Enter => return self.activate_selected(),
            Key::Escape => self.dismiss(),
            Key::Character(_) | Key::Other => {}
        }
        None
    }

    fn close(&mut self) {
        self.state = PaletteState::Closed;
        self.query.clear();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::keys::Modifiers;
    use crate::palette::catalog::CreateKind;
    use crate::palette::dispatch::{CreateCallbacks, DeferredActions};
    use crate::route::SearchMode;

    fn press(key: Key) -> KeyPress {
        KeyPress::new(key, Modifiers::NONE)
    }

    fn open_with(query: &str) -> CommandPalette<'static> {
        let mut palette = CommandPalette::builtin();
        palette.open();
        palette.set_query(query);
        palette
    }

    #[test]
    fn open_then_close_leaves_initial_state() {
        let mut palette = CommandPalette::builtin();
        palette.toggle();
        assert!(palette.is_open());
        palette.set_query("pod");
        palette.toggle();

        assert_eq!(palette, CommandPalette::builtin());
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn query_is_ignored_while_closed() {
        let mut palette = CommandPalette::builtin();
        palette.set_query("pod");
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn opening_twice_keeps_query() {
        let mut palette = open_with("mod");
        palette.open();
        assert_eq!(palette.query(), "mod");
    }

    #[test]
    fn navigation_entry_closes_then_navigates() {
        let mut palette = open_with("pod");
        let action = palette.activate_selected();

        assert_eq!(action, Some(PaletteAction::Navigate("/podcasts".to_string())));
        assert_eq!(palette.state(), PaletteState::Closed);
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn create_entry_yields_create_action() {
        let mut palette = open_with("pod");
        palette.select_next();
        assert_eq!(
            palette.activate_selected(),
            Some(PaletteAction::Create(CreateKind::Podcast))
        );
        assert!(!palette.is_open());
    }

    #[test]
    fn unmatched_query_searches_with_raw_text() {
        let mut palette = open_with("xyzzy");
        assert_eq!(
            palette.activate_selected(),
            Some(PaletteAction::Navigate(
                "/search?q=xyzzy&mode=search".to_string()
            ))
        );
    }

    #[test]
    fn ask_fallback_uses_ask_mode() {
        let mut palette = open_with("what is rust");
        assert_eq!(
            palette.activate(PaletteItem::Fallback(SearchMode::Ask)),
            Some(PaletteAction::Navigate(
                "/search?q=what%20is%20rust&mode=ask".to_string()
            ))
        );
    }

    #[test]
    fn blank_query_disables_fallbacks() {
        let mut palette = open_with("   ");
        assert_eq!(
            palette.activate(PaletteItem::Fallback(SearchMode::Search)),
            None
        );
        assert!(palette.is_open());
        assert_eq!(palette.query(), "   ");
    }

    #[test]
    fn closed_palette_activates_nothing() {
        let mut palette = CommandPalette::builtin();
        assert_eq!(palette.activate_selected(), None);
        assert_eq!(palette.handle_key(&press(Key::Enter)), None);
    }

    #[test]
    fn selection_is_clamped_and_reset_by_typing() {
        let mut palette = open_with("pod");
        palette.select_previous();
        assert_eq!(palette.selected(), 0);
        for _ in 0..10 {
            palette.handle_key(&press(Key::ArrowDown));
        }
        assert_eq!(palette.selected(), 3);
        palette.handle_key(&press(Key::ArrowUp));
        assert_eq!(palette.selected(), 2);

        palette.set_query("podc");
        assert_eq!(palette.selected(), 0);

        palette.select(99);
        assert_eq!(palette.selected(), 0);
        palette.select(1);
        assert_eq!(palette.selected(), 1);
    }

    #[test]
    fn enter_and_escape_drive_the_state_machine() {
        let mut palette = open_with("settings");
        assert_eq!(
            palette.handle_key(&press(Key::Enter)),
            Some(PaletteAction::Navigate("/settings".to_string()))
        );

        let mut palette = open_with("settings");
        assert_eq!(palette.handle_key(&press(Key::Escape)), None);
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn keyboard_closes_are_reported_as_closing() {
        let closers: [fn(&mut CommandPalette<'static>); 4] = [
            |palette| {
                palette.handle_key(&press(Key::Escape));
            },
            |palette| {
                palette.handle_key(&press(Key::Enter));
            },
            |palette| {
                palette.activate_selected();
            },
            CommandPalette::toggle,
        ];

        for close in closers {
            let mut palette = open_with("pod");
            let before = palette.state();
            close(&mut palette);
            assert!(palette.state().closed_from(before));

            let before = palette.state();
            palette.toggle();
            assert!(!palette.state().closed_from(before));
            assert!(palette.is_open());
        }
    }

    #[test]
    fn staying_open_is_not_a_close() {
        let mut palette = open_with("pod");
        let before = palette.state();
        palette.handle_key(&press(Key::ArrowDown));
        palette.set_query("podc");
        assert!(!palette.state().closed_from(before));
        assert!(!PaletteState::Closed.closed_from(PaletteState::Closed));
    }

    #[test]
    fn every_selection_dispatches_exactly_once() {
        let total = CommandPalette::builtin().catalog().len();
        for index in 0..total {
            let mut palette = CommandPalette::builtin();
            palette.open();
            palette.select(index);

            let mut deferred = DeferredActions::new();
            deferred.schedule(palette.activate_selected().expect("entry should dispatch"));
            assert!(!palette.is_open());
            assert_eq!(palette.query(), "");

            let mut navigations = 0;
            let created = std::rc::Rc::new(std::cell::Cell::new(0));
            let mut callbacks = CreateCallbacks::new();
            for kind in [CreateKind::Source, CreateKind::Notebook, CreateKind::Podcast] {
                let created = std::rc::Rc::clone(&created);
                callbacks = callbacks.with(kind, move || created.set(created.get() + 1));
            }
            let mut navigator = |_: &str| navigations += 1;
            assert_eq!(deferred.run_pending(&mut navigator, &mut callbacks), 1);
            assert_eq!(navigations + created.get(), 1);
        }
    }
}
