//! Quick search box: a single field that submits on Enter

use crate::keys::{Key, KeyPress, Modifier};
use crate::route::{SearchMode, SearchRoute};
use crate::util::has_text;

/// Input placeholder
pub const PLACEHOLDER: &str = "Search... (\u{21e7} for Ask)";

/// Accessible label for the input
pub const ARIA_LABEL: &str = "Global search - press Enter to search, Shift+Enter to ask";

/// State of the quick search field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSearch {
    value: String,
    ask_modifier: Modifier,
}

impl Default for QuickSearch {
    fn default() -> Self {
        Self::new(Modifier::Shift)
    }
}

impl QuickSearch {
    /// Empty field; holding `ask_modifier` on submit asks instead of searching
    #[must_use]
    pub const fn new(ask_modifier: Modifier) -> Self {
        Self {
            value: String::new(),
            ask_modifier,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub const fn ask_modifier(&self) -> Modifier {
        self.ask_modifier
    }

    /// React to a key press in the field.
    ///
    /// Enter on a non-blank field returns the route to navigate to and
    /// clears the field. Every other key, and Enter on a blank field, does
    /// nothing.
    pub fn handle_key(&mut self, press: &KeyPress) -> Option<SearchRoute> {
        if press.key != Key::Enter {
            return None;
        }
        let mode = if press.modifiers.holds(self.ask_modifier) {
            SearchMode::Ask
        } else {
            SearchMode::Search
        };
        self.submit(mode)
    }

    /// Submit the field in the given mode; blank fields submit nothing
    pub fn submit(&mut self, mode: SearchMode) -> Option<SearchRoute> {
        if !has_text(&self.value) {
            return None;
        }
        let route = SearchRoute::new(std::mem::take(&mut self.value), mode);
        tracing::debug!(mode = %route.mode, "Quick search submitted");
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::keys::Modifiers;

    fn enter(modifiers: Modifiers) -> KeyPress {
        KeyPress::new(Key::Enter, modifiers)
    }

    #[test]
    fn shift_enter_asks_and_clears_field() {
        let mut search = QuickSearch::default();
        search.set_value("hello world");

        let route = search.handle_key(&enter(Modifiers::only(Modifier::Shift)));
        assert_eq!(
            route.map(|route| route.path()).as_deref(),
            Some("/search?q=hello%20world&mode=ask")
        );
        assert_eq!(search.value(), "");
    }

    #[test]
    fn plain_enter_searches() {
        let mut search = QuickSearch::default();
        search.set_value("rust ownership");
        let route = search.handle_key(&enter(Modifiers::NONE)).unwrap();
        assert_eq!(route, SearchRoute::new("rust ownership", SearchMode::Search));
    }

    #[test]
    fn blank_field_never_dispatches() {
        let mut search = QuickSearch::default();
        assert_eq!(search.handle_key(&enter(Modifiers::NONE)), None);

        search.set_value("   ");
        assert_eq!(search.handle_key(&enter(Modifiers::only(Modifier::Shift))), None);
        assert_eq!(search.value(), "   ");
    }

    #[test]
    fn other_keys_leave_field_alone() {
        let mut search = QuickSearch::default();
        search.set_value("notes");
        assert_eq!(
            search.handle_key(&KeyPress::character("a", Modifiers::NONE)),
            None
        );
        assert_eq!(search.handle_key(&KeyPress::new(Key::Escape, Modifiers::NONE)), None);
        assert_eq!(search.value(), "notes");
    }

    #[test]
    fn ask_modifier_is_configurable() {
        let mut search = QuickSearch::new(Modifier::Alt);
        search.set_value("q");
        let route = search
            .handle_key(&enter(Modifiers::only(Modifier::Shift)))
            .unwrap();
        assert_eq!(route.mode, SearchMode::Search);

        search.set_value("q");
        let route = search
            .handle_key(&enter(Modifiers::only(Modifier::Alt)))
            .unwrap();
        assert_eq!(route.mode, SearchMode::Ask);
    }

    #[test]
    fn query_is_passed_verbatim() {
        let mut search = QuickSearch::default();
        search.set_value("  spaced  ");
        let route = search.submit(SearchMode::Search).unwrap();
        assert_eq!(route.query, "  spaced  ");
    }
}
