use nook_core::config::Settings;
use nook_core::keys::{Key, KeyPress, Modifiers};
use nook_core::QuickSearch;

use crate::error::CliError;

/// Build the search route the quick search box would navigate to
pub fn run_search(query: &str, ask: bool, settings: &Settings) -> Result<String, CliError> {
    let mut search = QuickSearch::new(settings.ask_modifier);
    search.set_value(query);

    let modifiers = if ask {
        Modifiers::only(settings.ask_modifier)
    } else {
        Modifiers::NONE
    };
    search
        .handle_key(&KeyPress::new(Key::Enter, modifiers))
        .map(|route| route.path())
        .ok_or(CliError::EmptySearchQuery)
}
