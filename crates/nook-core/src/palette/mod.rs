//! Command palette: catalog, matching, layout, state machine and dispatch.
//!
//! Matching is a pure function of the query and the catalog. The state
//! machine owns the query; activating a row closes the palette and hands back
//! a [`PaletteAction`] for the caller to perform on the next tick.

pub mod catalog;
mod dispatch;
mod layout;
mod state;

pub use catalog::{
    builtin, has_command_match, matching_entries, CommandEntry, CommandGroup, CommandTarget,
    CreateKind, BUILTIN_COMMANDS,
};
pub use dispatch::{CreateCallback, CreateCallbacks, DeferredActions, Navigator, PaletteAction};
pub use layout::{FallbackPlacement, PaletteItem, PaletteLayout, PaletteSection};
pub use state::{CommandPalette, PaletteState};
