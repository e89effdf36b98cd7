//! nook-core - Core library for Nook
//!
//! This crate contains the command catalog, query matching, palette state
//! machine, dispatch plumbing and search route codec shared by the desktop
//! shell and the CLI. It has no UI dependency.

pub mod config;
pub mod error;
pub mod keys;
pub mod palette;
pub mod route;
pub mod search;
mod util;

pub use error::{Error, Result};
pub use palette::{CommandPalette, PaletteAction};
pub use route::{Route, SearchMode, SearchRoute};
pub use search::QuickSearch;
