//! UI Components
//!
//! Command surfaces and small widgets for the desktop application.

mod command_palette;
mod create_notice;
mod quick_search;
mod sidebar;

pub use command_palette::CommandPalette;
pub use create_notice::CreateNotice;
pub use quick_search::QuickSearch;
pub use sidebar::Sidebar;
