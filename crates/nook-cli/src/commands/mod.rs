pub mod common;
pub mod completions;
pub mod palette;
pub mod route;
pub mod search;
pub mod settings;
