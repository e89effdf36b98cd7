//! Page views, one per route

mod page;

pub use page::Page;
