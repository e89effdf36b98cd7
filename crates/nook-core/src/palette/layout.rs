//! Palette presentation: which items are listed, in which groups and order

use crate::route::SearchMode;
use crate::util::{has_text, normalize_query};

use super::catalog::{CommandEntry, CommandGroup};

const EMPTY_MESSAGE: &str = "No commands found.";

/// A selectable palette row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteItem<'c> {
    Command(&'c CommandEntry),
    /// Search or ask the knowledge base with the current query
    Fallback(SearchMode),
}

impl PaletteItem<'_> {
    /// Row text for the given raw query
    #[must_use]
    pub fn label(&self, query: &str) -> String {
        match self {
            Self::Command(entry) => entry.name.to_string(),
            Self::Fallback(SearchMode::Search) => format!("Search for \u{201c}{query}\u{201d}"),
            Self::Fallback(SearchMode::Ask) => format!("Ask about \u{201c}{query}\u{201d}"),
        }
    }
}

/// Where the search/ask group sits relative to catalog groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPlacement {
    /// Above all catalog groups: nothing in the catalog matched
    Top,
    /// Below all catalog groups, after a separator
    Bottom,
}

/// A headed group of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSection<'c> {
    pub heading: &'static str,
    /// Draw a separator above this section
    pub separated: bool,
    pub items: Vec<PaletteItem<'c>>,
}

/// Everything the palette shows for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteLayout<'c> {
    pub sections: Vec<PaletteSection<'c>>,
    pub has_command_match: bool,
    /// Message for a non-empty query that matched no command
    pub empty_message: Option<&'static str>,
}

impl<'c> PaletteLayout<'c> {
    /// Lay out the palette for a raw query.
    ///
    /// A blank query lists the whole catalog without fallbacks. Otherwise only
    /// matching commands are listed and the search/ask group goes first when
    /// none matched, last when some did.
    #[must_use]
    pub fn build(query: &str, catalog: &'c [CommandEntry]) -> Self {
        let needle = normalize_query(query);
        let visible: Vec<&'c CommandEntry> = catalog
            .iter()
            .filter(|entry| needle.as_deref().map_or(true, |needle| entry.matches(needle)))
            .collect();
        let has_command_match = needle.is_some() && !visible.is_empty();

        let groups = [CommandGroup::Navigation, CommandGroup::Create]
            .into_iter()
            .filter_map(|group| {
                let items: Vec<PaletteItem<'c>> = visible
                    .iter()
                    .filter(|entry| entry.group() == group)
                    .map(|entry| PaletteItem::Command(*entry))
                    .collect();
                (!items.is_empty()).then(|| PaletteSection {
                    heading: group.heading(),
                    separated: false,
                    items,
                })
            });

        let mut sections: Vec<PaletteSection<'c>> = Vec::new();
        match fallback_placement(query, has_command_match) {
            Some(FallbackPlacement::Top) => {
                sections.push(fallback_section("Search & Ask", false));
                sections.extend(groups);
            }
            Some(FallbackPlacement::Bottom) => {
                sections.extend(groups);
                sections.push(fallback_section("Or search your knowledge base", true));
            }
            None => sections.extend(groups),
        }

        Self {
            sections,
            has_command_match,
            empty_message: (needle.is_some() && !has_command_match).then_some(EMPTY_MESSAGE),
        }
    }

    /// All rows in presentation order
    pub fn items(&self) -> impl Iterator<Item = PaletteItem<'c>> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter().copied())
    }

    /// Row at a flat index
    #[must_use]
    pub fn item(&self, index: usize) -> Option<PaletteItem<'c>> {
        self.items().nth(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the search/ask group, if shown
    #[must_use]
    pub fn fallback_placement(&self) -> Option<FallbackPlacement> {
        let index = self.sections.iter().position(|section| {
            section
                .items
                .iter()
                .any(|item| matches!(item, PaletteItem::Fallback(_)))
        })?;
        Some(if index == 0 && !self.has_command_match {
            FallbackPlacement::Top
        } else {
            FallbackPlacement::Bottom
        })
    }
}

fn fallback_placement(query: &str, has_command_match: bool) -> Option<FallbackPlacement> {
    if !has_text(query) {
        None
    } else if has_command_match {
        Some(FallbackPlacement::Bottom)
    } else {
        Some(FallbackPlacement::Top)
    }
}

fn fallback_section(heading: &'static str, separated: bool) -> PaletteSection<'static> {
    PaletteSection {
        heading,
        separated,
        items: vec![
            PaletteItem::Fallback(SearchMode::Search),
            PaletteItem::Fallback(SearchMode::Ask),
        ],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::palette::catalog::builtin;

    fn headings(layout: &PaletteLayout<'_>) -> Vec<&'static str> {
        layout.sections.iter().map(|s| s.heading).collect()
    }

    #[test]
    fn blank_query_lists_catalog_without_fallbacks() {
        let layout = PaletteLayout::build("  ", builtin());
        assert_eq!(headings(&layout), vec!["Navigation", "Create"]);
        assert_eq!(layout.len(), builtin().len());
        assert_eq!(layout.fallback_placement(), None);
        assert_eq!(layout.empty_message, None);
        assert!(!layout.has_command_match);
    }

    #[test]
    fn matching_query_puts_fallbacks_last() {
        let layout = PaletteLayout::build("pod", builtin());
        assert_eq!(
            headings(&layout),
            vec!["Navigation", "Create", "Or search your knowledge base"]
        );
        assert!(layout.sections[2].separated);
        assert_eq!(layout.fallback_placement(), Some(FallbackPlacement::Bottom));

        let labels: Vec<String> = layout.items().map(|item| item.label("pod")).collect();
        assert_eq!(
            labels,
            vec![
                "Podcasts",
                "Create Podcast",
                "Search for \u{201c}pod\u{201d}",
                "Ask about \u{201c}pod\u{201d}",
            ]
        );
    }

    #[test]
    fn unmatched_query_puts_fallbacks_first() {
        let layout = PaletteLayout::build("xyzzy", builtin());
        assert_eq!(headings(&layout), vec!["Search & Ask"]);
        assert!(!layout.sections[0].separated);
        assert_eq!(layout.fallback_placement(), Some(FallbackPlacement::Top));
        assert_eq!(layout.empty_message, Some("No commands found."));
        assert_eq!(
            layout.item(0),
            Some(PaletteItem::Fallback(SearchMode::Search))
        );
        assert_eq!(layout.item(1), Some(PaletteItem::Fallback(SearchMode::Ask)));
        assert_eq!(layout.item(2), None);
    }

    #[test]
    fn groups_without_matches_are_omitted() {
        let layout = PaletteLayout::build("debug", builtin());
        assert_eq!(
            headings(&layout),
            vec!["Navigation", "Or search your knowledge base"]
        );
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn fallback_label_keeps_raw_query() {
        let item = PaletteItem::Fallback(SearchMode::Ask);
        assert_eq!(item.label(" Rust "), "Ask about \u{201c} Rust \u{201d}");
    }
}
