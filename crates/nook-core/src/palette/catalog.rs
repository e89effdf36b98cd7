//! Static command catalog and substring matching

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::normalize_query;

/// Kind of object a creation command makes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateKind {
    Source,
    Notebook,
    Podcast,
}

impl CreateKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Notebook => "notebook",
            Self::Podcast => "podcast",
        }
    }
}

impl fmt::Display for CreateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What selecting a command does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    /// Navigate to a fixed path
    NavigateTo(&'static str),
    /// Invoke the creation callback for a kind
    Create(CreateKind),
}

/// Presentation group of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    Navigation,
    Create,
}

impl CommandGroup {
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Create => "Create",
        }
    }
}

/// A catalog command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub target: CommandTarget,
    /// Extra match terms, stored lower-case
    pub keywords: &'static [&'static str],
}

impl CommandEntry {
    #[must_use]
    pub const fn navigate(
        name: &'static str,
        path: &'static str,
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            target: CommandTarget::NavigateTo(path),
            keywords,
        }
    }

    #[must_use]
    pub const fn create(name: &'static str, kind: CreateKind) -> Self {
        Self {
            name,
            target: CommandTarget::Create(kind),
            keywords: &[],
        }
    }

    #[must_use]
    pub const fn group(&self) -> CommandGroup {
        match self.target {
            CommandTarget::NavigateTo(_) => CommandGroup::Navigation,
            CommandTarget::Create(_) => CommandGroup::Create,
        }
    }

    /// Check an already-normalized needle against the name and keywords.
    ///
    /// Plain substring search, no word boundaries: `"ai"` matches any
    /// keyword containing those two letters.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.keywords.iter().any(|keyword| keyword.contains(needle))
    }
}

/// Builtin commands, in presentation order
pub static BUILTIN_COMMANDS: [CommandEntry; 11] = [
    CommandEntry::navigate("Sources", "/sources", &["files", "documents", "upload"]),
    CommandEntry::navigate("Notebooks", "/notebooks", &["notes", "research", "projects"]),
    CommandEntry::navigate("Ask and Search", "/search", &["find", "query"]),
    CommandEntry::navigate("Podcasts", "/podcasts", &["audio", "episodes", "generate"]),
    CommandEntry::navigate(
        "Models",
        "/models",
        &["ai", "llm", "providers", "openai", "anthropic"],
    ),
    CommandEntry::navigate(
        "Transformations",
        "/transformations",
        &["prompts", "templates", "actions"],
    ),
    CommandEntry::navigate("Settings", "/settings", &["preferences", "config", "options"]),
    CommandEntry::navigate("Advanced", "/advanced", &["debug", "system", "tools"]),
    CommandEntry::create("Create Source", CreateKind::Source),
    CommandEntry::create("Create Notebook", CreateKind::Notebook),
    CommandEntry::create("Create Podcast", CreateKind::Podcast),
];

/// The builtin catalog as a slice
#[must_use]
pub fn builtin() -> &'static [CommandEntry] {
    &BUILTIN_COMMANDS
}

/// Entries whose name or keywords contain the query.
///
/// A blank query matches nothing.
pub fn matching_entries<'c>(
    query: &str,
    catalog: &'c [CommandEntry],
) -> impl Iterator<Item = &'c CommandEntry> {
    let needle = normalize_query(query);
    catalog
        .iter()
        .filter(move |entry| needle.as_deref().is_some_and(|needle| entry.matches(needle)))
}

/// Whether the query matches any catalog command
#[must_use]
pub fn has_command_match(query: &str, catalog: &[CommandEntry]) -> bool {
    matching_entries(query, catalog).next().is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(query: &str) -> Vec<&'static str> {
        matching_entries(query, builtin())
            .map(|entry| entry.name)
            .collect()
    }

    #[test]
    fn pod_matches_podcasts_and_create_podcast() {
        assert_eq!(names("pod"), vec!["Podcasts", "Create Podcast"]);
    }

    #[test]
    fn matching_trims_and_ignores_case() {
        assert_eq!(names("  NOTEBOOK "), vec!["Notebooks", "Create Notebook"]);
    }

    #[test]
    fn keywords_match_by_substring() {
        assert_eq!(names("upload"), vec!["Sources"]);
        assert_eq!(names("llm"), vec!["Models"]);
        assert_eq!(names("ai"), vec!["Models"]);
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert!(!has_command_match("", builtin()));
        assert!(!has_command_match("   ", builtin()));
    }

    #[test]
    fn unknown_query_has_no_match() {
        assert!(!has_command_match("xyzzy", builtin()));
        assert!(has_command_match("create", builtin()));
    }

    #[test]
    fn match_holds_for_every_name_and_keyword() {
        for entry in builtin() {
            assert!(has_command_match(entry.name, builtin()), "{}", entry.name);
            for keyword in entry.keywords {
                assert!(has_command_match(keyword, builtin()), "{keyword}");
                assert_eq!(keyword.to_lowercase(), *keyword);
            }
        }
    }

    #[test]
    fn groups_follow_targets() {
        let create = builtin()
            .iter()
            .filter(|entry| entry.group() == CommandGroup::Create)
            .count();
        assert_eq!(create, 3);
        assert_eq!(
            builtin()[3].target,
            CommandTarget::NavigateTo("/podcasts")
        );
    }
}
