//! Client-side routes and the search route wire format.
//!
//! The search route is `/search?q=<percent-encoded query>&mode=<search|ask>`.
//! `mode` is always the literal `search` or `ask`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SEARCH_PATH: &str = "/search";

/// How the knowledge base should answer a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Ranked search results
    #[default]
    Search,
    /// Generated answer
    Ask,
}

impl SearchMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Ask => "ask",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "search" => Ok(Self::Search),
            "ask" => Ok(Self::Ask),
            other => Err(Error::InvalidSearchMode(other.to_string())),
        }
    }
}

/// A search or ask request carried in the URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRoute {
    /// Raw query, exactly as typed
    pub query: String,
    pub mode: SearchMode,
}

impl SearchRoute {
    #[must_use]
    pub fn new(query: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            query: query.into(),
            mode,
        }
    }

    /// Render the navigation target for this request
    ///
    /// ```
    /// use nook_core::{SearchMode, SearchRoute};
    ///
    /// let route = SearchRoute::new("hello world", SearchMode::Ask);
    /// assert_eq!(route.path(), "/search?q=hello%20world&mode=ask");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "{SEARCH_PATH}?q={}&mode={}",
            urlencoding::encode(&self.query),
            self.mode
        )
    }
}

/// Every page the application can navigate to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Sources,
    #[default]
    Notebooks,
    /// Search page, optionally with a pending request
    Search {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request: Option<SearchRoute>,
    },
    Podcasts,
    Models,
    Transformations,
    Settings,
    Advanced,
}

impl Route {
    /// Parse a navigation target such as `/podcasts` or
    /// `/search?q=rust&mode=ask`.
    pub fn parse(target: &str) -> Result<Self> {
        let (path, query_string) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        let route = match path {
            "/sources" => Self::Sources,
            "/notebooks" | "/" => Self::Notebooks,
            SEARCH_PATH => {
                return Ok(Self::Search {
                    request: query_string.map(parse_search_query).transpose()?.flatten(),
                });
            }
            "/podcasts" => Self::Podcasts,
            "/models" => Self::Models,
            "/transformations" => Self::Transformations,
            "/settings" => Self::Settings,
            "/advanced" => Self::Advanced,
            _ => return Err(Error::InvalidRoute(target.to_string())),
        };

        if query_string.is_some_and(|q| !q.is_empty()) {
            return Err(Error::InvalidRoute(target.to_string()));
        }
        Ok(route)
    }

    /// Render this route as a navigation target
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Search {
                request: Some(request),
            } => request.path(),
            Self::Search { request: None } => SEARCH_PATH.to_string(),
            other => other.static_path().to_string(),
        }
    }

    /// Human-readable page title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Sources => "Sources",
            Self::Notebooks => "Notebooks",
            Self::Search { .. } => "Ask and Search",
            Self::Podcasts => "Podcasts",
            Self::Models => "Models",
            Self::Transformations => "Transformations",
            Self::Settings => "Settings",
            Self::Advanced => "Advanced",
        }
    }

    const fn static_path(&self) -> &'static str {
        match self {
            Self::Sources => "/sources",
            Self::Notebooks => "/notebooks",
            Self::Search { .. } => SEARCH_PATH,
            Self::Podcasts => "/podcasts",
            Self::Models => "/models",
            Self::Transformations => "/transformations",
            Self::Settings => "/settings",
            Self::Advanced => "/advanced",
        }
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Decode `q` and `mode` from a search query string.
///
/// A missing `q` means a bare search page; a missing `mode` means `search`.
fn parse_search_query(query_string: &str) -> Result<Option<SearchRoute>> {
    let mut query = None;
    let mut mode = SearchMode::default();

    for (name, value) in url::form_urlencoded::parse(query_string.as_bytes()) {
        match name.as_ref() {
            "q" => query = Some(value.into_owned()),
            "mode" => mode = value.parse()?,
            _ => {}
        }
    }

    Ok(query.map(|query| SearchRoute { query, mode }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn search_route_encodes_query() {
        assert_eq!(
            SearchRoute::new("xyzzy", SearchMode::Search).path(),
            "/search?q=xyzzy&mode=search"
        );
        assert_eq!(
            SearchRoute::new("a&b=c?", SearchMode::Ask).path(),
            "/search?q=a%26b%3Dc%3F&mode=ask"
        );
    }

    #[test]
    fn search_route_keeps_surrounding_whitespace() {
        assert_eq!(
            SearchRoute::new(" rust ", SearchMode::Search).path(),
            "/search?q=%20rust%20&mode=search"
        );
    }

    #[test]
    fn parse_decodes_search_request() {
        let route = Route::parse("/search?q=hello%20world&mode=ask").unwrap();
        assert_eq!(
            route,
            Route::Search {
                request: Some(SearchRoute::new("hello world", SearchMode::Ask)),
            }
        );
        assert_eq!(route.path(), "/search?q=hello%20world&mode=ask");
    }

    #[test]
    fn parse_defaults_mode_and_allows_bare_search() {
        assert_eq!(
            Route::parse("/search?q=notes").unwrap(),
            Route::Search {
                request: Some(SearchRoute::new("notes", SearchMode::Search)),
            }
        );
        assert_eq!(
            Route::parse("/search").unwrap(),
            Route::Search { request: None }
        );
    }

    #[test]
    fn parse_accepts_form_encoded_pairs() {
        assert_eq!(
            Route::parse("/search?mode=ask&q=rust+traits&page=2").unwrap(),
            Route::Search {
                request: Some(SearchRoute::new("rust traits", SearchMode::Ask)),
            }
        );
        assert_eq!(
            Route::parse("/search?%71=caf%C3%A9").unwrap(),
            Route::Search {
                request: Some(SearchRoute::new("caf\u{e9}", SearchMode::Search)),
            }
        );
    }

    #[test]
    fn search_route_escapes_reserved_punctuation() {
        let route = SearchRoute::new("it's (ok)!", SearchMode::Search);
        assert_eq!(route.path(), "/search?q=it%27s%20%28ok%29%21&mode=search");
        assert_eq!(
            Route::parse(&route.path()).unwrap(),
            Route::Search {
                request: Some(route),
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_mode() {
        let error = Route::parse("/search?q=x&mode=shout").unwrap_err();
        assert!(matches!(error, Error::InvalidSearchMode(mode) if mode == "shout"));
    }

    #[test]
    fn parse_rejects_unknown_paths() {
        assert!(matches!(
            Route::parse("/nowhere"),
            Err(Error::InvalidRoute(_))
        ));
        assert!(matches!(
            Route::parse("/podcasts?q=1"),
            Err(Error::InvalidRoute(_))
        ));
    }

    #[test]
    fn static_routes_round_trip() {
        for path in [
            "/sources",
            "/notebooks",
            "/search",
            "/podcasts",
            "/models",
            "/transformations",
            "/settings",
            "/advanced",
        ] {
            assert_eq!(Route::parse(path).unwrap().path(), path);
        }
        assert_eq!(Route::parse("/settings/").unwrap(), Route::Settings);
    }
}
