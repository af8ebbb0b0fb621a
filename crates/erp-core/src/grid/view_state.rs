//! Search and filter state carried in the URL query.
//!
//! The query string is the source of truth for a table's search text and
//! column filters, so they survive navigation and reload and can be shared
//! as a link. Sort order and view-mode toggles are not part of it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::column::Column;

/// Query parameter holding the free-text search term.
pub const SEARCH_PARAM: &str = "search";

/// Serializable search/filter state of one data table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridViewState {
    pub search: String,
    /// Column key to filter text. Never holds empty values.
    pub filters: BTreeMap<String, String>,
}

impl GridViewState {
    /// Decode the state from a query string (with or without leading `?`).
    ///
    /// Only parameters named after a column key are read as filters.
    pub fn from_query(query: &str, columns: &[Column]) -> Self {
        let mut state = Self::default();
        for (key, value) in parse_pairs(query) {
            if key == SEARCH_PARAM {
                state.search = value;
            } else if !value.is_empty() && columns.iter().any(|c| c.key == key) {
                state.filters.insert(key, value);
            }
        }
        state
    }

    /// Encode the state into `existing`, keeping unrelated parameters.
    ///
    /// Empty search and filter values are removed rather than written.
    pub fn merge_into_query(&self, existing: &str, columns: &[Column]) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in parse_pairs(existing) {
            let owned = key == SEARCH_PARAM || columns.iter().any(|c| c.key == key);
            if !owned {
                serializer.append_pair(&key, &value);
            }
        }
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }
        for col in columns {
            if let Some(value) = self.filter(&col.key) {
                serializer.append_pair(&col.key, value);
            }
        }
        serializer.finish()
    }

    /// Active filter text for `key`, if any.
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set or, when `value` is empty, clear the filter on `key`.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self
    }

    /// True if a search term or any column filter is set.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.filters.is_empty()
    }
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("username", "Usuario"),
            Column::new("email", "Email"),
        ]
    }

    #[test]
    fn test_from_query() {
        let state = GridViewState::from_query("?search=ann+lee&email=%40corp&tab=2", &columns());
        assert_eq!(state.search, "ann lee");
        assert_eq!(state.filter("email"), Some("@corp"));
        assert_eq!(state.filter("tab"), None);
        assert!(state.is_active());
    }

    #[test]
    fn test_from_empty_query() {
        let state = GridViewState::from_query("", &columns());
        assert_eq!(state, GridViewState::default());
        assert!(!state.is_active());
    }

    #[test]
    fn test_empty_filter_params_are_ignored() {
        let state = GridViewState::from_query("username=&search=", &columns());
        assert!(!state.is_active());
    }

    #[test]
    fn test_merge_keeps_unrelated_params() {
        let state = GridViewState::default()
            .with_search("a b")
            .with_filter("email", "x@y");
        let query = state.merge_into_query("tab=2&username=old", &columns());
        assert_eq!(query, "tab=2&search=a+b&email=x%40y");
    }

    #[test]
    fn test_merge_drops_cleared_values() {
        let state = GridViewState::default().with_filter("username", "jo");
        let cleared = state.clone().with_filter("username", "");
        assert_eq!(state.merge_into_query("", &columns()), "username=jo");
        assert_eq!(cleared.merge_into_query("username=jo", &columns()), "");
    }

    #[test]
    fn test_reset_clears_only_owned_params() {
        let query = "tab=2&search=doe&email=corp&username=jo";
        let state = GridViewState::from_query(query, &columns());
        assert!(state.is_active());

        let reset = GridViewState::default();
        assert!(!reset.is_active());
        assert_eq!(reset.merge_into_query(query, &columns()), "tab=2");
    }

    #[test]
    fn test_query_survives_reload() {
        let state = GridViewState::default()
            .with_search("Doe")
            .with_filter("username", "john");
        let query = state.merge_into_query("", &columns());
        assert_eq!(GridViewState::from_query(&query, &columns()), state);
    }
}
