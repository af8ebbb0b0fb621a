//! Free-text search and per-column filters.
//!
//! The search term and every active column filter are AND-combined.
//! Matching is case-insensitive substring containment on the stringified
//! value.

use super::column::Column;
use super::value::Record;
use super::view_state::GridViewState;

/// Indices of the records that match `state`, in original order.
pub fn apply_filters<T: Record>(data: &[T], columns: &[Column], state: &GridViewState) -> Vec<usize> {
    let search = state.search.to_lowercase();
    let active: Vec<(&str, String)> = columns
        .iter()
        .filter_map(|col| {
            state
                .filter(&col.key)
                .map(|value| (col.key.as_str(), value.to_lowercase()))
        })
        .collect();

    data.iter()
        .enumerate()
        .filter(|(_, record)| matches_search(*record, &search) && matches_columns(*record, &active))
        .map(|(idx, _)| idx)
        .collect()
}

/// True if any field contains `search` (already lowercased).
/// An empty term matches every record.
fn matches_search<T: Record>(record: &T, search: &str) -> bool {
    search.is_empty() || record.fields().iter().any(|v| v.contains_lowercase(search))
}

fn matches_columns<T: Record>(record: &T, active: &[(&str, String)]) -> bool {
    active
        .iter()
        .all(|(key, needle)| record.value(key).contains_lowercase(needle))
}
