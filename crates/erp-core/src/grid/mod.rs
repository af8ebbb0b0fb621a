//! Generic tabular view engine.
//!
//! The rows a table shows are a pure function of the data, the columns,
//! the URL view state and the sort:
//!
//! ```text
//! data ──filter(search AND column filters)──> indices ──sort──> visible rows
//! ```
//!
//! Rows are returned as indices into the original slice so callers never
//! copy records.

mod column;
mod export;
mod filter;
mod sort;
mod value;
mod view_state;

pub use column::{CellKind, Column, RowAction};
pub use export::{csv_filename, export_csv, export_csv_string};
pub use filter::apply_filters;
pub use sort::{SortDirection, SortState, cycle_sort, sort_rows};
pub use value::{CellValue, Record};
pub use view_state::{GridViewState, SEARCH_PARAM};

/// Indices of the rows to display, filtered then sorted.
pub fn visible_rows<T: Record>(
    data: &[T],
    columns: &[Column],
    state: &GridViewState,
    sort: Option<&SortState>,
) -> Vec<usize> {
    let mut rows = apply_filters(data, columns, state);
    if let Some(sort) = sort {
        sort_rows(data, &mut rows, sort);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Article {
        code: &'static str,
        price: f64,
    }

    impl Record for Article {
        fn value(&self, key: &str) -> CellValue {
            match key {
                "code" => self.code.into(),
                "price" => self.price.into(),
                _ => CellValue::Empty,
            }
        }

        fn fields(&self) -> Vec<CellValue> {
            vec![self.value("code"), self.value("price")]
        }
    }

    fn data() -> Vec<Article> {
        vec![
            Article { code: "A-3", price: 30.0 },
            Article { code: "B-1", price: 10.0 },
            Article { code: "A-2", price: 20.0 },
            Article { code: "A-1", price: 25.0 },
        ]
    }

    #[test]
    fn test_third_click_restores_filtered_order() {
        let data = data();
        let columns = vec![Column::new("code", "Código"), Column::new("price", "Precio").sortable()];
        let state = GridViewState::default().with_search("a-");
        let price = &columns[1];

        let unsorted = visible_rows(&data, &columns, &state, None);
        assert_eq!(unsorted, vec![0, 2, 3]);

        let asc = cycle_sort(None, price);
        assert_eq!(visible_rows(&data, &columns, &state, asc.as_ref()), vec![2, 3, 0]);

        let desc = cycle_sort(asc, price);
        assert_eq!(visible_rows(&data, &columns, &state, desc.as_ref()), vec![0, 3, 2]);

        let cleared = cycle_sort(desc, price);
        assert!(cleared.is_none());
        assert_eq!(visible_rows(&data, &columns, &state, cleared.as_ref()), unsorted);
    }
}
