//! Single-column sorting.

use super::column::Column;
use super::value::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort: one column and a direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Next sort after a click on `column`'s header.
///
/// Same column: ascending → descending → unsorted. Another column starts
/// ascending. Clicks on non-sortable columns leave the sort unchanged.
pub fn cycle_sort(current: Option<SortState>, column: &Column) -> Option<SortState> {
    if !column.sortable {
        return current;
    }
    match current {
        Some(SortState {
            key,
            direction: SortDirection::Ascending,
        }) if key == column.key => Some(SortState::descending(key)),
        Some(SortState { key, .. }) if key == column.key => None,
        _ => Some(SortState::ascending(column.key.clone())),
    }
}

/// Sort row indices in place by the raw value of the sort column.
///
/// The sort is stable: rows with equal values keep their relative order.
pub fn sort_rows<T: Record>(data: &[T], rows: &mut [usize], sort: &SortState) {
    rows.sort_by(|&a, &b| {
        let ord = data[a].value(&sort.key).compare(&data[b].value(&sort.key));
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::value::CellValue;

    struct Item(&'static str, f64);

    impl Record for Item {
        fn value(&self, key: &str) -> CellValue {
            match key {
                "name" => self.0.into(),
                "price" => self.1.into(),
                _ => CellValue::Empty,
            }
        }

        fn fields(&self) -> Vec<CellValue> {
            vec![self.value("name"), self.value("price")]
        }
    }

    #[test]
    fn test_cycle_on_same_column() {
        let price = Column::new("price", "Precio").sortable();
        let first = cycle_sort(None, &price);
        assert_eq!(first, Some(SortState::ascending("price")));
        let second = cycle_sort(first, &price);
        assert_eq!(second, Some(SortState::descending("price")));
        assert_eq!(cycle_sort(second, &price), None);
    }

    #[test]
    fn test_other_column_restarts_ascending() {
        let name = Column::new("name", "Nombre").sortable();
        let current = Some(SortState::descending("price"));
        assert_eq!(cycle_sort(current, &name), Some(SortState::ascending("name")));
    }

    #[test]
    fn test_non_sortable_column_is_ignored() {
        let roles = Column::new("roles", "Roles");
        let current = Some(SortState::ascending("price"));
        assert_eq!(cycle_sort(current.clone(), &roles), current);
        assert_eq!(cycle_sort(None, &roles), None);
    }

    #[test]
    fn test_sort_numeric_and_descending() {
        let data = vec![Item("b", 10.0), Item("a", 2.5), Item("c", 100.0)];
        let mut rows = vec![0, 1, 2];
        sort_rows(&data, &mut rows, &SortState::ascending("price"));
        assert_eq!(rows, vec![1, 0, 2]);
        sort_rows(&data, &mut rows, &SortState::descending("price"));
        assert_eq!(rows, vec![2, 0, 1]);
    }

    #[test]
    fn test_sort_with_nan_prices() {
        let data: Vec<Item> = (0..64)
            .map(|i| {
                let price = if i % 3 == 0 { f64::NAN } else { f64::from(64 - i) };
                Item("x", price)
            })
            .collect();
        let mut rows: Vec<usize> = (0..data.len()).collect();
        sort_rows(&data, &mut rows, &SortState::ascending("price"));

        let prices: Vec<f64> = rows.iter().map(|&i| data[i].1).collect();
        let numbers = prices.iter().take_while(|p| !p.is_nan()).count();
        assert_eq!(numbers, 42);
        assert!(prices[..numbers].windows(2).all(|w| w[0] <= w[1]));
        assert!(prices[numbers..].iter().all(|p| p.is_nan()));

        sort_rows(&data, &mut rows, &SortState::descending("price"));
        assert!(data[rows[0]].1.is_nan());
        assert_eq!(data[rows[63]].1, 2.0);
    }

    #[test]
    fn test_sort_is_stable() {
        let data = vec![Item("x", 1.0), Item("y", 0.0), Item("z", 1.0), Item("w", 0.0)];
        let mut rows = vec![0, 1, 2, 3];
        sort_rows(&data, &mut rows, &SortState::ascending("price"));
        assert_eq!(rows, vec![1, 3, 0, 2]);
        let mut rows = vec![0, 1, 2, 3];
        sort_rows(&data, &mut rows, &SortState::descending("price"));
        assert_eq!(rows, vec![0, 2, 1, 3]);
    }
}
