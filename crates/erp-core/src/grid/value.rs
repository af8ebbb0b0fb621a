//! Cell values and the record abstraction the grid works over.

use std::cmp::Ordering;
use std::fmt;

/// A single field value as the grid sees it.
///
/// The variant set is closed so search, sort and export behave the same
/// for every record type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Missing or optional field with no value.
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    /// A list of display strings (tags, nested record names).
    List(Vec<String>),
}

impl CellValue {
    /// Rank used to order values of different kinds. Empty sorts first.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Number(_) => 2,
            Self::Text(_) => 3,
            Self::List(_) => 4,
        }
    }

    /// Natural ordering on raw values.
    ///
    /// Numbers compare numerically with NaN after every other number, text
    /// lexicographically, lists by their joined text. Values of different
    /// kinds order by kind so the result is always a total order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => compare_numbers(*a, *b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.join(",").cmp(&b.join(",")),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    /// Case-insensitive substring test against an already lowercased needle.
    ///
    /// `Empty` never matches, not even the empty needle.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            Self::Empty => false,
            other => other.to_string().to_lowercase().contains(needle),
        }
    }

    /// Join list items with `separator`; other values render as usual.
    pub fn join(&self, separator: &str) -> String {
        match self {
            Self::List(items) => items.join(separator),
            other => other.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[String]> for CellValue {
    fn from(value: &[String]) -> Self {
        Self::List(value.to_vec())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// A record that can be shown in a data table.
pub trait Record {
    /// Value of the field named `key`, or [`CellValue::Empty`] if unknown.
    fn value(&self, key: &str) -> CellValue;

    /// Every field value, searched by the free-text filter.
    fn fields(&self) -> Vec<CellValue>;
}
