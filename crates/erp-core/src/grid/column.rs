//! Column descriptors.

use super::value::{CellValue, Record};

/// Per-row action offered by an [`CellKind::Actions`] column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    ChangePassword,
    Delete,
}

impl RowAction {
    /// Tooltip text for the action button.
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "Ver",
            Self::Edit => "Editar",
            Self::ChangePassword => "Cambiar contraseña",
            Self::Delete => "Eliminar",
        }
    }
}

/// How a column renders its cells.
#[derive(Clone, Debug, PartialEq)]
pub enum CellKind {
    /// The raw value, stringified.
    Text,
    /// A list value joined with `separator`.
    Joined { separator: &'static str },
    /// Action buttons; the raw value is not shown.
    Actions(Vec<RowAction>),
}

/// Describes how one record field is displayed, filtered and sorted.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Record field key; also the URL query parameter of its filter.
    pub key: String,
    /// Header text and CSV header.
    pub title: String,
    pub sortable: bool,
    pub cell: CellKind,
}

impl Column {
    /// A plain text column that is not sortable.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            cell: CellKind::Text,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn joined(mut self, separator: &'static str) -> Self {
        self.cell = CellKind::Joined { separator };
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = RowAction>) -> Self {
        self.cell = CellKind::Actions(actions.into_iter().collect());
        self
    }

    /// Raw value of this column's field in `record`.
    pub fn value<T: Record>(&self, record: &T) -> CellValue {
        record.value(&self.key)
    }

    /// Text shown in the cell, or `None` for action columns.
    pub fn display<T: Record>(&self, record: &T) -> Option<String> {
        match &self.cell {
            CellKind::Text => Some(self.value(record).to_string()),
            CellKind::Joined { separator } => Some(self.value(record).join(separator)),
            CellKind::Actions(_) => None,
        }
    }

    /// Actions offered by this column, empty for non-action columns.
    pub fn row_actions(&self) -> &[RowAction] {
        match &self.cell {
            CellKind::Actions(actions) => actions,
            _ => &[],
        }
    }
}
