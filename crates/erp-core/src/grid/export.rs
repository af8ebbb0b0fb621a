//! CSV export of the visible rows of a table.
//!
//! The header row holds column titles; each data row holds the raw value of
//! every column, stringified. Quoting follows RFC 4180: fields containing a
//! comma, quote or line break are quoted and embedded quotes are doubled.

use std::io::Write;

use super::column::Column;
use super::value::Record;
use crate::error::ExportError;

/// File name offered for a download: `<filename>.csv`.
pub fn csv_filename(filename: &str) -> String {
    format!("{}.csv", filename)
}

/// Write `rows` of `data` as CSV. Returns the number of data rows written.
pub fn export_csv<T: Record, W: Write>(
    data: &[T],
    columns: &[Column],
    rows: &[usize],
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(columns.iter().map(|c| c.title.as_str()))?;

    let mut count = 0;
    for &idx in rows {
        let record = &data[idx];
        csv_writer.write_record(columns.iter().map(|c| c.value(record).to_string()))?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export to an in-memory string.
pub fn export_csv_string<T: Record>(
    data: &[T],
    columns: &[Column],
    rows: &[usize],
) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    export_csv(data, columns, rows, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::value::CellValue;
    use crate::grid::{GridViewState, SortState, visible_rows};

    struct Person {
        name: &'static str,
        age: u32,
    }

    impl Record for Person {
        fn value(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.into(),
                "age" => self.age.into(),
                _ => CellValue::Empty,
            }
        }

        fn fields(&self) -> Vec<CellValue> {
            vec![self.value("name"), self.value("age")]
        }
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "name").sortable(),
            Column::new("age", "age").sortable(),
        ]
    }

    #[test]
    fn test_sorted_export_quotes_commas() {
        let data = vec![
            Person { name: "Ann, B", age: 30 },
            Person { name: "Cid", age: 20 },
        ];
        let rows = visible_rows(
            &data,
            &columns(),
            &GridViewState::default(),
            Some(&SortState::ascending("age")),
        );
        let csv = export_csv_string(&data, &columns(), &rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["name,age", "Cid,20", "\"Ann, B\",30"]);
    }

    #[test]
    fn test_line_count_is_rows_plus_header() {
        let data: Vec<Person> = (0..5)
            .map(|age| Person { name: "x", age })
            .collect();
        let rows = vec![4, 2, 0];
        let csv = export_csv_string(&data, &columns(), &rows).unwrap();
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let data = vec![Person { name: "The \"Boss\"", age: 1 }];
        let csv = export_csv_string(&data, &columns(), &[0]).unwrap();
        assert!(csv.contains("\"The \"\"Boss\"\"\",1"));
    }

    #[test]
    fn test_header_uses_titles() {
        let data: Vec<Person> = Vec::new();
        let cols = vec![Column::new("name", "Nombre"), Column::new("age", "Edad")];
        let mut buf = Vec::new();
        let count = export_csv(&data, &cols, &[], &mut buf).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "Nombre,Edad\n");
    }

    #[test]
    fn test_csv_filename() {
        assert_eq!(csv_filename("usuarios"), "usuarios.csv");
    }
}
