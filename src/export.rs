//! Spreadsheet export of the display table.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExportError;
use crate::projection::table::{Cell, Table, KEY_HEADER};

pub const SHEET_NAME: &str = "Bank Beta";
pub const MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download name for a country's export, e.g. `bank_beta_india.xlsx`.
pub fn file_name(country: &str) -> String {
    format!("bank_beta_{}.xlsx", country.to_lowercase())
}

/// Encode `table` as an `.xlsx` workbook with a single sheet.
///
/// The key column comes first under [`KEY_HEADER`]. An empty table still
/// produces a valid workbook holding just the header row.
pub fn encode(table: &Table) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    sheet.write_string_with_format(0, 0, KEY_HEADER, &bold)?;
    for (col, header) in (1u16..).zip(&table.headers) {
        sheet.write_string_with_format(0, col, header, &bold)?;
    }

    for (row, data) in (1u32..).zip(&table.rows) {
        sheet.write_string(row, 0, &data.key)?;
        for (col, cell) in (1u16..).zip(data.cells()) {
            match cell {
                Cell::Text(s) => {
                    sheet.write_string(row, col, s)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(row, col, n)?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Encode and write to `path`.
pub fn write_file(table: &Table, path: &Path) -> Result<(), ExportError> {
    let bytes = encode(table)?;
    std::fs::write(path, &bytes)?;
    log::info!("Exported {} rows to {}", table.rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, derive_view, FilterSelection};
    use crate::labels::Language;
    use crate::projection::table;
    use crate::test_helpers::{sample_labels, sample_store};
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use std::io::Cursor;

    fn decode(bytes: Vec<u8>) -> Vec<Vec<Data>> {
        let mut book: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(book.sheet_names(), [SHEET_NAME]);
        let range = book.worksheet_range(SHEET_NAME).unwrap();
        range.rows().map(|r| r.to_vec()).collect()
    }

    fn india_table(language: Language) -> Table {
        let store = sample_store();
        let labels = sample_labels();
        let sel = FilterSelection::defaults_for(&store, "India");
        let filtered = apply(store.records(), &sel);
        let rows = derive_view(&filtered, &labels, language);
        table::project(&rows, &labels, language).unwrap()
    }

    #[test]
    fn file_name_uses_lowercase_country() {
        assert_eq!(file_name("India"), "bank_beta_india.xlsx");
        assert_eq!(file_name("USA"), "bank_beta_usa.xlsx");
    }

    #[test]
    fn round_trip_reproduces_headers_and_cells() {
        let table = india_table(Language::Tamil);
        let rows = decode(encode(&table).unwrap());

        assert_eq!(rows.len(), table.rows.len() + 1);
        let header: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
        let mut expected = vec![KEY_HEADER.to_string()];
        expected.extend(table.headers.iter().cloned());
        assert_eq!(header, expected);

        for (decoded, row) in rows[1..].iter().zip(&table.rows) {
            assert_eq!(decoded[0], Data::String(row.key.clone()));
            for (got, want) in decoded[1..].iter().zip(row.cells()) {
                match want {
                    Cell::Text(s) => assert_eq!(*got, Data::String(s.to_string())),
                    Cell::Number(n) => assert_eq!(*got, Data::Float(n)),
                    Cell::Empty => assert_eq!(*got, Data::Empty),
                }
            }
        }
    }

    #[test]
    fn empty_table_exports_headers_only() {
        let labels = sample_labels();
        let table = table::project(&[], &labels, Language::English).unwrap();
        let rows = decode(encode(&table).unwrap());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 7);
        assert_eq!(rows[0][0], Data::String(KEY_HEADER.into()));
    }

    #[test]
    fn write_file_creates_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file_name("India"));
        write_file(&india_table(Language::English), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }
}
