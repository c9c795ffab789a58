//! # Workbook Import
//!
//! Reads the first sheet of a spreadsheet (XLSX, XLS, XLSB, ODS via
//! calamine's auto-detection) and hands its rows to the catalog parser.
//!
//! Cell values cross this boundary as the [`Cell`] tagged union so the
//! classification logic never touches calamine types. A structurally
//! unreadable workbook is fatal to the load; unreadable individual rows
//! are not (the parser skips them).
//!
//! ## Example
//!
//! ```rust,no_run
//! use tally_core::workbook::read_catalog_file;
//!
//! let catalog = read_catalog_file("prices.xlsx".as_ref())?;
//! println!("{} items", catalog.item_count());
//! # Ok::<(), tally_core::errors::QuoteError>(())
//! ```

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader};

use crate::catalog::{parse_rows, Catalog, Cell};
use crate::errors::{QuoteError, QuoteResult};

/// Read a catalog from a workbook file on disk.
pub fn read_catalog_file(path: &Path) -> QuoteResult<Catalog> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        QuoteError::file_error("open", path.display().to_string(), e.to_string())
    })?;
    catalog_from_first_sheet(&mut workbook)
}

/// Read a catalog from workbook bytes already in memory (e.g. from a
/// file dialog read).
pub fn read_catalog_bytes(bytes: &[u8]) -> QuoteResult<Catalog> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| QuoteError::spreadsheet_read(e.to_string()))?;
    catalog_from_first_sheet(&mut workbook)
}

/// Pull the first sheet's rows through the parser.
fn catalog_from_first_sheet<R>(workbook: &mut calamine::Sheets<R>) -> QuoteResult<Catalog>
where
    R: Read + Seek,
{
    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| QuoteError::spreadsheet_read("workbook has no sheets"))?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| QuoteError::spreadsheet_read(e.to_string()))?;

    let rows: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(parse_rows(rows))
}

/// Map a calamine cell to the parser's tagged union. Only text and
/// numbers participate in row classification; everything else is opaque.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Empty => Cell::Empty,
        _ => Cell::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    /// Build an in-memory XLSX with a two-section price list.
    fn sample_workbook_bytes() -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Widgets").unwrap();
        sheet.write_string(1, 0, "Bolt").unwrap();
        sheet.write_number(1, 1, 10.0).unwrap();
        sheet.write_string(2, 0, "Nut").unwrap();
        sheet.write_number(2, 1, 5.0).unwrap();
        sheet.write_string(3, 0, "Electronics").unwrap();
        sheet.write_string(4, 0, "LED").unwrap();
        sheet.write_number(4, 1, 2.0).unwrap();
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_read_catalog_from_real_xlsx() {
        let bytes = sample_workbook_bytes();
        let catalog = read_catalog_bytes(&bytes).unwrap();

        assert_eq!(catalog.sections.len(), 2);
        assert_eq!(catalog.sections[0].title, "WIDGETS");
        assert_eq!(catalog.sections[0].items.len(), 2);
        assert_eq!(catalog.sections[1].title, "ELECTRONICS");
        assert_eq!(catalog.item(2).unwrap().name, "LED");
    }

    #[test]
    fn test_only_first_sheet_is_read() {
        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.write_string(0, 0, "Bolt").unwrap();
        first.write_number(0, 1, 10.0).unwrap();
        let second = workbook.add_worksheet();
        second.write_string(0, 0, "Ghost item").unwrap();
        second.write_number(0, 1, 99.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let catalog = read_catalog_bytes(&bytes).unwrap();
        assert_eq!(catalog.item_count(), 1);
        assert_eq!(catalog.sections[0].items[0].name, "Bolt");
    }

    #[test]
    fn test_mixed_cell_types_skip_cleanly() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        // Boolean second cell: not a number, row skipped
        sheet.write_string(0, 0, "Flagged").unwrap();
        sheet.write_boolean(0, 1, true).unwrap();
        sheet.write_string(1, 0, "Bolt").unwrap();
        sheet.write_number(1, 1, 10.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let catalog = read_catalog_bytes(&bytes).unwrap();
        assert_eq!(catalog.item_count(), 1);
    }

    #[test]
    fn test_unreadable_bytes_are_fatal() {
        let err = read_catalog_bytes(b"this is not a spreadsheet").unwrap_err();
        assert_eq!(err.error_code(), "SPREADSHEET_READ");
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let err = read_catalog_file("no/such/prices.xlsx".as_ref()).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
