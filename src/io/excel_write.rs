use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::model::{Cell, Table};

/// Sheet name given to the merged output.
const OUTPUT_SHEET: &str = "Merged";

/// Writes the provided table to the given path as a single-sheet workbook.
/// The header row carries the column names; no row-index column is emitted.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let row_idx = (row_idx + 1) as u32;
            let col_idx = col_idx as u16;
            match cell {
                Cell::Empty => {}
                Cell::Text(value) => {
                    worksheet.write_string(row_idx, col_idx, value)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_idx, col_idx, *value)?;
                }
                Cell::Boolean(value) => {
                    worksheet.write_boolean(row_idx, col_idx, *value)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
