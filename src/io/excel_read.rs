use std::path::Path;

use calamine::{DataType, Reader, open_workbook_auto};

use crate::error::{MergeError, Result};
use crate::model::{Cell, Table};

/// Reads the first sheet of a workbook into a [`Table`]. The first row is
/// taken as the header; every following row becomes a data row with default
/// typing inference per cell.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MergeError::EmptyWorkbook(path.to_path_buf()))??;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|cell| cell_to_string(Some(cell))).collect(),
        None => return Ok(Table::new(Vec::new())),
    };

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row.iter().map(cell_value).collect());
    }
    Ok(table)
}

fn cell_value(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty => Cell::Empty,
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::Float(value) => Cell::Number(*value),
        DataType::Int(value) => Cell::Number(*value as f64),
        DataType::Bool(value) => Cell::Boolean(*value),
        // The raw serial number is not meaningful outside the workbook.
        DataType::DateTime(_) => cell
            .as_datetime()
            .map(|stamp| Cell::Text(stamp.to_string()))
            .unwrap_or(Cell::Empty),
        other => Cell::Text(other.to_string()),
    }
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
