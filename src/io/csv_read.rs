use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::model::{Cell, Table};

/// Reads a comma-separated file with a header row into a [`Table`], applying
/// default typing inference to each field.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut table = Table::new(columns);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(infer_cell).collect());
    }
    Ok(table)
}

fn infer_cell(field: &str) -> Cell {
    if field.is_empty() {
        return Cell::Empty;
    }
    if let Ok(number) = field.parse::<f64>() {
        return Cell::Number(number);
    }
    match field {
        "true" => Cell::Boolean(true),
        "false" => Cell::Boolean(false),
        _ => Cell::Text(field.to_string()),
    }
}
