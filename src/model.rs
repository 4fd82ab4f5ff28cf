use serde::{Deserialize, Serialize};

/// A single cell value as produced by the default typing inference of the
/// loaders. Columns are not forced to a uniform type; each cell carries its
/// own variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Cell {
    /// Missing value. Also the fill marker used by the union merge policy.
    Empty,
    /// Plain text value.
    Text(String),
    /// Numeric value. Integers from spreadsheet sources land here as well.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
}

impl Cell {
    /// Whether the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// In-memory tabular data loaded from one source file: named columns in
/// order, plus ordered rows of cells. Rows are padded to the column count at
/// construction time and the table is not mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in source order.
    pub columns: Vec<String>,
    /// Row data; every row has exactly `columns.len()` cells.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the provided column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the column count.
    pub fn push_row(&mut self, mut cells: Vec<Cell>) {
        cells.resize(self.columns.len(), Cell::Empty);
        self.rows.push(cells);
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of the named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}
