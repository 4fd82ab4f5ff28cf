use crate::error::{MergeError, Result};
use crate::model::{Cell, Table};

/// Column-alignment policy applied when concatenating tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Fail with [`MergeError::ColumnMismatch`] if any input's column set
    /// differs from the first input's.
    #[default]
    Strict,
    /// Merge columns by name into their ordered union (first appearance
    /// wins the position) and fill missing cells with [`Cell::Empty`].
    UnionWithFill,
}

/// Concatenates the tables row-wise, in input order, into one table. The
/// sequence must be non-empty; row order in the result is contiguous from
/// the start regardless of the source tables' sizes.
pub fn concat_tables(tables: &[Table], policy: MergePolicy) -> Result<Table> {
    let first = tables.first().ok_or(MergeError::NoInputs)?;
    match policy {
        MergePolicy::Strict => concat_strict(first, &tables[1..]),
        MergePolicy::UnionWithFill => concat_union(tables),
    }
}

fn concat_strict(first: &Table, rest: &[Table]) -> Result<Table> {
    for table in rest {
        if table.columns != first.columns {
            return Err(MergeError::ColumnMismatch {
                expected: first.columns.join(", "),
                found: table.columns.join(", "),
            });
        }
    }

    let mut merged = Table::new(first.columns.clone());
    merged.rows.extend(first.rows.iter().cloned());
    for table in rest {
        merged.rows.extend(table.rows.iter().cloned());
    }
    Ok(merged)
}

fn concat_union(tables: &[Table]) -> Result<Table> {
    let mut columns: Vec<String> = Vec::new();
    for table in tables {
        for column in &table.columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }

    let mut merged = Table::new(columns);
    for table in tables {
        // Maps each merged column to its position in this source table.
        let positions: Vec<Option<usize>> = merged
            .columns
            .iter()
            .map(|column| table.column_index(column))
            .collect();

        for row in &table.rows {
            let cells = positions
                .iter()
                .map(|position| match position {
                    Some(index) => row.get(*index).cloned().unwrap_or(Cell::Empty),
                    None => Cell::Empty,
                })
                .collect();
            merged.rows.push(cells);
        }
    }
    Ok(merged)
}
