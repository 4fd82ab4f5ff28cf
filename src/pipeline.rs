use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::classify::{self, InputFormat};
use crate::collect::{self, Prompter, RetryPolicy};
use crate::error::{MergeError, Result};
use crate::io::{csv_read, excel_read, excel_write};
use crate::merge::{self, MergePolicy};
use crate::model::Table;

/// Outcome of one completed merge run, reported back to the presentation
/// layer for the success notification.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSummary {
    /// Number of input files merged.
    pub input_count: usize,
    /// Number of data rows in the merged output.
    pub row_count: usize,
    /// Column names of the merged output, in order.
    pub columns: Vec<String>,
    /// Where the merged workbook was written.
    pub output: PathBuf,
}

/// Loads every path into a table, selecting the loader by classification.
/// Any read failure aborts the whole sequence.
#[instrument(level = "debug", skip_all, fields(count = paths.len()))]
pub fn load_tables(paths: &[PathBuf]) -> Result<Vec<Table>> {
    paths.iter().map(|path| load_table(path)).collect()
}

fn load_table(path: &Path) -> Result<Table> {
    let format = classify::classify(path)
        .ok_or_else(|| MergeError::UnsupportedExtension(path.to_path_buf()))?;
    let table = match format {
        InputFormat::DelimitedText => csv_read::read_table(path)?,
        InputFormat::Spreadsheet => excel_read::read_table(path)?,
    };
    debug!(path = %path.display(), rows = table.row_count(), "loaded table");
    Ok(table)
}

/// Merges the given input files into one workbook at `output`: load each
/// input, concatenate under the chosen policy, write the result.
#[instrument(level = "info", skip_all, fields(output = %output.display(), ?policy))]
pub fn merge_files(paths: &[PathBuf], output: &Path, policy: MergePolicy) -> Result<MergeSummary> {
    let tables = load_tables(paths)?;
    info!(table_count = tables.len(), "loaded input tables");

    let merged = merge::concat_tables(&tables, policy)?;
    debug!(
        rows = merged.row_count(),
        columns = merged.column_count(),
        "tables concatenated"
    );

    excel_write::write_table(output, &merged)?;
    info!(rows = merged.row_count(), "merged workbook written");

    Ok(MergeSummary {
        input_count: paths.len(),
        row_count: merged.row_count(),
        columns: merged.columns,
        output: output.to_path_buf(),
    })
}

/// Drives one interactive run: collects the validated input paths and the
/// output destination from the prompter, then merges.
pub fn run_prompted(
    prompter: &mut dyn Prompter,
    retry: RetryPolicy,
    policy: MergePolicy,
) -> Result<MergeSummary> {
    let paths = collect::collect_paths(prompter, retry)?;
    let output = collect::resolve_output(&prompter.ask_output()?);
    merge_files(&paths, &output, policy)
}
