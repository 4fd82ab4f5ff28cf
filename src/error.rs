use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Error type covering the different failure cases that can occur when the
/// tool collects, loads, merges, or writes tabular data.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the spreadsheet reader implementation.
    #[error("spreadsheet read error: {0}")]
    ExcelRead(#[from] calamine::Error),

    /// Errors bubbled up from the spreadsheet writer implementation.
    #[error("spreadsheet write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Errors bubbled up from the delimited-text reader implementation.
    #[error("CSV read error: {0}")]
    CsvRead(#[from] csv::Error),

    /// Raised when a candidate path does not carry an accepted extension.
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(PathBuf),

    /// Raised when a candidate path does not resolve to an existing file.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a workbook contains no readable sheet.
    #[error("workbook has no readable sheet: {0}")]
    EmptyWorkbook(PathBuf),

    /// Raised when the requested file count is not a positive integer.
    #[error("invalid file count '{0}': expected a positive integer")]
    InvalidCount(String),

    /// Raised when the retry policy gives up before a valid answer arrives.
    #[error("no valid input after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// Raised by the strict merge policy when input column sets differ.
    #[error("column mismatch: expected [{expected}], found [{found}]")]
    ColumnMismatch { expected: String, found: String },

    /// Raised when the merger receives an empty sequence of tables.
    #[error("nothing to merge: no input tables")]
    NoInputs,

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
