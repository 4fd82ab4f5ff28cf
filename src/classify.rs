use std::path::Path;

/// Input formats the loader can handle, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Excel-family workbook, read from the first sheet.
    Spreadsheet,
    /// Comma-separated text with a header row.
    DelimitedText,
}

/// Extensions accepted for spreadsheet inputs.
const SPREADSHEET_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "xlsm"];

/// Classifies a path by its extension. Returns `None` for anything outside
/// the accepted set. Purely a suffix match: no content inspection, no case
/// folding, no path normalisation.
pub fn classify(path: &Path) -> Option<InputFormat> {
    let extension = path.extension()?.to_str()?;
    if SPREADSHEET_EXTENSIONS.contains(&extension) {
        Some(InputFormat::Spreadsheet)
    } else if extension == "csv" {
        Some(InputFormat::DelimitedText)
    } else {
        None
    }
}

/// Acceptance predicate used to gate candidate input files.
pub fn is_accepted(path: &Path) -> bool {
    classify(path).is_some()
}
