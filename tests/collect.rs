use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tablemerge::classify::{InputFormat, classify, is_accepted};
use tablemerge::collect::{
    self, Prompter, RetryPolicy, collect_paths, resolve_output, validate_candidate,
};
use tablemerge::merge::MergePolicy;
use tablemerge::model::{Cell, Table};
use tablemerge::pipeline;
use tablemerge::{MergeError, Result};
use tempfile::tempdir;

/// Prompter fed from pre-scripted answers, recording every rejection.
struct ScriptedPrompter {
    counts: VecDeque<String>,
    paths: VecDeque<String>,
    output: String,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    fn new(counts: &[&str], paths: &[&str], output: &str) -> Self {
        Self {
            counts: counts.iter().map(|s| s.to_string()).collect(),
            paths: paths.iter().map(|s| s.to_string()).collect(),
            output: output.to_string(),
            rejections: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_count(&mut self) -> Result<String> {
        Ok(self.counts.pop_front().expect("scripted count available"))
    }

    fn ask_path(&mut self, _slot: usize, _total: usize) -> Result<String> {
        Ok(self.paths.pop_front().expect("scripted path available"))
    }

    fn ask_output(&mut self) -> Result<String> {
        Ok(self.output.clone())
    }

    fn notify_rejection(&mut self, message: &str) {
        self.rejections.push(message.to_string());
    }
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"").expect("fixture file created");
    path
}

#[test]
fn classifier_accepts_exactly_the_supported_extensions() {
    assert!(is_accepted(Path::new("report.xlsx")));
    assert!(is_accepted(Path::new("legacy.xls")));
    assert!(is_accepted(Path::new("macros.xlsm")));
    assert!(is_accepted(Path::new("export.csv")));

    assert!(!is_accepted(Path::new("notes.txt")));
    assert!(!is_accepted(Path::new("scan.pdf")));
    assert!(!is_accepted(Path::new("data")));
    assert!(!is_accepted(Path::new("archive.xlsx.bak")));
}

#[test]
fn classifier_selects_the_loader_by_extension() {
    assert_eq!(
        classify(Path::new("export.csv")),
        Some(InputFormat::DelimitedText)
    );
    assert_eq!(
        classify(Path::new("report.xlsx")),
        Some(InputFormat::Spreadsheet)
    );
    assert_eq!(classify(Path::new("notes.txt")), None);
}

#[test]
fn rejected_path_reprompts_the_same_slot() {
    let temp_dir = tempdir().expect("temporary directory");
    let first = touch(temp_dir.path(), "first.xlsx");
    let second = touch(temp_dir.path(), "second.xlsx");
    let notes = touch(temp_dir.path(), "notes.txt");

    let mut prompter = ScriptedPrompter::new(
        &["2"],
        &[
            notes.to_str().expect("utf-8 path"),
            first.to_str().expect("utf-8 path"),
            second.to_str().expect("utf-8 path"),
        ],
        "",
    );

    let collected =
        collect_paths(&mut prompter, RetryPolicy::Unbounded).expect("collection succeeded");

    assert_eq!(collected, vec![first, second]);
    assert_eq!(prompter.rejections.len(), 1);
    assert!(prompter.rejections[0].contains("unsupported file extension"));
}

#[test]
fn nonexistent_file_is_rejected_then_replaced() {
    let temp_dir = tempdir().expect("temporary directory");
    let real = touch(temp_dir.path(), "real.csv");
    let ghost = temp_dir.path().join("ghost.csv");

    let mut prompter = ScriptedPrompter::new(
        &["1"],
        &[
            ghost.to_str().expect("utf-8 path"),
            real.to_str().expect("utf-8 path"),
        ],
        "",
    );

    let collected =
        collect_paths(&mut prompter, RetryPolicy::Unbounded).expect("collection succeeded");

    assert_eq!(collected, vec![real]);
    assert!(prompter.rejections[0].contains("not found"));
}

#[test]
fn invalid_count_is_reprompted() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = touch(temp_dir.path(), "input.xlsx");

    let mut prompter = ScriptedPrompter::new(
        &["two", "0", "1"],
        &[input.to_str().expect("utf-8 path")],
        "",
    );

    let collected =
        collect_paths(&mut prompter, RetryPolicy::Unbounded).expect("collection succeeded");

    assert_eq!(collected.len(), 1);
    assert_eq!(prompter.rejections.len(), 2);
}

#[test]
fn bounded_retry_policy_gives_up() {
    let mut prompter = ScriptedPrompter::new(&["1"], &["a.txt", "b.txt"], "");

    let result = collect_paths(&mut prompter, RetryPolicy::MaxAttempts(2));
    assert!(matches!(
        result,
        Err(MergeError::RetriesExhausted { attempts: 2 })
    ));
}

#[test]
fn candidate_validation_reports_the_failure_kind() {
    let temp_dir = tempdir().expect("temporary directory");
    let missing = temp_dir.path().join("missing.xlsx");

    assert!(matches!(
        validate_candidate(Path::new("notes.txt")),
        Err(MergeError::UnsupportedExtension(_))
    ));
    assert!(matches!(
        validate_candidate(&missing),
        Err(MergeError::MissingInput(_))
    ));

    let present = touch(temp_dir.path(), "present.csv");
    assert!(validate_candidate(&present).is_ok());
}

#[test]
fn output_destination_defaults_and_extension() {
    assert_eq!(resolve_output(""), PathBuf::from(collect::DEFAULT_OUTPUT));
    assert_eq!(resolve_output("  "), PathBuf::from(collect::DEFAULT_OUTPUT));
    assert_eq!(resolve_output("report"), PathBuf::from("report.xlsx"));
    assert_eq!(resolve_output("report.xlsx"), PathBuf::from("report.xlsx"));
}

#[test]
fn prompted_run_merges_end_to_end() {
    let temp_dir = tempdir().expect("temporary directory");

    let mut table = Table::new(vec!["Name".to_string()]);
    table.push_row(vec![Cell::Text("Alice".to_string())]);
    let first = temp_dir.path().join("first.xlsx");
    tablemerge::io::excel_write::write_table(&first, &table).expect("fixture workbook written");

    let csv_path = temp_dir.path().join("second.csv");
    fs::write(&csv_path, "Name\nBob\n").expect("fixture CSV written");

    let output = temp_dir.path().join("out.xlsx");
    let mut prompter = ScriptedPrompter::new(
        &["2"],
        &[
            first.to_str().expect("utf-8 path"),
            csv_path.to_str().expect("utf-8 path"),
        ],
        output.to_str().expect("utf-8 path"),
    );

    let summary =
        pipeline::run_prompted(&mut prompter, RetryPolicy::Unbounded, MergePolicy::Strict)
            .expect("prompted run succeeded");

    assert_eq!(summary.row_count, 2);
    assert_eq!(summary.columns, vec!["Name"]);
    assert_eq!(summary.output, output);
    assert!(output.is_file());
}
