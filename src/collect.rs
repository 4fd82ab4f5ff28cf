use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classify;
use crate::error::{MergeError, Result};

/// Output filename used when the user supplies no destination.
pub const DEFAULT_OUTPUT: &str = "combined.xlsx";

/// Presentation-layer collaborator. Supplies the three inputs the pipeline
/// needs (a file count, candidate paths one slot at a time, and an output
/// destination) and receives pass/fail feedback for rejected candidates.
pub trait Prompter {
    /// Requests the number of files to merge, as free-form text.
    fn ask_count(&mut self) -> Result<String>;

    /// Requests the candidate path for one slot. `slot` is zero-based.
    fn ask_path(&mut self, slot: usize, total: usize) -> Result<String>;

    /// Requests the output destination, as free-form text. An empty answer
    /// selects the default destination.
    fn ask_output(&mut self) -> Result<String>;

    /// Reports a rejected answer back to the user before re-prompting.
    fn notify_rejection(&mut self, message: &str);
}

/// How often a prompt may be retried after an invalid answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Re-prompt forever. Matches the reference behaviour.
    Unbounded,
    /// Give up with [`MergeError::RetriesExhausted`] after this many answers.
    MaxAttempts(u32),
}

impl RetryPolicy {
    fn exhausted(self, attempts: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => false,
            RetryPolicy::MaxAttempts(limit) => attempts >= limit,
        }
    }
}

/// Validates one candidate input path: the extension must be accepted and
/// the path must resolve to an existing regular file. Validation happens
/// once, at collection time; the file is not re-checked before loading.
pub fn validate_candidate(path: &Path) -> Result<()> {
    if !classify::is_accepted(path) {
        return Err(MergeError::UnsupportedExtension(path.to_path_buf()));
    }
    let is_file = fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false);
    if !is_file {
        return Err(MergeError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}

/// Parses the requested file count from free-form text.
pub fn parse_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let count: usize = trimmed
        .parse()
        .map_err(|_| MergeError::InvalidCount(trimmed.to_string()))?;
    if count == 0 {
        return Err(MergeError::InvalidCount(trimmed.to_string()));
    }
    Ok(count)
}

/// Normalises the output destination answered by the prompter: an empty
/// answer selects [`DEFAULT_OUTPUT`], and an answer without an extension
/// gets `.xlsx` appended.
pub fn resolve_output(text: &str) -> PathBuf {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return PathBuf::from(DEFAULT_OUTPUT);
    }
    let mut path = PathBuf::from(trimmed);
    if path.extension().is_none() {
        path.set_extension("xlsx");
    }
    path
}

/// Collects the requested number of validated input paths from the
/// presentation layer. Invalid answers are reported via
/// [`Prompter::notify_rejection`] and the same slot is re-requested, bounded
/// by the retry policy. The returned list always has exactly the requested
/// length and every entry passed [`validate_candidate`].
pub fn collect_paths(prompter: &mut dyn Prompter, retry: RetryPolicy) -> Result<Vec<PathBuf>> {
    let count = collect_count(prompter, retry)?;
    debug!(count, "collecting input paths");

    let mut paths = Vec::with_capacity(count);
    for slot in 0..count {
        paths.push(collect_slot(prompter, retry, slot, count)?);
    }
    Ok(paths)
}

fn collect_count(prompter: &mut dyn Prompter, retry: RetryPolicy) -> Result<usize> {
    let mut attempts = 0;
    loop {
        let answer = prompter.ask_count()?;
        attempts += 1;
        match parse_count(&answer) {
            Ok(count) => return Ok(count),
            Err(error) => {
                prompter.notify_rejection(&error.to_string());
                if retry.exhausted(attempts) {
                    return Err(MergeError::RetriesExhausted { attempts });
                }
            }
        }
    }
}

fn collect_slot(
    prompter: &mut dyn Prompter,
    retry: RetryPolicy,
    slot: usize,
    total: usize,
) -> Result<PathBuf> {
    let mut attempts = 0;
    loop {
        let answer = prompter.ask_path(slot, total)?;
        attempts += 1;
        let candidate = PathBuf::from(answer.trim());
        match validate_candidate(&candidate) {
            Ok(()) => {
                debug!(path = %candidate.display(), slot, "accepted input path");
                return Ok(candidate);
            }
            Err(error) => {
                prompter.notify_rejection(&error.to_string());
                if retry.exhausted(attempts) {
                    return Err(MergeError::RetriesExhausted { attempts });
                }
            }
        }
    }
}
