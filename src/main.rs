use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tablemerge::collect::{self, Prompter, RetryPolicy};
use tablemerge::merge::MergePolicy;
use tablemerge::pipeline::{self, MergeSummary};
use tablemerge::{MergeError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    let summary = match cli.command {
        Command::Merge(args) => execute_merge(args),
        Command::Prompt(args) => execute_prompt(args),
    }?;
    println!(
        "merged {} files into {} ({} rows, {} columns)",
        summary.input_count,
        summary.output.display(),
        summary.row_count,
        summary.columns.len()
    );
    Ok(())
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|error| MergeError::Logging(error.to_string()))
}

fn execute_merge(args: MergeArgs) -> Result<MergeSummary> {
    for input in &args.inputs {
        collect::validate_candidate(input)?;
    }
    pipeline::merge_files(&args.inputs, &args.output, args.policy.into())
}

fn execute_prompt(args: PromptArgs) -> Result<MergeSummary> {
    let retry = match args.max_attempts {
        Some(limit) => RetryPolicy::MaxAttempts(limit),
        None => RetryPolicy::Unbounded,
    };
    let mut prompter = LinePrompter::new();
    pipeline::run_prompted(&mut prompter, retry, args.policy.into())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge spreadsheet and CSV files into one workbook."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the given input files in one shot.
    Merge(MergeArgs),
    /// Collect the input files interactively, one prompt at a time.
    Prompt(PromptArgs),
}

#[derive(clap::Args)]
struct MergeArgs {
    /// Input files to merge, in order (.xlsx, .xls, .xlsm, or .csv).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output workbook path.
    #[arg(long, default_value = collect::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Column-alignment policy applied when concatenating.
    #[arg(long, value_enum, default_value_t = MergePolicyKind::Strict)]
    policy: MergePolicyKind,
}

#[derive(clap::Args)]
struct PromptArgs {
    /// Give up after this many invalid answers per prompt.
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Column-alignment policy applied when concatenating.
    #[arg(long, value_enum, default_value_t = MergePolicyKind::Strict)]
    policy: MergePolicyKind,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum MergePolicyKind {
    /// Fail if input column sets differ.
    Strict,
    /// Merge columns by name and fill gaps with empty cells.
    Union,
}

impl From<MergePolicyKind> for MergePolicy {
    fn from(kind: MergePolicyKind) -> Self {
        match kind {
            MergePolicyKind::Strict => MergePolicy::Strict,
            MergePolicyKind::Union => MergePolicy::UnionWithFill,
        }
    }
}

/// Line-oriented prompt flow over stdin, with feedback on stderr.
struct LinePrompter {
    input: std::io::Stdin,
}

impl LinePrompter {
    fn new() -> Self {
        Self {
            input: std::io::stdin(),
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{prompt}")?;
        stderr.flush()?;

        let mut line = String::new();
        let bytes = self.input.lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(MergeError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        Ok(line)
    }
}

impl Prompter for LinePrompter {
    fn ask_count(&mut self) -> Result<String> {
        self.ask("Number of files to merge: ")
    }

    fn ask_path(&mut self, slot: usize, total: usize) -> Result<String> {
        self.ask(&format!("Path of file {} of {total}: ", slot + 1))
    }

    fn ask_output(&mut self) -> Result<String> {
        self.ask(&format!(
            "Output path (empty for {}): ",
            collect::DEFAULT_OUTPUT
        ))
    }

    fn notify_rejection(&mut self, message: &str) {
        eprintln!("invalid input: {message}");
    }
}
