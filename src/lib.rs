//! Core library for the tablemerge command line application.
//!
//! The library exposes the pipeline that merges multiple spreadsheet-like
//! files into one workbook. The modules are structured to keep
//! responsibilities narrow and composable: extension gating lives in
//! [`classify`], path collection and prompt abstraction in [`collect`], the
//! format readers and the workbook writer under [`io`], row-wise
//! concatenation in [`merge`], and the run orchestration in [`pipeline`].

pub mod classify;
pub mod collect;
pub mod error;
pub mod io;
pub mod merge;
pub mod model;
pub mod pipeline;

pub use error::{MergeError, Result};
