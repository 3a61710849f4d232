//! Datasieve: data-quality diagnostics for tabular ML datasets.
//!
//! Datasieve inspects a dataset at rest and reports the quality facets
//! that matter before modeling: missing values, duplicate records,
//! distribution shape, outliers, and inter-column correlation.
//!
//! # Core Principles
//!
//! - **Read-only**: the dataset is never modified; every module is an
//!   observer
//! - **Partial-tolerant**: a failing module costs its report block, not
//!   the run
//! - **Deterministic**: identical input produces an identical report
//!
//! # Example
//!
//! ```no_run
//! use datasieve::Sieve;
//!
//! let sieve = Sieve::new();
//! let result = sieve.analyze("train.csv").unwrap();
//!
//! println!("Blocks: {}", result.report.blocks.len());
//! println!("Failures: {}", result.failures.len());
//! ```

pub mod analysis;
pub mod charts;
pub mod dataset;
pub mod error;
pub mod input;
pub mod report;
pub mod stats;
pub mod writer;

mod pipeline;

pub use crate::pipeline::{
    ModuleFailure, Pipeline, PipelineOutcome, QualityReport, Sieve, SieveConfig,
};
pub use dataset::{build_dataset, Column, ColumnData, ColumnType, Dataset};
pub use error::{Result, SieveError};
pub use input::{Parser, ParserConfig, RawTable, SourceMetadata};
pub use report::{Block, Field, Report};
pub use writer::ReportWriter;
