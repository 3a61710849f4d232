//! Pipeline orchestration and the top-level analysis API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{
    Analyzer, BasicStatisticsAnalyzer, CorrelationAnalyzer, DataTypesAnalyzer,
    DistributionAnalyzer, DuplicatesAnalyzer, MissingValuesAnalyzer, OutliersAnalyzer,
};
use crate::dataset::{build_dataset, Dataset};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::report::Report;

/// A module that failed during a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFailure {
    /// Block name of the failed module.
    pub module: String,
    /// Rendered cause.
    pub cause: String,
}

/// Outcome of one pipeline run: whatever blocks succeeded, plus the
/// failures that explain any absent blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub report: Report,
    pub failures: Vec<ModuleFailure>,
}

/// Runs every analyzer exactly once against one shared dataset.
///
/// Module failures are isolated: a failing analyzer is logged and
/// recorded, and the remaining modules still run. The outcome value is
/// only constructed after all modules have been attempted, so holding a
/// [`PipelineOutcome`] means the run is complete.
pub struct Pipeline {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl Pipeline {
    /// Create a pipeline with the full analyzer set in publish order.
    pub fn new() -> Self {
        Self {
            analyzers: vec![
                Box::new(DataTypesAnalyzer),
                Box::new(BasicStatisticsAnalyzer),
                Box::new(MissingValuesAnalyzer),
                Box::new(DuplicatesAnalyzer),
                Box::new(DistributionAnalyzer),
                Box::new(OutliersAnalyzer),
                Box::new(CorrelationAnalyzer),
            ],
        }
    }

    /// Create a pipeline from a custom analyzer list.
    pub fn with_analyzers(analyzers: Vec<Box<dyn Analyzer>>) -> Self {
        Self { analyzers }
    }

    /// Run all analyzers and assemble the report.
    pub fn run(&self, dataset: &Dataset) -> PipelineOutcome {
        let mut report = Report::new();
        let mut failures = Vec::new();

        for analyzer in &self.analyzers {
            match analyzer.analyze(dataset) {
                Ok(block) => report.push(block),
                Err(err) => {
                    tracing::warn!(
                        module = analyzer.name(),
                        error = %err,
                        "analysis module failed; block omitted from report"
                    );
                    failures.push(ModuleFailure {
                        module: analyzer.name().to_string(),
                        cause: err.to_string(),
                    });
                }
            }
        }

        PipelineOutcome { report, failures }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`Sieve`] analysis.
#[derive(Debug, Clone, Default)]
pub struct SieveConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// Result of analyzing a data file end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Report blocks that succeeded, in publish order.
    pub report: Report,
    /// Modules that failed (their blocks are absent).
    pub failures: Vec<ModuleFailure>,
}

/// The main analysis engine: load a file, type its columns, run the
/// pipeline.
pub struct Sieve {
    parser: Parser,
    pipeline: Pipeline,
}

impl Sieve {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(SieveConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: SieveConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            pipeline: Pipeline::new(),
        }
    }

    /// Analyze a data file and produce a quality report.
    ///
    /// Load errors are fatal and returned as `Err`; module failures are
    /// not, and surface in [`QualityReport::failures`].
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<QualityReport> {
        let (raw, source) = self.parser.parse_file(path)?;
        let dataset = build_dataset(&raw)?;
        let outcome = self.pipeline.run(&dataset);

        Ok(QualityReport {
            source,
            report: outcome.report,
            failures: outcome.failures,
        })
    }

    /// Load a file into a typed dataset without running the pipeline.
    ///
    /// Useful for handing raw columns to an external chart renderer
    /// alongside the report.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let (raw, source) = self.parser.parse_file(path)?;
        Ok((build_dataset(&raw)?, source))
    }
}

impl Default for Sieve {
    fn default() -> Self {
        Self::new()
    }
}
