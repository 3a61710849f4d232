//! Analysis modules: one independent analyzer per quality facet.

mod correlation;
mod data_types;
mod describe;
mod distribution;
mod duplicates;
mod missing;
mod outliers;

pub use correlation::CorrelationAnalyzer;
pub use data_types::DataTypesAnalyzer;
pub use describe::BasicStatisticsAnalyzer;
pub use distribution::DistributionAnalyzer;
pub use duplicates::DuplicatesAnalyzer;
pub use missing::MissingValuesAnalyzer;
pub use outliers::OutliersAnalyzer;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Block;

/// Trait for analyzers.
///
/// Each analyzer reads the shared dataset and produces one report block.
/// Degenerate input (zero rows, zero columns, zero numeric columns) is a
/// well-formed empty result, not an error; `Err` is reserved for genuine
/// module failures and is isolated by the pipeline.
pub trait Analyzer {
    /// Stable block name, also the report sheet name.
    fn name(&self) -> &'static str;

    /// Run the analysis and return the block.
    fn analyze(&self, dataset: &Dataset) -> Result<Block>;
}
