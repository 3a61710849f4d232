//! Distribution shape of numeric columns.

use super::Analyzer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Block;
use crate::stats;

/// Per numeric column: skewness, kurtosis, mean, median, and sample
/// standard deviation. Statistics whose preconditions fail (too few
/// values, zero variance) are left absent.
pub struct DistributionAnalyzer;

impl Analyzer for DistributionAnalyzer {
    fn name(&self) -> &'static str {
        "distribution"
    }

    fn analyze(&self, dataset: &Dataset) -> Result<Block> {
        let mut block = Block::new(self.name());

        for name in dataset.numeric_column_names() {
            let values = dataset.numeric_values(name).unwrap_or_default();
            let row = block.row(name.to_string());

            if let Some(skew) = stats::skewness(&values) {
                row.insert("Skewness".to_string(), skew.into());
            }
            if let Some(kurt) = stats::kurtosis(&values) {
                row.insert("Kurtosis".to_string(), kurt.into());
            }
            if let Some(mean) = stats::mean(&values) {
                row.insert("Mean".to_string(), mean.into());
            }
            if let Some(median) = stats::median(&values) {
                row.insert("Median".to_string(), median.into());
            }
            if let Some(std) = stats::sample_std(&values) {
                row.insert("Std".to_string(), std.into());
            }
        }

        Ok(block)
    }
}
