//! Whole-row duplicate detection.

use std::collections::HashSet;

use super::Analyzer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Block;
use crate::stats;

/// Row label for the single summary row.
const SUMMARY_ROW: &str = "dataset";

/// Counts rows that repeat an earlier row, comparing all cells including
/// null markers. The first occurrence of each distinct row is the
/// original; later identical rows are duplicates.
pub struct DuplicatesAnalyzer;

impl Analyzer for DuplicatesAnalyzer {
    fn name(&self) -> &'static str {
        "duplicates"
    }

    fn analyze(&self, dataset: &Dataset) -> Result<Block> {
        let row_count = dataset.row_count();

        let mut seen = HashSet::new();
        let mut duplicates = 0usize;
        for row in 0..row_count {
            if !seen.insert(dataset.row_key(row)) {
                duplicates += 1;
            }
        }
        let unique = seen.len();

        let pct = if row_count == 0 {
            0.0
        } else {
            stats::round2(duplicates as f64 / row_count as f64 * 100.0)
        };

        let mut block = Block::new(self.name());
        let row = block.row(SUMMARY_ROW);
        row.insert("Total Duplicates".to_string(), duplicates.into());
        row.insert("Duplicate Percentage".to_string(), pct.into());
        row.insert("Total Unique Records".to_string(), unique.into());

        Ok(block)
    }
}
