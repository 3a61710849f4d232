//! Missing-value counts and percentages per column.

use super::Analyzer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Block;
use crate::stats;

/// Reports null count and null percentage for every column.
pub struct MissingValuesAnalyzer;

impl Analyzer for MissingValuesAnalyzer {
    fn name(&self) -> &'static str {
        "missing_values"
    }

    fn analyze(&self, dataset: &Dataset) -> Result<Block> {
        let mut block = Block::new(self.name());
        let row_count = dataset.row_count();

        for column in dataset.columns() {
            let null_count = column.null_count();
            // rowCount == 0 would divide by zero; 0% by convention
            let pct = if row_count == 0 {
                0.0
            } else {
                stats::round2(null_count as f64 / row_count as f64 * 100.0)
            };

            let row = block.row(column.name.clone());
            row.insert("Missing Count".to_string(), null_count.into());
            row.insert("Missing Percentage".to_string(), pct.into());
        }

        Ok(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, ColumnData};
    use crate::report::Field;

    #[test]
    fn test_counts_and_percentages() {
        let dataset = Dataset::from_columns(vec![
            Column::new(
                "x",
                ColumnData::Numeric(vec![Some(1.0), None, None, Some(4.0)]),
            ),
            Column::new(
                "y",
                ColumnData::Categorical(vec![Some("a".into()); 4]),
            ),
        ])
        .unwrap();

        let block = MissingValuesAnalyzer.analyze(&dataset).unwrap();

        assert_eq!(block.field("x", "Missing Count"), Some(&Field::Int(2)));
        assert_eq!(block.field("x", "Missing Percentage"), Some(&Field::Num(50.0)));
        assert_eq!(block.field("y", "Missing Count"), Some(&Field::Int(0)));
        assert_eq!(block.field("y", "Missing Percentage"), Some(&Field::Num(0.0)));
    }

    #[test]
    fn test_percentage_rounded_to_two_decimals() {
        let mut cells = vec![Some(1.0); 3];
        cells.push(None);
        cells.extend(vec![Some(1.0); 2]);
        let dataset =
            Dataset::from_columns(vec![Column::new("x", ColumnData::Numeric(cells))]).unwrap();

        let block = MissingValuesAnalyzer.analyze(&dataset).unwrap();
        // 1/6 -> 16.666... -> 16.67
        assert_eq!(
            block.field("x", "Missing Percentage"),
            Some(&Field::Num(16.67))
        );
    }

    #[test]
    fn test_zero_rows_percentage_is_zero() {
        let dataset =
            Dataset::from_columns(vec![Column::new("x", ColumnData::Numeric(vec![]))]).unwrap();

        let block = MissingValuesAnalyzer.analyze(&dataset).unwrap();
        assert_eq!(block.field("x", "Missing Count"), Some(&Field::Int(0)));
        assert_eq!(block.field("x", "Missing Percentage"), Some(&Field::Num(0.0)));
    }
}
