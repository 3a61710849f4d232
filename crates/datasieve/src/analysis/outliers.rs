//! Outlier detection via the Tukey fence (IQR method).

use super::Analyzer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Block;
use crate::stats;

/// Fence width in interquartile ranges.
const IQR_MULTIPLIER: f64 = 1.5;

/// Per numeric column: count and percentage of values strictly outside
/// `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`. Nulls are excluded from the quantile
/// computation and the count; the percentage denominator is the table
/// row count.
pub struct OutliersAnalyzer;

impl Analyzer for OutliersAnalyzer {
    fn name(&self) -> &'static str {
        "outliers"
    }

    fn analyze(&self, dataset: &Dataset) -> Result<Block> {
        let mut block = Block::new(self.name());
        let row_count = dataset.row_count();

        for name in dataset.numeric_column_names() {
            let values = dataset.numeric_values(name).unwrap_or_default();

            let count = match fence(&values) {
                Some((lower, upper)) => values
                    .iter()
                    .filter(|&&v| v < lower || v > upper)
                    .count(),
                None => 0,
            };

            let pct = if row_count == 0 {
                0.0
            } else {
                stats::round2(count as f64 / row_count as f64 * 100.0)
            };

            let row = block.row(name.to_string());
            row.insert("Outliers Count".to_string(), count.into());
            row.insert("Outliers Percentage".to_string(), pct.into());
        }

        Ok(block)
    }
}

/// Tukey fence bounds from linearly interpolated quartiles.
fn fence(values: &[f64]) -> Option<(f64, f64)> {
    let q1 = stats::quantile(values, 0.25)?;
    let q3 = stats::quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some((q1 - IQR_MULTIPLIER * iqr, q3 + IQR_MULTIPLIER * iqr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, ColumnData};
    use crate::report::Field;

    fn numeric_dataset(cells: Vec<Option<f64>>) -> Dataset {
        Dataset::from_columns(vec![Column::new("x", ColumnData::Numeric(cells))]).unwrap()
    }

    #[test]
    fn test_extreme_value_flagged() {
        let mut cells: Vec<Option<f64>> = (0..20).map(|i| Some((i % 7) as f64 - 3.0)).collect();
        cells.push(Some(100.0));
        let ds = numeric_dataset(cells);

        let block = OutliersAnalyzer.analyze(&ds).unwrap();
        let count = block
            .field("x", "Outliers Count")
            .and_then(|f| f.as_f64())
            .unwrap();
        assert!(count >= 1.0);
    }

    #[test]
    fn test_constant_column_has_no_outliers() {
        let ds = numeric_dataset(vec![Some(7.0); 12]);
        let block = OutliersAnalyzer.analyze(&ds).unwrap();

        assert_eq!(block.field("x", "Outliers Count"), Some(&Field::Int(0)));
        assert_eq!(
            block.field("x", "Outliers Percentage"),
            Some(&Field::Num(0.0))
        );
    }

    #[test]
    fn test_mostly_constant_column_flags_deviants() {
        // Q1 == Q3, so the fence collapses to the constant and any other
        // value is an outlier
        let mut cells = vec![Some(1.0); 20];
        cells.push(Some(2.0));
        let ds = numeric_dataset(cells);

        let block = OutliersAnalyzer.analyze(&ds).unwrap();
        assert_eq!(block.field("x", "Outliers Count"), Some(&Field::Int(1)));
    }

    #[test]
    fn test_nulls_excluded() {
        let mut cells: Vec<Option<f64>> = (0..10).map(|i| Some(i as f64)).collect();
        cells.extend(vec![None; 10]);
        let ds = numeric_dataset(cells);

        let block = OutliersAnalyzer.analyze(&ds).unwrap();
        assert_eq!(block.field("x", "Outliers Count"), Some(&Field::Int(0)));
    }

    #[test]
    fn test_all_null_column_reports_zero() {
        let ds = numeric_dataset(vec![None, None, None]);
        let block = OutliersAnalyzer.analyze(&ds).unwrap();

        assert_eq!(block.field("x", "Outliers Count"), Some(&Field::Int(0)));
        assert_eq!(
            block.field("x", "Outliers Percentage"),
            Some(&Field::Num(0.0))
        );
    }

    #[test]
    fn test_no_numeric_columns_empty_block() {
        let ds = Dataset::from_columns(vec![Column::new(
            "label",
            ColumnData::Categorical(vec![Some("a".into())]),
        )])
        .unwrap();

        let block = OutliersAnalyzer.analyze(&ds).unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let cells: Vec<Option<f64>> = (0..50).map(|i| Some(((i * 37) % 11) as f64)).collect();
        let ds = numeric_dataset(cells);

        let first = OutliersAnalyzer.analyze(&ds).unwrap();
        let second = OutliersAnalyzer.analyze(&ds).unwrap();
        assert_eq!(first, second);
    }
}
