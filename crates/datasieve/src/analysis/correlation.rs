//! Pairwise Pearson correlation across numeric columns.

use super::Analyzer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Block;
use crate::stats;

/// Correlation matrix block: one row per numeric column, one field per
/// numeric column. Coefficients use pairwise-complete observations (a
/// row is skipped for a pair when either cell is null). Zero-variance
/// columns get no coefficients at all, including on the diagonal.
pub struct CorrelationAnalyzer;

impl Analyzer for CorrelationAnalyzer {
    fn name(&self) -> &'static str {
        "correlation"
    }

    fn analyze(&self, dataset: &Dataset) -> Result<Block> {
        let mut block = Block::new(self.name());

        let names: Vec<&str> = dataset.numeric_column_names().collect();
        // A matrix needs at least two columns; success with an empty
        // block otherwise
        if names.len() < 2 {
            return Ok(block);
        }

        for &row_name in &names {
            let row_has_variance = nonzero_variance(dataset, row_name);
            let row = block.row(row_name.to_string());

            for &col_name in &names {
                if row_name == col_name {
                    if row_has_variance {
                        row.insert(col_name.to_string(), 1.0.into());
                    }
                    continue;
                }

                if let Some(r) = pairwise_pearson(dataset, row_name, col_name) {
                    row.insert(col_name.to_string(), r.into());
                }
            }
        }

        Ok(block)
    }
}

fn nonzero_variance(dataset: &Dataset, name: &str) -> bool {
    dataset
        .numeric_values(name)
        .as_deref()
        .and_then(stats::sample_variance)
        .is_some_and(|v| v > 0.0)
}

/// Pearson coefficient over rows where both columns are non-null.
fn pairwise_pearson(dataset: &Dataset, a: &str, b: &str) -> Option<f64> {
    let cells_a = dataset.column(a)?.numeric_cells()?;
    let cells_b = dataset.column(b)?.numeric_cells()?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (va, vb) in cells_a.iter().zip(cells_b) {
        if let (Some(va), Some(vb)) = (va, vb) {
            x.push(*va);
            y.push(*vb);
        }
    }

    stats::pearson(&x, &y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, ColumnData};
    use crate::report::Field;

    fn dataset(columns: Vec<(&str, Vec<Option<f64>>)>) -> Dataset {
        Dataset::from_columns(
            columns
                .into_iter()
                .map(|(name, cells)| Column::new(name, ColumnData::Numeric(cells)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_perfectly_correlated_pair() {
        let ds = dataset(vec![
            ("a", vec![Some(1.0), Some(2.0), Some(3.0)]),
            ("b", vec![Some(2.0), Some(4.0), Some(6.0)]),
        ]);
        let block = CorrelationAnalyzer.analyze(&ds).unwrap();

        let r = block.field("a", "b").and_then(|f| f.as_f64()).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        assert_eq!(block.field("a", "a"), Some(&Field::Num(1.0)));
        assert_eq!(block.field("b", "b"), Some(&Field::Num(1.0)));
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let ds = dataset(vec![
            ("a", vec![Some(1.0), Some(5.0), Some(2.0), Some(4.0)]),
            ("b", vec![Some(3.0), Some(1.0), Some(4.0), Some(2.0)]),
            ("c", vec![Some(0.5), Some(2.5), Some(1.5), Some(3.5)]),
        ]);
        let block = CorrelationAnalyzer.analyze(&ds).unwrap();

        for x in ["a", "b", "c"] {
            for y in ["a", "b", "c"] {
                assert_eq!(block.field(x, y), block.field(y, x));
            }
        }
    }

    #[test]
    fn test_zero_variance_column_not_computed() {
        let ds = dataset(vec![
            ("constant", vec![Some(1.0), Some(1.0), Some(1.0)]),
            ("varying", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ]);
        let block = CorrelationAnalyzer.analyze(&ds).unwrap();

        assert!(block.field("constant", "constant").is_none());
        assert!(block.field("constant", "varying").is_none());
        assert!(block.field("varying", "constant").is_none());
        assert_eq!(block.field("varying", "varying"), Some(&Field::Num(1.0)));
    }

    #[test]
    fn test_pairwise_complete_skips_nulls() {
        let ds = dataset(vec![
            ("a", vec![Some(1.0), None, Some(3.0), Some(4.0)]),
            ("b", vec![Some(2.0), Some(9.0), Some(6.0), Some(8.0)]),
        ]);
        let block = CorrelationAnalyzer.analyze(&ds).unwrap();

        // Complete pairs are (1,2),(3,6),(4,8): perfectly linear
        let r = block.field("a", "b").and_then(|f| f.as_f64()).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fewer_than_two_numeric_columns_empty() {
        let ds = dataset(vec![("only", vec![Some(1.0), Some(2.0)])]);
        let block = CorrelationAnalyzer.analyze(&ds).unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn test_mixed_types_restrict_to_numeric() {
        let ds = Dataset::from_columns(vec![
            Column::new("a", ColumnData::Numeric(vec![Some(1.0), Some(2.0)])),
            Column::new(
                "label",
                ColumnData::Categorical(vec![Some("x".into()), Some("y".into())]),
            ),
            Column::new("b", ColumnData::Numeric(vec![Some(2.0), Some(1.0)])),
        ])
        .unwrap();

        let block = CorrelationAnalyzer.analyze(&ds).unwrap();
        assert_eq!(block.row_count(), 2);
        assert!(block.field("label", "a").is_none());
    }
}
