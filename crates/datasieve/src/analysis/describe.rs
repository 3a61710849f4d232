//! Whole-table descriptive statistics, numeric and non-numeric alike.

use indexmap::IndexMap;

use super::Analyzer;
use crate::dataset::{Column, ColumnData, Dataset};
use crate::error::Result;
use crate::report::Block;
use crate::stats;

/// Describe-all block: count for every column, mean/std/quartiles for
/// numeric columns, cardinality and modal value for everything else.
pub struct BasicStatisticsAnalyzer;

impl Analyzer for BasicStatisticsAnalyzer {
    fn name(&self) -> &'static str {
        "basic_statistics"
    }

    fn analyze(&self, dataset: &Dataset) -> Result<Block> {
        let mut block = Block::new(self.name());

        for column in dataset.columns() {
            let row = block.row(column.name.clone());
            let non_null = column.len() - column.null_count();
            row.insert("Count".to_string(), non_null.into());

            if let Some(values) = column.numeric_values() {
                if let Some(mean) = stats::mean(&values) {
                    row.insert("Mean".to_string(), mean.into());
                }
                if let Some(std) = stats::sample_std(&values) {
                    row.insert("Std".to_string(), std.into());
                }
                if let Some(min) = stats::quantile(&values, 0.0) {
                    row.insert("Min".to_string(), min.into());
                }
                if let Some(q1) = stats::quantile(&values, 0.25) {
                    row.insert("25%".to_string(), q1.into());
                }
                if let Some(q2) = stats::quantile(&values, 0.5) {
                    row.insert("50%".to_string(), q2.into());
                }
                if let Some(q3) = stats::quantile(&values, 0.75) {
                    row.insert("75%".to_string(), q3.into());
                }
                if let Some(max) = stats::quantile(&values, 1.0) {
                    row.insert("Max".to_string(), max.into());
                }
            } else {
                row.insert("Unique".to_string(), column.unique_count().into());
                if let Some((top, freq)) = modal_value(column) {
                    row.insert("Top".to_string(), top.into());
                    row.insert("Freq".to_string(), freq.into());
                }
            }
        }

        Ok(block)
    }
}

/// Most frequent non-null value and its count. Ties resolve to the value
/// first seen in row order.
fn modal_value(column: &Column) -> Option<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    match &column.data {
        ColumnData::Categorical(cells) => {
            for cell in cells.iter().flatten() {
                *counts.entry(cell.clone()).or_insert(0) += 1;
            }
        }
        ColumnData::Boolean(cells) => {
            for cell in cells.iter().flatten() {
                *counts.entry(cell.to_string()).or_insert(0) += 1;
            }
        }
        ColumnData::Temporal(cells) => {
            for cell in cells.iter().flatten() {
                *counts
                    .entry(cell.format("%Y-%m-%d %H:%M:%S").to_string())
                    .or_insert(0) += 1;
            }
        }
        ColumnData::Numeric(_) => return None,
    }

    let mut best: Option<(&String, usize)> = None;
    for (value, &count) in &counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, count)| (value.clone(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, ColumnData};
    use crate::report::Field;

    #[test]
    fn test_numeric_describe_fields() {
        let dataset = Dataset::from_columns(vec![Column::new(
            "x",
            ColumnData::Numeric(vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), None]),
        )])
        .unwrap();

        let block = BasicStatisticsAnalyzer.analyze(&dataset).unwrap();

        assert_eq!(block.field("x", "Count"), Some(&Field::Int(4)));
        assert_eq!(block.field("x", "Mean"), Some(&Field::Num(2.5)));
        assert_eq!(block.field("x", "Min"), Some(&Field::Num(1.0)));
        assert_eq!(block.field("x", "Max"), Some(&Field::Num(4.0)));
        assert_eq!(block.field("x", "50%"), Some(&Field::Num(2.5)));
        assert!(block.field("x", "Top").is_none());
    }

    #[test]
    fn test_categorical_top_and_freq() {
        let dataset = Dataset::from_columns(vec![Column::new(
            "cat",
            ColumnData::Categorical(vec![
                Some("B".into()),
                Some("A".into()),
                Some("B".into()),
                None,
            ]),
        )])
        .unwrap();

        let block = BasicStatisticsAnalyzer.analyze(&dataset).unwrap();

        assert_eq!(block.field("cat", "Count"), Some(&Field::Int(3)));
        assert_eq!(block.field("cat", "Unique"), Some(&Field::Int(2)));
        assert_eq!(block.field("cat", "Top"), Some(&Field::Text("B".into())));
        assert_eq!(block.field("cat", "Freq"), Some(&Field::Int(2)));
        assert!(block.field("cat", "Mean").is_none());
    }

    #[test]
    fn test_modal_tie_breaks_to_first_seen() {
        let column = Column::new(
            "cat",
            ColumnData::Categorical(vec![
                Some("x".into()),
                Some("y".into()),
                Some("y".into()),
                Some("x".into()),
            ]),
        );
        assert_eq!(modal_value(&column), Some(("x".to_string(), 2)));
    }

    #[test]
    fn test_empty_column_count_only() {
        let dataset = Dataset::from_columns(vec![Column::new(
            "empty",
            ColumnData::Categorical(vec![None, None]),
        )])
        .unwrap();

        let block = BasicStatisticsAnalyzer.analyze(&dataset).unwrap();
        assert_eq!(block.field("empty", "Count"), Some(&Field::Int(0)));
        assert!(block.field("empty", "Top").is_none());
    }

    #[test]
    fn test_single_value_numeric_has_no_std() {
        let dataset = Dataset::from_columns(vec![Column::new(
            "x",
            ColumnData::Numeric(vec![Some(7.0)]),
        )])
        .unwrap();

        let block = BasicStatisticsAnalyzer.analyze(&dataset).unwrap();
        assert_eq!(block.field("x", "Mean"), Some(&Field::Num(7.0)));
        assert!(block.field("x", "Std").is_none());
    }
}
