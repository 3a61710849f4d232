//! Column descriptor block: type, memory footprint, cardinality.

use super::Analyzer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::report::Block;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Reports every column's type tag, estimated memory footprint, and
/// distinct non-null value count.
pub struct DataTypesAnalyzer;

impl Analyzer for DataTypesAnalyzer {
    fn name(&self) -> &'static str {
        "data_types"
    }

    fn analyze(&self, dataset: &Dataset) -> Result<Block> {
        let mut block = Block::new(self.name());

        for column in dataset.columns() {
            let row = block.row(column.name.clone());
            row.insert(
                "Data Type".to_string(),
                column.column_type().label().into(),
            );
            row.insert(
                "Memory Usage (MB)".to_string(),
                (column.estimated_bytes() as f64 / BYTES_PER_MB).into(),
            );
            row.insert("Unique Values".to_string(), column.unique_count().into());
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
    fn test_reports_every_column() {
        let dataset = Dataset::from_columns(vec![
            Column::new("x", ColumnData::Numeric(vec![Some(1.0), Some(2.0), Some(1.0)])),
            Column::new(
                "label",
                ColumnData::Categorical(vec![Some("a".into()), None, Some("b".into())]),
            ),
        ])
        .unwrap();

        let block = DataTypesAnalyzer.analyze(&dataset).unwrap();

        assert_eq!(block.row_count(), 2);
        assert_eq!(
            block.field("x", "Data Type"),
            Some(&Field::Text("numeric".into()))
        );
        assert_eq!(block.field("x", "Unique Values"), Some(&Field::Int(2)));
        assert_eq!(block.field("label", "Unique Values"), Some(&Field::Int(2)));

        let mb = block
            .field("x", "Memory Usage (MB)")
            .and_then(|f| f.as_f64())
            .unwrap();
        assert!(mb > 0.0);
    }

    #[test]
    fn test_zero_columns_empty_block() {
        let dataset = Dataset::from_columns(vec![]).unwrap();
        let block = DataTypesAnalyzer.analyze(&dataset).unwrap();
        assert!(block.is_empty());
    }
}
