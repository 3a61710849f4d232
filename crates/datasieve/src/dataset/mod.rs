//! In-memory tabular dataset with typed, nullable columns.

mod builder;
mod column;

pub use builder::build_dataset;
pub use column::{CellKey, Column, ColumnData, ColumnType};

use crate::error::{Result, SieveError};

/// An immutable table of named, typed columns.
///
/// Constructed once at analysis start; analyzers only ever hold a shared
/// reference, so the data cannot change during a run.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from typed columns.
    ///
    /// Fails if column names collide or column lengths disagree.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, |c| c.len());

        for col in &columns {
            if col.len() != row_count {
                return Err(SieveError::InvalidDataset(format!(
                    "column '{}' has {} rows, expected {}",
                    col.name,
                    col.len(),
                    row_count
                )));
            }
        }

        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|other| other.name == col.name) {
                return Err(SieveError::InvalidDataset(format!(
                    "duplicate column name '{}'",
                    col.name
                )));
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Number of rows shared by all columns.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of numeric columns, in table order.
    pub fn numeric_column_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.column_type().is_numeric())
            .map(|c| c.name.as_str())
    }

    /// Whether the cell at (`row`, `column`) is null.
    ///
    /// Unknown columns and out-of-range rows count as null.
    pub fn is_null(&self, row: usize, column: &str) -> bool {
        self.column(column).map_or(true, |c| c.is_null(row))
    }

    /// Non-null numeric values of a column, in row order.
    ///
    /// `None` if the column is missing or not numeric.
    pub fn numeric_values(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name)?.numeric_values()
    }

    /// Hashable identity of a full row, for whole-row equality.
    pub fn row_key(&self, row: usize) -> Vec<CellKey> {
        self.columns.iter().map(|c| c.cell_key(row)).collect()
    }
}
