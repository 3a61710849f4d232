//! Typed column storage and cell identity.

use std::collections::HashSet;
use std::mem;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Semantic type of a column, decided once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Floating-point or integer values.
    Numeric,
    /// Text or low-cardinality categorical values.
    Categorical,
    /// Date and/or time values.
    Temporal,
    /// Boolean values (true/false).
    Boolean,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }

    /// Get a human-readable label for the type.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
            ColumnType::Temporal => "temporal",
            ColumnType::Boolean => "boolean",
        }
    }
}

/// Cell storage for one column; `None` is the uniform null marker.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
    Temporal(Vec<Option<NaiveDateTime>>),
    Boolean(Vec<Option<bool>>),
}

impl ColumnData {
    /// Number of cells, including nulls.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Categorical(v) => v.len(),
            ColumnData::Temporal(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
        }
    }

    /// True if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The column type tag for this storage.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Numeric(_) => ColumnType::Numeric,
            ColumnData::Categorical(_) => ColumnType::Categorical,
            ColumnData::Temporal(_) => ColumnType::Temporal,
            ColumnData::Boolean(_) => ColumnType::Boolean,
        }
    }
}

/// Hashable identity of a single cell, used for row-level equality and
/// distinct counts. Numeric cells compare by bit pattern so the identity
/// is total even though `f64` itself is not `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellKey {
    Null,
    Num(u64),
    Text(String),
    Time(i64),
    Bool(bool),
}

/// A named, typed column.
#[derive(Debug, Clone)]
pub struct Column {
    /// Column name (unique within a dataset).
    pub name: String,
    /// Typed cell storage.
    pub data: ColumnData,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// The column's type tag.
    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// Number of cells, including nulls.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the cell at `row` is null. Out-of-range rows count as null.
    pub fn is_null(&self, row: usize) -> bool {
        match &self.data {
            ColumnData::Numeric(v) => v.get(row).map_or(true, |c| c.is_none()),
            ColumnData::Categorical(v) => v.get(row).map_or(true, |c| c.is_none()),
            ColumnData::Temporal(v) => v.get(row).map_or(true, |c| c.is_none()),
            ColumnData::Boolean(v) => v.get(row).map_or(true, |c| c.is_none()),
        }
    }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Categorical(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Temporal(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Boolean(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Number of distinct non-null values.
    pub fn unique_count(&self) -> usize {
        let mut seen: HashSet<CellKey> = HashSet::new();
        for row in 0..self.len() {
            let key = self.cell_key(row);
            if key != CellKey::Null {
                seen.insert(key);
            }
        }
        seen.len()
    }

    /// Hashable identity of the cell at `row`.
    pub fn cell_key(&self, row: usize) -> CellKey {
        match &self.data {
            ColumnData::Numeric(v) => match v.get(row).copied().flatten() {
                Some(x) => CellKey::Num(x.to_bits()),
                None => CellKey::Null,
            },
            ColumnData::Categorical(v) => match v.get(row).and_then(|c| c.as_ref()) {
                Some(s) => CellKey::Text(s.clone()),
                None => CellKey::Null,
            },
            ColumnData::Temporal(v) => match v.get(row).copied().flatten() {
                Some(t) => CellKey::Time(t.and_utc().timestamp()),
                None => CellKey::Null,
            },
            ColumnData::Boolean(v) => match v.get(row).copied().flatten() {
                Some(b) => CellKey::Bool(b),
                None => CellKey::Null,
            },
        }
    }

    /// Non-null numeric values in row order; `None` for non-numeric columns.
    pub fn numeric_values(&self) -> Option<Vec<f64>> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v.iter().filter_map(|c| *c).collect()),
            _ => None,
        }
    }

    /// Raw numeric cells including nulls; `None` for non-numeric columns.
    pub fn numeric_cells(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            _ => None,
        }
    }

    /// Estimated in-memory footprint of this column in bytes.
    pub fn estimated_bytes(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len() * mem::size_of::<Option<f64>>(),
            ColumnData::Temporal(v) => v.len() * mem::size_of::<Option<NaiveDateTime>>(),
            ColumnData::Boolean(v) => v.len() * mem::size_of::<Option<bool>>(),
            ColumnData::Categorical(v) => {
                let heap: usize = v
                    .iter()
                    .filter_map(|c| c.as_ref())
                    .map(|s| s.len())
                    .sum();
                v.len() * mem::size_of::<Option<String>>() + heap
            }
        }
    }
}
