//! Structured report model: named blocks of labeled rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One named field value inside a report row.
///
/// A statistic that could not be computed is simply absent from the row,
/// never encoded as a sentinel number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Int(i64),
    Num(f64),
    Text(String),
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Num(value)
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Int(value)
    }
}

impl From<usize> for Field {
    fn from(value: usize) -> Self {
        Field::Int(value as i64)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl Field {
    /// Numeric view of the field, if it carries a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Int(v) => Some(*v as f64),
            Field::Num(v) => Some(*v),
            Field::Text(_) => None,
        }
    }

    /// Render the field for tabular output.
    pub fn render(&self) -> String {
        match self {
            Field::Int(v) => v.to_string(),
            Field::Num(v) => format!("{v}"),
            Field::Text(v) => v.clone(),
        }
    }
}

/// One analyzer's output: an ordered mapping from row label to named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block name (stable identifier, also the output sheet name).
    pub name: String,
    /// Row label -> field name -> value, both in insertion order.
    pub rows: IndexMap<String, IndexMap<String, Field>>,
}

impl Block {
    /// Create an empty block.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: IndexMap::new(),
        }
    }

    /// Access (creating if needed) the fields of a labeled row.
    pub fn row(&mut self, label: impl Into<String>) -> &mut IndexMap<String, Field> {
        self.rows.entry(label.into()).or_default()
    }

    /// Look up a field by row label and field name.
    pub fn field(&self, label: &str, field: &str) -> Option<&Field> {
        self.rows.get(label)?.get(field)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True if the block has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All field names appearing in any row, in first-seen order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for fields in self.rows.values() {
            for name in fields.keys() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// The assembled report: blocks in fixed publish order.
///
/// A block is present only if its analyzer succeeded; consumers must
/// treat absence as "no data", not as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub blocks: Vec<Block>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block, preserving publish order.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Look up a block by name.
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }

    /// Block names in publish order.
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.name.as_str())
    }
}
