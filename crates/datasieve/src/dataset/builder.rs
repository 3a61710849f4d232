//! Load-time type inference: raw string cells to typed columns.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::column::{Column, ColumnData};
use super::Dataset;
use crate::error::Result;
use crate::input::RawTable;

// Date shapes recognized before attempting a chrono parse.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(), // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(), // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(), // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(), // Alt ISO
    ]
});

/// Datetime formats tried in order for cells carrying a time component.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only formats tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Build a typed [`Dataset`] from a parsed raw table.
///
/// Column types are all-or-nothing: a single non-null cell that fails to
/// parse as the candidate type demotes the whole column to categorical.
/// This keeps "numeric column" stable under re-analysis and matches how
/// loaders that decide a dtype per column behave.
pub fn build_dataset(table: &RawTable) -> Result<Dataset> {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<Option<&str>> = table
                .column_values(idx)
                .map(|v| {
                    if RawTable::is_null_value(v) {
                        None
                    } else {
                        Some(v.trim())
                    }
                })
                .collect();
            Column::new(name.clone(), infer_column(&cells))
        })
        .collect();

    Dataset::from_columns(columns)
}

/// Decide the type of one column and materialize its cells.
fn infer_column(cells: &[Option<&str>]) -> ColumnData {
    let non_null: Vec<&str> = cells.iter().filter_map(|c| *c).collect();

    if !non_null.is_empty() && non_null.iter().all(|v| parse_bool(v).is_some()) {
        return ColumnData::Boolean(
            cells.iter().map(|c| c.and_then(parse_bool)).collect(),
        );
    }

    if !non_null.is_empty() && non_null.iter().all(|v| v.parse::<f64>().is_ok()) {
        return ColumnData::Numeric(
            cells.iter().map(|c| c.and_then(|v| v.parse().ok())).collect(),
        );
    }

    if !non_null.is_empty() && non_null.iter().all(|v| parse_temporal(v).is_some()) {
        return ColumnData::Temporal(
            cells.iter().map(|c| c.and_then(parse_temporal)).collect(),
        );
    }

    // Fallback, including all-null and zero-row columns
    ColumnData::Categorical(cells.iter().map(|c| c.map(String::from)).collect())
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_temporal(value: &str) -> Option<NaiveDateTime> {
    if !DATE_PATTERNS.iter().any(|p| p.is_match(value)) {
        return None;
    }

    if value.contains(':') {
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                return Some(dt);
            }
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}
