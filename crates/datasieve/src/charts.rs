//! Chart-ready data for an external plot renderer.
//!
//! The core produces no images; these functions expose the numbers a
//! renderer needs for the standard quality charts (histogram, box plot,
//! missing-value bars, correlation heatmap). Degenerate columns yield
//! `None` or empty data, never errors.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::stats;

/// Fence width in interquartile ranges, matching the outlier analyzer.
const IQR_MULTIPLIER: f64 = 1.5;

/// Histogram bins for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramData {
    pub column: String,
    /// Bin edges (length = counts.len() + 1).
    pub edges: Vec<f64>,
    /// Count of values in each bin.
    pub counts: Vec<usize>,
}

/// Five-number summary plus fences and outlying values for a box plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotData {
    pub column: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Values strictly outside the fences, in row order.
    pub outliers: Vec<f64>,
}

/// Per-column null counts for a missing-value bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingBarData {
    /// (column name, null count) in table order.
    pub columns: Vec<(String, usize)>,
}

/// Correlation matrix laid out for a heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapData {
    /// Numeric column names, in table order.
    pub columns: Vec<String>,
    /// values[i][j] = correlation of columns[i] with columns[j];
    /// `None` where the coefficient is not computed.
    pub values: Vec<Vec<Option<f64>>>,
}

/// Histogram of a numeric column using Sturges' rule.
///
/// `None` for non-numeric columns, fewer than 2 non-null values, or
/// zero range.
pub fn histogram(dataset: &Dataset, column: &str) -> Option<HistogramData> {
    let values = dataset.numeric_values(column)?;
    let n = values.len();
    if n < 2 {
        return None;
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return None;
    }

    // Sturges' rule: k = ceil(log2(n)) + 1
    let n_bins = (n as f64).log2().ceil() as usize + 1;
    let width = (max - min) / n_bins as f64;

    let edges: Vec<f64> = (0..=n_bins).map(|i| min + width * i as f64).collect();
    let mut counts = vec![0usize; n_bins];
    for &v in &values {
        let mut idx = ((v - min) / width) as usize;
        if idx >= n_bins {
            idx = n_bins - 1; // max lands in the last bin
        }
        counts[idx] += 1;
    }

    Some(HistogramData {
        column: column.to_string(),
        edges,
        counts,
    })
}

/// Box-plot summary of a numeric column.
///
/// `None` for non-numeric columns or columns with no non-null values.
pub fn box_plot(dataset: &Dataset, column: &str) -> Option<BoxPlotData> {
    let values = dataset.numeric_values(column)?;
    if values.is_empty() {
        return None;
    }

    let q1 = stats::quantile(&values, 0.25)?;
    let median = stats::quantile(&values, 0.5)?;
    let q3 = stats::quantile(&values, 0.75)?;
    let min = stats::quantile(&values, 0.0)?;
    let max = stats::quantile(&values, 1.0)?;

    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_MULTIPLIER * iqr;
    let upper_fence = q3 + IQR_MULTIPLIER * iqr;

    let outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|&v| v < lower_fence || v > upper_fence)
        .collect();

    Some(BoxPlotData {
        column: column.to_string(),
        min,
        q1,
        median,
        q3,
        max,
        lower_fence,
        upper_fence,
        outliers,
    })
}

/// Null counts per column, in table order.
pub fn missing_bar(dataset: &Dataset) -> MissingBarData {
    MissingBarData {
        columns: dataset
            .columns()
            .iter()
            .map(|c| (c.name.clone(), c.null_count()))
            .collect(),
    }
}

/// Pairwise-complete Pearson matrix over numeric columns.
pub fn correlation_heatmap(dataset: &Dataset) -> HeatmapData {
    let columns: Vec<String> = dataset
        .numeric_column_names()
        .map(String::from)
        .collect();

    let values = columns
        .iter()
        .map(|a| {
            columns
                .iter()
                .map(|b| {
                    if a == b {
                        let var = dataset
                            .numeric_values(a)
                            .as_deref()
                            .and_then(stats::sample_variance);
                        return var.filter(|&v| v > 0.0).map(|_| 1.0);
                    }
                    pairwise(dataset, a, b)
                })
                .collect()
        })
        .collect();

    HeatmapData { columns, values }
}

fn pairwise(dataset: &Dataset, a: &str, b: &str) -> Option<f64> {
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

    fn numeric_dataset(cells: Vec<Option<f64>>) -> Dataset {
        Dataset::from_columns(vec![Column::new("x", ColumnData::Numeric(cells))]).unwrap()
    }

    #[test]
    fn test_histogram_counts_sum_to_n() {
        let ds = numeric_dataset((0..100).map(|i| Some(i as f64)).collect());
        let hist = histogram(&ds, "x").unwrap();

        assert_eq!(hist.counts.iter().sum::<usize>(), 100);
        assert_eq!(hist.edges.len(), hist.counts.len() + 1);
    }

    #[test]
    fn test_histogram_max_in_last_bin() {
        let ds = numeric_dataset(vec![Some(0.0), Some(1.0), Some(2.0), Some(10.0)]);
        let hist = histogram(&ds, "x").unwrap();
        assert_eq!(*hist.counts.last().unwrap(), 1);
    }

    #[test]
    fn test_histogram_constant_column_none() {
        let ds = numeric_dataset(vec![Some(5.0); 10]);
        assert!(histogram(&ds, "x").is_none());
    }

    #[test]
    fn test_box_plot_five_numbers() {
        let ds = numeric_dataset((1..=5).map(|i| Some(i as f64)).collect());
        let bp = box_plot(&ds, "x").unwrap();

        assert_eq!(bp.min, 1.0);
        assert_eq!(bp.median, 3.0);
        assert_eq!(bp.max, 5.0);
        assert!(bp.outliers.is_empty());
    }

    #[test]
    fn test_box_plot_captures_outliers() {
        let mut cells: Vec<Option<f64>> = (0..20).map(|i| Some((i % 5) as f64)).collect();
        cells.push(Some(50.0));
        let ds = numeric_dataset(cells);

        let bp = box_plot(&ds, "x").unwrap();
        assert_eq!(bp.outliers, vec![50.0]);
    }

    #[test]
    fn test_missing_bar_all_columns() {
        let ds = Dataset::from_columns(vec![
            Column::new("a", ColumnData::Numeric(vec![Some(1.0), None])),
            Column::new(
                "b",
                ColumnData::Categorical(vec![Some("x".into()), Some("y".into())]),
            ),
        ])
        .unwrap();

        let bars = missing_bar(&ds);
        assert_eq!(
            bars.columns,
            vec![("a".to_string(), 1), ("b".to_string(), 0)]
        );
    }

    #[test]
    fn test_heatmap_matches_block_semantics() {
        let ds = Dataset::from_columns(vec![
            Column::new("a", ColumnData::Numeric(vec![Some(1.0), Some(2.0), Some(3.0)])),
            Column::new("b", ColumnData::Numeric(vec![Some(3.0), Some(2.0), Some(1.0)])),
        ])
        .unwrap();

        let heat = correlation_heatmap(&ds);
        assert_eq!(heat.columns, vec!["a", "b"]);
        assert_eq!(heat.values[0][0], Some(1.0));
        let r = heat.values[0][1].unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }
}
