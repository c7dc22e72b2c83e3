use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single chart data point after resampling.
///
/// The core generates these — the frontend just renders them.
/// A chain is absent from `values` when it has no recorded fee on this
/// date, or when its trailing aggregation window is incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampledPoint {
    /// The date label for this point.
    pub date: NaiveDate,

    /// Per-chain value: the raw daily fee for `TimeFrame::Day`, or the
    /// trailing 7/30-date sum for `Week`/`Month`.
    pub values: BTreeMap<String, f64>,
}

/// One cell of the heatmap matrix view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,

    /// Recorded fee for the chain on this date, `None` when absent.
    pub value: Option<f64>,

    /// Background intensity in `[0, 100]`, `min(log10(value) × 20, 100)`.
    pub intensity: f64,
}

/// One heatmap row: a chain and its cells over the trailing date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub chain: String,
    pub cells: Vec<HeatmapCell>,
}
