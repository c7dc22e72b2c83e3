use serde::{Deserialize, Serialize};

/// One row of the fee metrics table.
///
/// Totals sum missing dates as zero. Change percentages are `None` when
/// the previous-period denominator is zero or absent — the frontend
/// renders those as "-" rather than a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainMetrics {
    /// Chain name (case-sensitive, as served by the API).
    pub chain: String,

    /// Fee on the most recent date (0 if absent).
    pub one_day_fees: f64,

    /// Sum over the 7 most recent dates.
    pub seven_day_fees: f64,

    /// Sum over the 30 most recent dates.
    pub thirty_day_fees: f64,

    /// Change vs. the previous date: `(latest − prev) / prev × 100`.
    pub one_day_change: Option<f64>,

    /// Change vs. the preceding 7-date window: `(cur / prev − 1) × 100`.
    pub seven_day_change: Option<f64>,

    /// Change vs. the preceding 30-date window.
    pub thirty_day_change: Option<f64>,
}
