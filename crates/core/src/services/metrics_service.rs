use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::dataset::ChainSeries;
use crate::models::metrics::ChainMetrics;
use crate::models::selection::{SortColumn, SortDirection};

/// Number of dates needed for both 30-day windows (current + previous).
const FULL_HISTORY_DAYS: usize = 60;

/// Computes the fee metrics table: rolling totals and period-over-period
/// change percentages, always anchored at the most recent known date,
/// independent of the chart's range selection.
///
/// Missing values and positions that fall before the start of the date
/// axis both count as zero in the totals. The zero-fill is silent:
/// datasets shorter than 60 dates report skewed previous-window totals,
/// which callers can detect via [`MetricsService::has_full_history`].
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute one metrics row per chain, in the dataset's chain order
    /// (alphabetical), unsorted. Total over any well-formed dataset:
    /// an empty date axis yields zero totals and `None` changes.
    #[must_use]
    pub fn compute_metrics(
        &self,
        all_dates: &[NaiveDate],
        chain_data: &BTreeMap<String, ChainSeries>,
    ) -> Vec<ChainMetrics> {
        chain_data
            .iter()
            .map(|(chain, series)| self.compute_chain(chain, series, all_dates))
            .collect()
    }

    fn compute_chain(
        &self,
        chain: &str,
        series: &ChainSeries,
        all_dates: &[NaiveDate],
    ) -> ChainMetrics {
        let one_day_fees = Self::window_sum(series, all_dates, 0, 1);
        let seven_day_fees = Self::window_sum(series, all_dates, 0, 7);
        let thirty_day_fees = Self::window_sum(series, all_dates, 0, 30);

        // Previous windows: positions 8–14 and 31–60 from the end.
        let prev_seven_day_fees = Self::window_sum(series, all_dates, 7, 7);
        let prev_thirty_day_fees = Self::window_sum(series, all_dates, 30, 30);

        ChainMetrics {
            chain: chain.to_string(),
            one_day_fees,
            seven_day_fees,
            thirty_day_fees,
            one_day_change: Self::one_day_change(series, all_dates),
            seven_day_change: Self::window_change(seven_day_fees, prev_seven_day_fees),
            thirty_day_change: Self::window_change(thirty_day_fees, prev_thirty_day_fees),
        }
    }

    /// Sum `len` values counting back from the date `offset` positions
    /// before the end of the axis. Positions before the start of the axis
    /// and dates with no recorded value contribute zero.
    fn window_sum(
        series: &ChainSeries,
        all_dates: &[NaiveDate],
        offset: usize,
        len: usize,
    ) -> f64 {
        (0..len)
            .filter_map(|back| {
                let pos = all_dates.len().checked_sub(1 + offset + back)?;
                series.get(&all_dates[pos]).copied()
            })
            .sum()
    }

    /// `(latest − prev) / prev × 100`. `None` when fewer than two dates
    /// exist, when either endpoint has no recorded value, or when the
    /// previous value is zero.
    fn one_day_change(series: &ChainSeries, all_dates: &[NaiveDate]) -> Option<f64> {
        let len = all_dates.len();
        if len < 2 {
            return None;
        }
        let latest = series.get(&all_dates[len - 1]).copied()?;
        let prev = series.get(&all_dates[len - 2]).copied()?;
        if prev == 0.0 {
            return None;
        }
        Some((latest - prev) / prev * 100.0)
    }

    /// `(current / previous − 1) × 100`, `None` when the previous-window
    /// total is zero.
    fn window_change(current: f64, previous: f64) -> Option<f64> {
        if previous == 0.0 {
            return None;
        }
        Some((current / previous - 1.0) * 100.0)
    }

    /// Stable sort by the selected column. Rows whose change is `None`
    /// compare below every finite value, so they sink to the bottom under
    /// descending order. Ties keep their prior relative order.
    pub fn sort_metrics(
        &self,
        metrics: &mut [ChainMetrics],
        column: SortColumn,
        direction: SortDirection,
    ) {
        let key = |m: &ChainMetrics| -> f64 {
            match column {
                SortColumn::OneDayFees => m.one_day_fees,
                SortColumn::SevenDayFees => m.seven_day_fees,
                SortColumn::ThirtyDayFees => m.thirty_day_fees,
                SortColumn::OneDayChange => m.one_day_change.unwrap_or(f64::NEG_INFINITY),
                SortColumn::SevenDayChange => m.seven_day_change.unwrap_or(f64::NEG_INFINITY),
                SortColumn::ThirtyDayChange => m.thirty_day_change.unwrap_or(f64::NEG_INFINITY),
            }
        };

        metrics.sort_by(|a, b| {
            let ord = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    /// Whether the axis carries enough history (60 dates) for the
    /// previous 30-day window to be fully populated. When `false`, the
    /// previous-window totals are partly zero-filled and the 7/30-day
    /// change percentages are skewed.
    #[must_use]
    pub fn has_full_history(&self, all_dates: &[NaiveDate]) -> bool {
        all_dates.len() >= FULL_HISTORY_DAYS
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
