pub mod display;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;

use errors::CoreError;
use models::{
    chart::{HeatmapCell, HeatmapRow, ResampledPoint},
    dataset::Dataset,
    metrics::ChainMetrics,
    selection::Selection,
};
use providers::traits::FeesProvider;
use services::{
    chart_service::ChartService, metrics_service::MetricsService, range_service::RangeService,
    ranking_service::RankingService,
};

/// Number of trailing dates shown in the heatmap matrix view.
pub const HEATMAP_WINDOW: usize = 30;

/// Main entry point for the Chain Fees Dashboard core library.
///
/// Owns one immutable fee [`Dataset`] and the services that turn it into
/// chart, table, and heatmap data. Every query method is a pure function
/// of the dataset and the passed-in [`Selection`]; nothing is cached or
/// mutated between calls, so the frontend can recompute freely on each
/// state change.
#[must_use]
pub struct FeesDashboard {
    dataset: Dataset,
    range_service: RangeService,
    chart_service: ChartService,
    metrics_service: MetricsService,
    ranking_service: RankingService,
}

impl std::fmt::Debug for FeesDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeesDashboard")
            .field("dates", &self.dataset.dates.len())
            .field("chains", &self.dataset.chain_count())
            .finish()
    }
}

impl FeesDashboard {
    /// Build a dashboard over an already-loaded dataset.
    /// Fails when the date axis is not strictly ascending.
    pub fn new(dataset: Dataset) -> Result<Self, CoreError> {
        dataset.validate()?;
        Ok(Self::build(dataset))
    }

    /// Fetch the dataset from a provider and build a dashboard over it.
    pub async fn fetch(provider: &dyn FeesProvider) -> Result<Self, CoreError> {
        let dataset = provider.fetch_chain_fees().await?;
        Self::new(dataset)
    }

    // ── Chart ───────────────────────────────────────────────────────

    /// The date window implied by the selection (range buttons or custom
    /// start/end), as an ordered subsequence of the full date axis.
    #[must_use]
    pub fn selected_dates(&self, selection: &Selection) -> Vec<NaiveDate> {
        self.range_service
            .select_range(&self.dataset.dates, selection)
    }

    /// Chart-ready points: the selected window resampled at the
    /// selection's granularity.
    #[must_use]
    pub fn chart_data(&self, selection: &Selection) -> Vec<ResampledPoint> {
        let selected = self.selected_dates(selection);
        self.chart_service
            .resample(&selected, &self.dataset.chain_data, selection.time_frame)
    }

    /// The chains that get a line on the chart: the top 10 by most
    /// recent fee, after the search filter.
    #[must_use]
    pub fn chart_chains(&self, selection: &Selection) -> Vec<String> {
        self.ranking_service.top_for_chart(
            &self.dataset.chain_data,
            self.dataset.latest_date(),
            &selection.search,
        )
    }

    // ── Table ───────────────────────────────────────────────────────

    /// Metrics rows for every chain, sorted by the selection's column
    /// and direction. Always anchored at the most recent known date —
    /// the chart's range selection does not affect the table.
    #[must_use]
    pub fn table_metrics(&self, selection: &Selection) -> Vec<ChainMetrics> {
        let mut metrics = self
            .metrics_service
            .compute_metrics(&self.dataset.dates, &self.dataset.chain_data);
        self.metrics_service.sort_metrics(
            &mut metrics,
            selection.sort_column,
            selection.sort_direction,
        );
        metrics
    }

    /// All chains matching the search filter, ordered by most recent fee
    /// (descending). Row order for the matrix view.
    #[must_use]
    pub fn ranked_chains(&self, selection: &Selection) -> Vec<String> {
        self.ranking_service.rank_chains(
            &self.dataset.chain_data,
            self.dataset.latest_date(),
            &selection.search,
        )
    }

    /// Heatmap matrix over the trailing [`HEATMAP_WINDOW`] dates of the
    /// full axis: one row per ranked chain, cells carrying the raw value
    /// and its display intensity.
    #[must_use]
    pub fn heatmap(&self, selection: &Selection) -> Vec<HeatmapRow> {
        let start = self.dataset.dates.len().saturating_sub(HEATMAP_WINDOW);
        let window = &self.dataset.dates[start..];

        self.ranked_chains(selection)
            .into_iter()
            .map(|chain| {
                let series = &self.dataset.chain_data[&chain];
                let cells = window
                    .iter()
                    .map(|&date| {
                        let value = series.get(&date).copied();
                        HeatmapCell {
                            date,
                            value,
                            intensity: display::heatmap_intensity(value),
                        }
                    })
                    .collect();
                HeatmapRow { chain, cells }
            })
            .collect()
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the sorted metrics table as a CSV string.
    /// Columns: chain, 1d_fees, 7d_fees, 30d_fees, 1d_change, 7d_change, 30d_change.
    /// Change columns are empty when no previous-period data exists.
    #[must_use]
    pub fn export_metrics_to_csv(&self, selection: &Selection) -> String {
        let mut csv =
            String::from("chain,1d_fees,7d_fees,30d_fees,1d_change,7d_change,30d_change\n");
        for row in self.table_metrics(selection) {
            // Escape CSV: quote chain names containing commas or quotes
            let chain = if row.chain.contains(',') || row.chain.contains('"') {
                format!("\"{}\"", row.chain.replace('"', "\"\""))
            } else {
                row.chain.clone()
            };
            let change = |c: Option<f64>| c.map(|v| format!("{v:.2}")).unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                chain,
                row.one_day_fees,
                row.seven_day_fees,
                row.thirty_day_fees,
                change(row.one_day_change),
                change(row.seven_day_change),
                change(row.thirty_day_change),
            ));
        }
        csv
    }

    /// Export the sorted metrics table as pretty-printed JSON.
    pub fn export_metrics_to_json(&self, selection: &Selection) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.table_metrics(selection))
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize metrics: {e}")))
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The full date axis, ascending.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dataset.dates
    }

    /// All chain names in the dataset, alphabetical.
    #[must_use]
    pub fn chain_names(&self) -> Vec<&str> {
        self.dataset.chain_data.keys().map(String::as_str).collect()
    }

    /// Number of tracked chains.
    #[must_use]
    pub fn chain_count(&self) -> usize {
        self.dataset.chain_count()
    }

    /// Earliest date on the axis, if any.
    #[must_use]
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.dataset.earliest_date()
    }

    /// Most recent date on the axis, if any.
    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dataset.latest_date()
    }

    /// Whether enough history exists (60 dates) for the previous 30-day
    /// comparison window to be fully populated. When `false`, the change
    /// percentages are computed against partly zero-filled windows.
    #[must_use]
    pub fn has_full_history(&self) -> bool {
        self.metrics_service.has_full_history(&self.dataset.dates)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(dataset: Dataset) -> Self {
        Self {
            dataset,
            range_service: RangeService::new(),
            chart_service: ChartService::new(),
            metrics_service: MetricsService::new(),
            ranking_service: RankingService::new(),
        }
    }
}
