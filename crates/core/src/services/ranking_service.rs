use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::dataset::ChainSeries;

/// Maximum number of lines plotted on the chart.
pub const MAX_CHART_LINES: usize = 10;

/// Orders chains by their most recent fee for the chart legend and the
/// matrix view rows.
pub struct RankingService;

impl RankingService {
    pub fn new() -> Self {
        Self
    }

    /// Filter chain names by case-insensitive substring match against
    /// `search`, then sort descending by the chain's fee on `last_date`
    /// (missing value counts as 0). The sort is stable, so chains with
    /// equal fees keep the dataset's alphabetical order.
    #[must_use]
    pub fn rank_chains(
        &self,
        chain_data: &BTreeMap<String, ChainSeries>,
        last_date: Option<NaiveDate>,
        search: &str,
    ) -> Vec<String> {
        let needle = search.to_lowercase();

        let mut ranked: Vec<(&String, f64)> = chain_data
            .iter()
            .filter(|(chain, _)| chain.to_lowercase().contains(&needle))
            .map(|(chain, series)| {
                let value = last_date
                    .and_then(|d| series.get(&d))
                    .copied()
                    .unwrap_or(0.0);
                (chain, value)
            })
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.into_iter().map(|(chain, _)| chain.clone()).collect()
    }

    /// The top-ranked chains that get a line on the chart.
    #[must_use]
    pub fn top_for_chart(
        &self,
        chain_data: &BTreeMap<String, ChainSeries>,
        last_date: Option<NaiveDate>,
        search: &str,
    ) -> Vec<String> {
        let mut ranked = self.rank_chains(chain_data, last_date, search);
        ranked.truncate(MAX_CHART_LINES);
        ranked
    }
}

impl Default for RankingService {
    fn default() -> Self {
        Self::new()
    }
}
