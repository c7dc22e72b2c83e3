use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::chart::ResampledPoint;
use crate::models::dataset::ChainSeries;
use crate::models::selection::TimeFrame;

/// Resamples the selected date window into chart-ready points.
///
/// Daily granularity passes values through verbatim. Weekly/monthly
/// granularity samples every 7th/30th date counting backward from the
/// most recent selected date and replaces each sampled value with the
/// trailing 7/30-date sum.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Resample `selected_dates` at the given granularity.
    ///
    /// Rules, per chain and retained date:
    /// - no recorded value on the retained date itself → chain omitted
    ///   from that point;
    /// - weekly/monthly with fewer than a full trailing window of
    ///   selected dates → chain omitted (never partial-summed);
    /// - missing values *inside* a complete window sum as 0.
    ///
    /// Points left with no values at all are dropped. Output is ascending.
    #[must_use]
    pub fn resample(
        &self,
        selected_dates: &[NaiveDate],
        chain_data: &BTreeMap<String, ChainSeries>,
        time_frame: TimeFrame,
    ) -> Vec<ResampledPoint> {
        let interval = time_frame.interval();
        let mut points = Vec::new();

        for (idx, date) in selected_dates.iter().enumerate() {
            // Sample every `interval`-th date counting back from the last.
            if (selected_dates.len() - 1 - idx) % interval != 0 {
                continue;
            }

            let mut values = BTreeMap::new();
            for (chain, series) in chain_data {
                let Some(&daily) = series.get(date) else {
                    continue;
                };

                let value = if interval == 1 {
                    daily
                } else {
                    // Incomplete trailing window → skip this chain entirely.
                    if idx + 1 < interval {
                        continue;
                    }
                    (0..interval)
                        .map(|back| {
                            series
                                .get(&selected_dates[idx - back])
                                .copied()
                                .unwrap_or(0.0)
                        })
                        .sum()
                };
                values.insert(chain.clone(), value);
            }

            if values.is_empty() {
                continue;
            }
            points.push(ResampledPoint {
                date: *date,
                values,
            });
        }

        points
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
