use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::errors::CoreError;

/// One chain's fee series: date → fee amount in USD.
///
/// Absence of a date key means "no recorded value", which is distinct
/// from a recorded value of zero.
pub type ChainSeries = HashMap<NaiveDate, f64>;

/// The full fee dataset as served by the upstream API:
/// `{ "dates": [...], "chainData": { chain: { date: fee } } }`.
///
/// `dates` is the globally known date axis, ascending and deduplicated.
/// Individual chains may have gaps — a chain is not required to carry a
/// value for every date on the axis.
///
/// The chain map is a `BTreeMap` so that iteration order (and therefore the
/// base order every stable sort tie-breaks against) is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// All known dates, ascending.
    pub dates: Vec<NaiveDate>,

    /// Per-chain fee series, keyed by chain name (case-sensitive).
    #[serde(rename = "chainData")]
    pub chain_data: BTreeMap<String, ChainSeries>,
}

impl Dataset {
    pub fn new(dates: Vec<NaiveDate>, chain_data: BTreeMap<String, ChainSeries>) -> Self {
        Self { dates, chain_data }
    }

    /// Check structural well-formedness: the date axis must be strictly
    /// ascending (which also rules out duplicates).
    pub fn validate(&self) -> Result<(), CoreError> {
        for pair in self.dates.windows(2) {
            if pair[0] >= pair[1] {
                return Err(CoreError::InvalidData(format!(
                    "dates must be strictly ascending, found {} before {}",
                    pair[0], pair[1],
                )));
            }
        }
        Ok(())
    }

    /// The most recent date on the axis, if any.
    #[must_use]
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// The earliest date on the axis, if any.
    #[must_use]
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Number of tracked chains.
    #[must_use]
    pub fn chain_count(&self) -> usize {
        self.chain_data.len()
    }
}
