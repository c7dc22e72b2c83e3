use chrono::{Months, NaiveDate};

use crate::models::selection::{DateRange, Selection};

/// Selects the date window to analyze from the full date axis.
///
/// The window end is the explicit custom end, or the last known date.
/// The start is the explicit custom start, or derived from the relative
/// range by calendar-aware month subtraction (clamped to the last valid
/// day when the target month is shorter, e.g. Mar 31 − 1M = Feb 29).
pub struct RangeService;

impl RangeService {
    pub fn new() -> Self {
        Self
    }

    /// Produce the ordered subsequence of `all_dates` inside the selected
    /// window. Empty when `all_dates` is empty or the window is inverted
    /// (custom start after end).
    #[must_use]
    pub fn select_range(&self, all_dates: &[NaiveDate], selection: &Selection) -> Vec<NaiveDate> {
        let Some(&last) = all_dates.last() else {
            return Vec::new();
        };
        let end = selection.custom_end.unwrap_or(last);

        let start = match selection.custom_start {
            Some(start) => start,
            None => match selection.date_range {
                DateRange::OneMonth => Self::months_back(end, 1),
                DateRange::ThreeMonths => Self::months_back(end, 3),
                DateRange::OneYear => Self::months_back(end, 12),
                // First element is always present here: all_dates is non-empty.
                DateRange::Max => all_dates[0],
            },
        };

        all_dates
            .iter()
            .filter(|&&d| d >= start && d <= end)
            .copied()
            .collect()
    }

    fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
        date.checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl Default for RangeService {
    fn default() -> Self {
        Self::new()
    }
}
