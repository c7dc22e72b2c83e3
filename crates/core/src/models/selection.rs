use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Relative date range for the chart, anchored at the end of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    /// Last calendar month.
    #[serde(rename = "1M")]
    OneMonth,
    /// Last three calendar months.
    #[serde(rename = "3M")]
    ThreeMonths,
    /// Last calendar year.
    #[serde(rename = "1Y")]
    OneYear,
    /// All available history.
    #[serde(rename = "MAX")]
    Max,
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DateRange::OneMonth => "1M",
            DateRange::ThreeMonths => "3M",
            DateRange::OneYear => "1Y",
            DateRange::Max => "MAX",
        };
        write!(f, "{s}")
    }
}

/// Chart resampling granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeFrame {
    /// One point per date, values taken verbatim.
    Day,
    /// One point every 7 dates, trailing 7-date sum.
    Week,
    /// One point every 30 dates, trailing 30-date sum.
    Month,
}

impl TimeFrame {
    /// Sampling interval in index positions on the selected date axis.
    #[must_use]
    pub fn interval(self) -> usize {
        match self {
            TimeFrame::Day => 1,
            TimeFrame::Week => 7,
            TimeFrame::Month => 30,
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeFrame::Day => "DAY",
            TimeFrame::Week => "WEEK",
            TimeFrame::Month => "MONTH",
        };
        write!(f, "{s}")
    }
}

/// Sortable column of the metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    #[serde(rename = "1D")]
    OneDayFees,
    #[serde(rename = "7D")]
    SevenDayFees,
    #[serde(rename = "30D")]
    ThirtyDayFees,
    #[serde(rename = "1D%")]
    OneDayChange,
    #[serde(rename = "7D%")]
    SevenDayChange,
    #[serde(rename = "30D%")]
    ThirtyDayChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// The full transient UI selection, passed by reference into the pure
/// transformation services. Never mutated by the core; the presentation
/// layer owns it and builds a fresh one per render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub date_range: DateRange,
    pub time_frame: TimeFrame,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,

    /// Case-insensitive substring filter on chain names.
    pub search: String,

    /// Explicit start date; overrides `date_range` when set.
    pub custom_start: Option<NaiveDate>,

    /// Explicit end date; defaults to the last date of the dataset.
    pub custom_end: Option<NaiveDate>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            date_range: DateRange::OneYear,
            time_frame: TimeFrame::Day,
            sort_column: SortColumn::OneDayFees,
            sort_direction: SortDirection::Desc,
            search: String::new(),
            custom_start: None,
            custom_end: None,
        }
    }
}

impl Selection {
    /// Selection with an explicit date window (custom range mode).
    #[must_use]
    pub fn with_custom_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            date_range: DateRange::Max,
            custom_start: Some(start),
            custom_end: Some(end),
            ..Self::default()
        }
    }
}
