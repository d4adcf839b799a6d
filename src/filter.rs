// Dashboard filters: downtime buckets and an alarm-date window.
// Filtering never touches the snapshot it reads from; every call builds a new vector.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::aggregation::summarize;
use crate::models::{DowntimeSummary, JoinedRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DowntimeBucket {
    /// `1-3`: count <= 3
    UpToThree,
    /// `4-5`: 3 < count <= 5
    FourToFive,
    /// `>5`
    MoreThanFive,
    /// `>10`
    MoreThanTen,
}

impl DowntimeBucket {
    pub const ALL: [DowntimeBucket; 4] = [
        DowntimeBucket::UpToThree,
        DowntimeBucket::FourToFive,
        DowntimeBucket::MoreThanFive,
        DowntimeBucket::MoreThanTen,
    ];

    /// Dropdown default.
    pub const DEFAULT: DowntimeBucket = DowntimeBucket::UpToThree;

    /// Unknown labels yield `None`, which filters nothing.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "1-3" => Some(DowntimeBucket::UpToThree),
            "4-5" => Some(DowntimeBucket::FourToFive),
            ">5" => Some(DowntimeBucket::MoreThanFive),
            ">10" => Some(DowntimeBucket::MoreThanTen),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DowntimeBucket::UpToThree => "1-3",
            DowntimeBucket::FourToFive => "4-5",
            DowntimeBucket::MoreThanFive => ">5",
            DowntimeBucket::MoreThanTen => ">10",
        }
    }

    pub fn matches(self, count: usize) -> bool {
        match self {
            DowntimeBucket::UpToThree => count <= 3,
            DowntimeBucket::FourToFive => count > 3 && count <= 5,
            DowntimeBucket::MoreThanFive => count > 5,
            DowntimeBucket::MoreThanTen => count > 10,
        }
    }
}

/// Inclusive calendar-day window over alarm times. An unset bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        let day = t.date();
        self.start.is_none_or(|s| day >= s) && self.end.is_none_or(|e| day <= e)
    }
}

/// Keeps summaries whose count falls in `bucket`; an unrecognised or absent bucket keeps all.
pub fn filter_by_bucket(summaries: &[DowntimeSummary], bucket: Option<&str>) -> Vec<DowntimeSummary> {
    match bucket.and_then(DowntimeBucket::parse) {
        Some(b) => summaries
            .iter()
            .filter(|s| b.matches(s.downtime_count))
            .cloned()
            .collect(),
        None => summaries.to_vec(),
    }
}

/// Applies the bucket and date filters.
///
/// The summary table has no timestamp column, so a bounded `range` is applied to the
/// pre-aggregation `joined` records, which are then re-aggregated before bucketing.
/// Nodes with no alarm inside the window drop out. An unbounded range filters `summaries`
/// directly.
pub fn apply_filters(
    joined: &[JoinedRecord],
    summaries: &[DowntimeSummary],
    bucket: Option<&str>,
    range: &DateRange,
) -> Vec<DowntimeSummary> {
    if range.is_unbounded() {
        return filter_by_bucket(summaries, bucket);
    }
    let windowed = summarize(joined.iter().filter(|r| range.contains(r.alarm_time)));
    filter_by_bucket(&windowed, bucket)
}
