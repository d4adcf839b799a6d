// Aggregated view that drives the dashboard table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distinct alarm timestamps recorded for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeSummary {
    pub node_alias: String,
    pub downtime_count: usize,
}

impl DowntimeSummary {
    pub fn new(node_alias: impl Into<String>, downtime_count: usize) -> Self {
        Self {
            node_alias: node_alias.into(),
            downtime_count,
        }
    }
}

/// Earliest and latest alarm dates, used to bound the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}
