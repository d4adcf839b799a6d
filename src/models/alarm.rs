use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One alarm-log row that survived cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedAlarmRecord {
    pub node_alias: String,
    /// May be empty when the export left the cell blank; blank addresses never join.
    pub ip_address: String,
    pub event: String,
    pub alarm_time: NaiveDateTime,
}

/// Alarm record after the left join with the availability report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedRecord {
    pub node_alias: String,
    pub ip_address: String,
    pub event: String,
    pub alarm_time: NaiveDateTime,
    /// `None` when the IP address has no row in the availability report.
    pub availability: Option<f64>,
}

impl JoinedRecord {
    pub fn from_alarm(alarm: &CleanedAlarmRecord, availability: Option<f64>) -> Self {
        Self {
            node_alias: alarm.node_alias.clone(),
            ip_address: alarm.ip_address.clone(),
            event: alarm.event.clone(),
            alarm_time: alarm.alarm_time,
            availability,
        }
    }
}
