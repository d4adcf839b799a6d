use serde::{Deserialize, Serialize};

/// One availability-report row whose three metrics all parsed as finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedAvailabilityRecord {
    pub node_alias: String,
    pub ip_address: String,
    pub availability: f64,
    pub latency_ms: f64,
    pub packet_loss_pct: f64,
}
