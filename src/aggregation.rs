// Left join of alarms onto availability by IP address, then distinct-timestamp counts per node.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDateTime;

use crate::models::{CleanedAlarmRecord, CleanedAvailabilityRecord, DowntimeSummary, JoinedRecord};

/// Left join on IP address. Every alarm yields exactly one record; when the availability
/// report repeats an address, its first row wins. Blank addresses never match.
pub fn join(
    alarms: &[CleanedAlarmRecord],
    availability: &[CleanedAvailabilityRecord],
) -> Vec<JoinedRecord> {
    let mut by_ip: HashMap<&str, f64> = HashMap::with_capacity(availability.len());
    for a in availability {
        let ip = a.ip_address.trim();
        if !ip.is_empty() {
            by_ip.entry(ip).or_insert(a.availability);
        }
    }

    alarms
        .iter()
        .map(|alarm| {
            let value = by_ip.get(alarm.ip_address.trim()).copied();
            JoinedRecord::from_alarm(alarm, value)
        })
        .collect()
}

/// Groups joined records by node and counts distinct alarm times.
/// Output is sorted by node alias.
pub fn summarize<'a, I>(joined: I) -> Vec<DowntimeSummary>
where
    I: IntoIterator<Item = &'a JoinedRecord>,
{
    let mut groups: BTreeMap<&str, BTreeSet<NaiveDateTime>> = BTreeMap::new();
    for record in joined {
        groups
            .entry(record.node_alias.as_str())
            .or_default()
            .insert(record.alarm_time);
    }
    groups
        .into_iter()
        .map(|(node, times)| DowntimeSummary::new(node, times.len()))
        .collect()
}

/// Join then summarize.
pub fn aggregate(
    alarms: &[CleanedAlarmRecord],
    availability: &[CleanedAvailabilityRecord],
) -> Vec<DowntimeSummary> {
    summarize(&join(alarms, availability))
}
