// Alarm log export: 5 boilerplate rows, a header row with unnamed key columns, then alarms.

use std::path::Path;

use tracing::{debug, info, instrument};

use super::{ColumnSchema, parse_timestamp};
use crate::error::PipelineError;
use crate::models::CleanedAlarmRecord;
use crate::sheet::{Cell, read_first_sheet};

/// Report title and filter rows the alarm exporter writes above the column header.
pub const ALARM_PREAMBLE_ROWS: usize = 5;
/// Column header row following the preamble. Its key columns are unnamed, so it carries nothing.
pub const ALARM_HEADER_ROWS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmField {
    SerialNumber,
    IpAddress,
    NodeAlias,
    Event,
    AlarmTime,
}

/// Clear time, duration, description and host name columns are not mapped and never read.
pub const ALARM_COLUMNS: ColumnSchema<AlarmField> = ColumnSchema::new(&[
    (0, AlarmField::SerialNumber),
    (1, AlarmField::IpAddress),
    (2, AlarmField::NodeAlias),
    (4, AlarmField::Event),
    (6, AlarmField::AlarmTime),
]);

/// Reads and cleans the alarm log at `path`.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn clean_alarm_log(path: &Path) -> Result<Vec<CleanedAlarmRecord>, PipelineError> {
    let rows = read_first_sheet(path)?;
    Ok(clean_alarm_rows(&rows))
}

/// Cleans raw alarm-log rows (the whole sheet, preamble included). Keeps source order.
pub fn clean_alarm_rows(rows: &[Vec<Cell>]) -> Vec<CleanedAlarmRecord> {
    let skip = ALARM_PREAMBLE_ROWS + ALARM_HEADER_ROWS;
    let mut out = Vec::new();
    let mut dropped = 0usize;

    for (i, row) in rows.iter().enumerate().skip(skip) {
        match clean_row(row) {
            Ok(record) => out.push(record),
            Err(reason) => {
                dropped += 1;
                debug!(sheet_row = i + 1, reason, "alarm row dropped");
            }
        }
    }

    info!(kept = out.len(), dropped, "alarm log cleaned");
    out
}

fn clean_row(row: &[Cell]) -> Result<CleanedAlarmRecord, &'static str> {
    let node_alias = ALARM_COLUMNS
        .text(row, AlarmField::NodeAlias)
        .ok_or("missing node alias")?;
    let time_cell = ALARM_COLUMNS.cell(row, AlarmField::AlarmTime);
    if time_cell.is_blank() {
        return Err("missing alarm time");
    }
    let alarm_time = parse_timestamp(time_cell).ok_or("unparseable alarm time")?;

    Ok(CleanedAlarmRecord {
        node_alias,
        ip_address: ALARM_COLUMNS
            .text(row, AlarmField::IpAddress)
            .unwrap_or_default(),
        event: ALARM_COLUMNS.text(row, AlarmField::Event).unwrap_or_default(),
        alarm_time,
    })
}
