// Availability report export: header row, 5 summary rows, then one row per node.

use std::path::Path;

use tracing::{debug, info, instrument};

use super::{ColumnSchema, parse_number};
use crate::error::PipelineError;
use crate::models::CleanedAvailabilityRecord;
use crate::sheet::{Cell, read_first_sheet};

/// Column header row (unnamed columns).
pub const AVAILABILITY_HEADER_ROWS: usize = 1;
/// Report summary rows the generator writes between the header and the per-node data.
pub const AVAILABILITY_PREAMBLE_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityField {
    NodeAlias,
    IpAddress,
    Availability,
    LatencyMs,
    PacketLossPct,
}

/// Columns 2 and 3 are not mapped.
pub const AVAILABILITY_COLUMNS: ColumnSchema<AvailabilityField> = ColumnSchema::new(&[
    (0, AvailabilityField::NodeAlias),
    (1, AvailabilityField::IpAddress),
    (4, AvailabilityField::Availability),
    (5, AvailabilityField::LatencyMs),
    (6, AvailabilityField::PacketLossPct),
]);

/// Reads and cleans the availability report at `path`.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn clean_availability_report(
    path: &Path,
) -> Result<Vec<CleanedAvailabilityRecord>, PipelineError> {
    let rows = read_first_sheet(path)?;
    Ok(clean_availability_rows(&rows))
}

/// Cleans raw availability rows (the whole sheet, header included). Keeps source order.
pub fn clean_availability_rows(rows: &[Vec<Cell>]) -> Vec<CleanedAvailabilityRecord> {
    let skip = AVAILABILITY_HEADER_ROWS + AVAILABILITY_PREAMBLE_ROWS;
    let mut out = Vec::new();
    let mut dropped = 0usize;

    for (i, row) in rows.iter().enumerate().skip(skip) {
        match clean_row(row) {
            Some(record) => out.push(record),
            None => {
                dropped += 1;
                debug!(sheet_row = i + 1, "availability row dropped: non-numeric metric");
            }
        }
    }

    info!(kept = out.len(), dropped, "availability report cleaned");
    out
}

fn clean_row(row: &[Cell]) -> Option<CleanedAvailabilityRecord> {
    let metric = |field| parse_number(AVAILABILITY_COLUMNS.cell(row, field));
    let availability = metric(AvailabilityField::Availability)?;
    let latency_ms = metric(AvailabilityField::LatencyMs)?;
    let packet_loss_pct = metric(AvailabilityField::PacketLossPct)?;

    Some(CleanedAvailabilityRecord {
        node_alias: AVAILABILITY_COLUMNS
            .text(row, AvailabilityField::NodeAlias)
            .unwrap_or_default(),
        ip_address: AVAILABILITY_COLUMNS
            .text(row, AvailabilityField::IpAddress)
            .unwrap_or_default(),
        availability,
        latency_ms,
        packet_loss_pct,
    })
}
