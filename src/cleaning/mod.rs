// Cleaning of the two report exports: positional column schemas plus lenient cell coercion.
// A cell that fails to coerce drops its row; nothing here returns an error for bad data.

pub mod alarm;
pub mod availability;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::sheet::{Cell, EMPTY_CELL, cell_at};

pub use alarm::{AlarmField, clean_alarm_log, clean_alarm_rows};
pub use availability::{AvailabilityField, clean_availability_report, clean_availability_rows};

/// Ordered index → field table for an export whose columns have no usable header names.
/// Schema drift in a report generator is a change to one of these tables.
#[derive(Debug)]
pub struct ColumnSchema<F: 'static> {
    columns: &'static [(usize, F)],
}

impl<F: Copy + PartialEq> ColumnSchema<F> {
    pub const fn new(columns: &'static [(usize, F)]) -> Self {
        Self { columns }
    }

    pub fn index_of(&self, field: F) -> Option<usize> {
        self.columns
            .iter()
            .find(|(_, f)| *f == field)
            .map(|(i, _)| *i)
    }

    /// Cell for `field` in `row`; empty when the row is short or the field is unmapped.
    pub fn cell<'a>(&self, row: &'a [Cell], field: F) -> &'a Cell {
        match self.index_of(field) {
            Some(i) => cell_at(row, i),
            None => &EMPTY_CELL,
        }
    }

    pub fn text(&self, row: &[Cell], field: F) -> Option<String> {
        self.cell(row, field).as_text()
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %I:%M:%S %p",
    "%Y/%m/%d %I:%M %p",
    // month-first before day-first, so 01/02 is January 2nd and 13/02 still parses
    "%m/%d/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %I:%M %p",
    "%m-%d-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    // dotted dates are day-first only
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
    "%b %d, %Y %I:%M:%S %p",
    "%b %d, %Y %I:%M %p",
    "%b %d %Y %I:%M:%S %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%b %d, %Y",
];

/// Native date cells pass through; text is tried against the known export formats.
pub fn parse_timestamp(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(s) => parse_timestamp_str(s),
        _ => None,
    }
}

pub fn parse_timestamp_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Numeric coercion: finite numbers only. Blank, non-numeric, NaN and infinite values fail.
pub fn parse_number(cell: &Cell) -> Option<f64> {
    let n = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
