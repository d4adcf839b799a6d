// Immutable report snapshot: the full pipeline runs once and the result is shared read-only.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{info, instrument};

use crate::aggregation::{join, summarize};
use crate::cleaning::{clean_alarm_log, clean_availability_report};
use crate::config::AppConfig;
use crate::error::PipelineError;
use crate::filter::{DateRange, apply_filters};
use crate::locator::locate_latest;
use crate::models::{
    CleanedAlarmRecord, CleanedAvailabilityRecord, DateBounds, DowntimeSummary, JoinedRecord,
};

/// Date picker window used when no alarm survived cleaning.
pub const FALLBACK_MIN_DATE: (i32, u32, u32) = (2020, 1, 1);
pub const FALLBACK_MAX_DATE: (i32, u32, u32) = (2020, 12, 31);

/// Where the snapshot's data came from.
#[derive(Debug, Clone, Default)]
pub struct ReportSources {
    pub alarm_log: PathBuf,
    pub availability_report: PathBuf,
}

#[derive(Debug)]
pub struct Report {
    sources: ReportSources,
    alarm_records: usize,
    availability_records: usize,
    joined: Vec<JoinedRecord>,
    summary: Vec<DowntimeSummary>,
    generated_at: NaiveDateTime,
}

impl Report {
    /// Locates both exports in the configured directory, cleans, joins and aggregates them.
    #[instrument(skip(config), fields(dir = %config.paths.downloads_path))]
    pub fn build(config: &AppConfig) -> Result<Self, PipelineError> {
        config.check_paths()?;
        let dir = config.downloads_dir();
        let alarm_log = locate_latest(dir, &config.patterns.file1_pattern)?;
        let availability_report = locate_latest(dir, &config.patterns.file2_pattern)?;
        info!(alarm_log = %alarm_log.display(), availability_report = %availability_report.display(), "using exports");

        Self::from_files(alarm_log, availability_report)
    }

    /// Runs the cleaning and aggregation stages on two known files.
    pub fn from_files(
        alarm_log: PathBuf,
        availability_report: PathBuf,
    ) -> Result<Self, PipelineError> {
        let alarms = clean_alarm_log(&alarm_log)?;
        let availability = clean_availability_report(&availability_report)?;
        Ok(Self::from_records(
            ReportSources {
                alarm_log,
                availability_report,
            },
            &alarms,
            &availability,
        ))
    }

    /// Builds a snapshot from already-cleaned records.
    pub fn from_records(
        sources: ReportSources,
        alarms: &[CleanedAlarmRecord],
        availability: &[CleanedAvailabilityRecord],
    ) -> Self {
        let joined = join(alarms, availability);
        let summary = summarize(&joined);
        let unmatched = joined.iter().filter(|r| r.availability.is_none()).count();
        info!(
            alarms = alarms.len(),
            availability = availability.len(),
            unmatched,
            nodes = summary.len(),
            "report built"
        );
        Self {
            sources,
            alarm_records: alarms.len(),
            availability_records: availability.len(),
            joined,
            summary,
            generated_at: Local::now().naive_local(),
        }
    }

    /// Unfiltered per-node downtime counts, sorted by node alias.
    pub fn get_summary(&self) -> &[DowntimeSummary] {
        &self.summary
    }

    /// Bucket and date filters over the snapshot. See [`crate::filter::apply_filters`].
    pub fn apply_filters(&self, bucket: Option<&str>, range: &DateRange) -> Vec<DowntimeSummary> {
        apply_filters(&self.joined, &self.summary, bucket, range)
    }

    pub fn joined(&self) -> &[JoinedRecord] {
        &self.joined
    }

    /// First and last alarm dates, or the fallback year when there are no alarms.
    pub fn date_bounds(&self) -> DateBounds {
        let min = self.joined.iter().map(|r| r.alarm_time.date()).min();
        let max = self.joined.iter().map(|r| r.alarm_time.date()).max();
        DateBounds {
            min_date: min.unwrap_or_else(|| ymd(FALLBACK_MIN_DATE)),
            max_date: max.unwrap_or_else(|| ymd(FALLBACK_MAX_DATE)),
        }
    }

    /// Distinct downtime counts present in the summary, ascending.
    pub fn downtime_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.summary.iter().map(|s| s.downtime_count).collect();
        counts.sort_unstable();
        counts.dedup();
        counts
    }

    pub fn alarm_log(&self) -> &Path {
        &self.sources.alarm_log
    }

    pub fn availability_report(&self) -> &Path {
        &self.sources.availability_report
    }

    pub fn alarm_records(&self) -> usize {
        self.alarm_records
    }

    pub fn availability_records(&self) -> usize {
        self.availability_records
    }

    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fallback date is a valid calendar date")
}
