// JSON API: snapshot metadata and the filtered, paginated downtime table

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::filter::{DateRange, DowntimeBucket};
use crate::models::{DateBounds, DowntimeSummary};

#[derive(Debug, Default, Deserialize)]
pub(super) struct SummaryQuery {
    bucket: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    /// 1-based.
    page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryPage {
    rows: Vec<DowntimeSummary>,
    total: usize,
    page: usize,
    page_size: usize,
    page_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    title: &'static str,
    #[serde(flatten)]
    bounds: DateBounds,
    buckets: Vec<&'static str>,
    default_bucket: &'static str,
    downtime_counts: Vec<usize>,
    page_size: usize,
    alarm_log: String,
    availability_report: String,
    alarm_records: usize,
    availability_records: usize,
    nodes: usize,
    generated_at: NaiveDateTime,
}

/// GET /api/meta — date picker bounds, bucket options and snapshot provenance.
pub(super) async fn meta_handler(State(state): State<AppState>) -> impl IntoResponse {
    let report = &state.report;
    Json(Meta {
        title: "Node Availability Report",
        bounds: report.date_bounds(),
        buckets: DowntimeBucket::ALL.iter().map(|b| b.label()).collect(),
        default_bucket: DowntimeBucket::DEFAULT.label(),
        downtime_counts: report.downtime_counts(),
        page_size: state.config.table.page_size,
        alarm_log: report.alarm_log().display().to_string(),
        availability_report: report.availability_report().display().to_string(),
        alarm_records: report.alarm_records(),
        availability_records: report.availability_records(),
        nodes: report.get_summary().len(),
        generated_at: report.generated_at(),
    })
}

/// GET /api/summary — filtered rows for one page. No filters returns the full summary.
pub(super) async fn summary_handler(
    State(state): State<AppState>,
    Query(q): Query<SummaryQuery>,
) -> impl IntoResponse {
    let range = DateRange::new(q.start_date, q.end_date);
    let filtered = state.report.apply_filters(q.bucket.as_deref(), &range);
    tracing::debug!(
        bucket = ?q.bucket,
        start = ?q.start_date,
        end = ?q.end_date,
        rows = filtered.len(),
        "summary filtered"
    );
    Json(paginate(filtered, q.page.unwrap_or(1), state.config.table.page_size))
}

fn paginate(rows: Vec<DowntimeSummary>, page: usize, page_size: usize) -> SummaryPage {
    let page = page.max(1);
    let total = rows.len();
    let page_count = total.div_ceil(page_size);
    let rows = rows
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();
    SummaryPage {
        rows,
        total,
        page,
        page_size,
        page_count,
    }
}
