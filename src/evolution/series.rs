//! Per-parameter time series aggregation.
//!
//! Folds a patient's exam records into one chronological series per exact
//! parameter name. Grouping is exact-match on the trimmed raw name, case
//! and accents included, so distinct analytes with similar labels are never
//! merged; the looser panel classification lives in `panels`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExamRecord, RawValue, ReadingStatus};

/// One charted point: the exam's timestamp, the parsed value, and the
/// status the reading carried (missing status counts as normal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: Option<DateTime<Utc>>,
    pub value: f64,
    pub status: ReadingStatus,
}

/// All points for one parameter, plus the unit and reference bounds taken
/// from the first reading seen for it. Reference ranges are assumed stable
/// across exams; conflicting later ranges are not reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParameterSeries {
    pub points: Vec<TimeSeriesPoint>,
    pub unit: Option<String>,
    pub ref_min: Option<RawValue>,
    pub ref_max: Option<RawValue>,
}

/// Builds the per-parameter series map for one patient's records.
///
/// Records are sorted internally, ascending by timestamp with missing
/// timestamps first and ties broken by id, so callers need not pre-sort.
/// Readings whose value fails numeric parsing contribute no point.
pub fn build_time_series(records: &[ExamRecord]) -> BTreeMap<String, ParameterSeries> {
    let mut ordered: Vec<&ExamRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        a.effective_time()
            .cmp(&b.effective_time())
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut series: BTreeMap<String, ParameterSeries> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in ordered {
        for reading in &record.readings {
            let key = reading.name.trim();
            if key.is_empty() {
                skipped += 1;
                continue;
            }
            let Some(value) = reading.numeric_value() else {
                tracing::warn!(
                    parameter = key,
                    exam_id = %record.id,
                    "non-numeric reading excluded from time series"
                );
                skipped += 1;
                continue;
            };

            let entry = series.entry(key.to_string()).or_insert_with(|| {
                ParameterSeries {
                    points: Vec::new(),
                    unit: reading.unit.clone(),
                    ref_min: reading.ref_min.clone(),
                    ref_max: reading.ref_max.clone(),
                }
            });
            entry.points.push(TimeSeriesPoint {
                date: record.created_at,
                value,
                status: reading.status.unwrap_or(ReadingStatus::Normal),
            });
        }
    }

    tracing::debug!(
        parameters = series.len(),
        skipped_readings = skipped,
        "time series aggregated"
    );
    series
}
