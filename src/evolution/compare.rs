//! Pairwise exam comparison: a row-per-parameter diff between the two most
//! recent analyzed exams. Never fails; missing or unparseable data degrades
//! to `unknown` rows instead of erroring.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::normalize::comparison_key;
use crate::models::{ChangeDirection, ComparisonMode, ExamRecord, ParameterReading, RawValue};

/// Two numeric values closer than this count as unchanged.
const SAME_TOLERANCE: f64 = 1e-6;

const UNNAMED_PARAMETER: &str = "Unnamed parameter";

/// One parameter's latest-vs-previous diff entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub parameter: String,
    pub latest_value: Option<RawValue>,
    pub previous_value: Option<RawValue>,
    pub ref_min: Option<RawValue>,
    pub ref_max: Option<RawValue>,
    pub unit: Option<String>,
    pub change_text: String,
    pub change_direction: ChangeDirection,
}

/// The full comparison payload handed to renderers. `latest` and `previous`
/// are clones of the compared records so tables can label their columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub mode: ComparisonMode,
    pub latest: Option<ExamRecord>,
    pub previous: Option<ExamRecord>,
    pub rows: Vec<ComparisonRow>,
}

/// Compares the two most recent analyzed exams of one patient.
///
/// Exams without readings are ignored. The remainder are ordered newest
/// first (missing timestamps sort as epoch 0, ties broken by id); with zero
/// analyzed exams the mode is `none`, with one it is `single`, otherwise the
/// two newest are diffed over the union of their parameter keys.
pub fn compare_exams(records: &[ExamRecord]) -> ComparisonResult {
    let mut analyzed: Vec<&ExamRecord> = records.iter().filter(|e| e.is_analyzed()).collect();
    analyzed.sort_by(|a, b| {
        b.effective_time()
            .cmp(&a.effective_time())
            .then_with(|| a.id.cmp(&b.id))
    });

    match analyzed.as_slice() {
        [] => ComparisonResult {
            mode: ComparisonMode::None,
            latest: None,
            previous: None,
            rows: Vec::new(),
        },
        [single] => ComparisonResult {
            mode: ComparisonMode::Single,
            latest: Some((*single).clone()),
            previous: None,
            rows: single.readings.iter().map(single_exam_row).collect(),
        },
        [latest, previous, ..] => {
            let rows = diff_rows(latest, previous);
            tracing::debug!(
                latest_exam = %latest.id,
                previous_exam = %previous.id,
                rows = rows.len(),
                "exam comparison built"
            );
            ComparisonResult {
                mode: ComparisonMode::Comparison,
                latest: Some((*latest).clone()),
                previous: Some((*previous).clone()),
                rows,
            }
        }
    }
}

fn single_exam_row(reading: &ParameterReading) -> ComparisonRow {
    let name = reading.name.trim();
    ComparisonRow {
        parameter: if name.is_empty() {
            UNNAMED_PARAMETER.into()
        } else {
            name.into()
        },
        latest_value: reading.value.clone(),
        previous_value: None,
        ref_min: reading.ref_min.clone(),
        ref_max: reading.ref_max.clone(),
        unit: reading.unit.clone(),
        change_text: "single exam".into(),
        change_direction: ChangeDirection::Unknown,
    }
}

/// Builds one row per key in the union of both exams' parameter keys.
/// Union, not intersection: a parameter present in only one exam still gets
/// a row with a null counterpart.
fn diff_rows(latest: &ExamRecord, previous: &ExamRecord) -> Vec<ComparisonRow> {
    let latest_map = index_readings(latest);
    let previous_map = index_readings(previous);

    let keys: BTreeSet<&String> = latest_map.keys().chain(previous_map.keys()).collect();

    keys.into_iter()
        .map(|key| {
            let l = latest_map.get(key).copied();
            let p = previous_map.get(key).copied();

            let latest_value = l.and_then(|r| r.value.clone());
            let previous_value = p.and_then(|r| r.value.clone());
            let latest_numeric = latest_value.as_ref().and_then(RawValue::as_f64);
            let previous_numeric = previous_value.as_ref().and_then(RawValue::as_f64);

            let (change_text, change_direction) = match (latest_numeric, previous_numeric) {
                (Some(ln), Some(pn)) => describe_change(ln - pn),
                _ => ("no comparison".into(), ChangeDirection::Unknown),
            };

            let display_name = l
                .map(|r| r.name.trim())
                .filter(|n| !n.is_empty())
                .or_else(|| p.map(|r| r.name.trim()).filter(|n| !n.is_empty()))
                .unwrap_or(UNNAMED_PARAMETER);

            ComparisonRow {
                parameter: display_name.into(),
                latest_value,
                previous_value,
                ref_min: pick(l, p, |r| r.ref_min.clone()),
                ref_max: pick(l, p, |r| r.ref_max.clone()),
                unit: pick(l, p, |r| r.unit.clone()),
                change_text,
                change_direction,
            }
        })
        .collect()
}

fn describe_change(diff: f64) -> (String, ChangeDirection) {
    if diff.abs() < SAME_TOLERANCE {
        ("no change".into(), ChangeDirection::Same)
    } else if diff > 0.0 {
        (format!("increased (+{diff:.2})"), ChangeDirection::Up)
    } else {
        (format!("decreased ({diff:.2})"), ChangeDirection::Down)
    }
}

/// Latest-preferred fallback: take the field from the latest exam's reading
/// when present, otherwise from the previous one.
fn pick<T>(
    latest: Option<&ParameterReading>,
    previous: Option<&ParameterReading>,
    field: impl Fn(&ParameterReading) -> Option<T>,
) -> Option<T> {
    latest.and_then(&field).or_else(|| previous.and_then(&field))
}

fn index_readings(exam: &ExamRecord) -> HashMap<String, &ParameterReading> {
    exam.readings
        .iter()
        .filter_map(|r| {
            let key = comparison_key(&r.name);
            (!key.is_empty()).then_some((key, r))
        })
        .collect()
}
