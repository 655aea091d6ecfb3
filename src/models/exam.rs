use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ReadingStatus;

/// A numeric field as it arrives from upstream extraction: either a native
/// number or a free-form string, possibly using `,` as the decimal separator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Best-effort numeric interpretation. Comma decimal separators are
    /// accepted; non-finite numbers and unparseable text yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => n.is_finite().then_some(*n),
            RawValue::Text(s) => {
                let normalized = s.trim().replace(',', ".");
                if normalized.is_empty() {
                    return None;
                }
                normalized.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.into())
    }
}

/// One named parameter reading inside an exam report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterReading {
    pub name: String,
    #[serde(default)]
    pub value: Option<RawValue>,
    #[serde(default)]
    pub ref_min: Option<RawValue>,
    #[serde(default)]
    pub ref_max: Option<RawValue>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: Option<ReadingStatus>,
}

impl ParameterReading {
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_ref().and_then(RawValue::as_f64)
    }
}

/// A patient's exam submission as fetched by the data-access layer.
/// Immutable once fetched; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub exam_type: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub readings: Vec<ParameterReading>,
}

impl ExamRecord {
    /// An exam is "analyzed" once it carries at least one reading.
    pub fn is_analyzed(&self) -> bool {
        !self.readings.is_empty()
    }

    /// Timestamp used for ordering; missing timestamps sort as epoch 0.
    pub fn effective_time(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}
