//! examtrend — exam parameter evolution and comparison engine.
//!
//! The analytical core of a clinic-management application: given a patient's
//! laboratory exam submissions it builds per-parameter time series for
//! charting, diffs the two most recent exams, writes per-parameter trend
//! sentences and aggregates an overall evolution verdict. Data fetching,
//! persistence and rendering belong to the host application; this crate
//! performs no I/O and holds no state.
//!
//! Matching caveat: parameter names are compared textually. The engine does
//! not diagnose, does not convert units, and cannot guarantee that two
//! similarly named parameters are the same clinical measurement.

pub mod config;
pub mod error;
pub mod evolution;
pub mod models;

pub use config::VerdictThresholds;
pub use error::EngineError;
pub use evolution::{
    build_time_series, compare_exams, evolution_verdict, trend_insight, ComparisonResult,
    EvolutionVerdict, PanelConfig,
};
pub use models::{ExamRecord, ParameterReading, RawValue, ReadingStatus};
