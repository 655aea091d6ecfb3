//! Exam parameter evolution engine.
//!
//! Turns a patient's historical exam records into per-parameter time series,
//! a latest-vs-previous comparison table, per-parameter trend sentences and
//! an overall improving/worsening/mixed/stable verdict. Every function here
//! is pure and synchronous: inputs are never mutated, outputs are freshly
//! allocated, and malformed data degrades instead of erroring.

pub mod compare;
pub mod insight;
pub mod normalize;
pub mod panels;
pub mod series;
pub mod verdict;

pub use compare::{compare_exams, ComparisonResult, ComparisonRow};
pub use insight::trend_insight;
pub use normalize::{comparison_key, format_cell, format_reference_range, normalize_label};
pub use panels::{PanelConfig, PanelDefinition};
pub use series::{build_time_series, ParameterSeries, TimeSeriesPoint};
pub use verdict::{evolution_verdict, EvolutionVerdict};

// ── Tests ──────────────────────────────────────────────────────────────────
