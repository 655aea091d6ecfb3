use thiserror::Error;

/// Errors surfaced by the engine's model layer.
///
/// The analysis functions themselves never fail: malformed readings degrade
/// to excluded points or `unknown` comparison rows instead of erroring.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
