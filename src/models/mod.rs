pub mod enums;
pub mod exam;

pub use enums::{ChangeDirection, ComparisonMode, ReadingStatus};
pub use exam::{ExamRecord, ParameterReading, RawValue};
