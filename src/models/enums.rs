use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(EngineError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(ReadingStatus {
    Normal => "normal",
    High => "high",
    Low => "low",
});

impl ReadingStatus {
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

str_enum!(ChangeDirection {
    Up => "up",
    Down => "down",
    Same => "same",
    Unknown => "unknown",
});

str_enum!(ComparisonMode {
    None => "none",
    Single => "single",
    Comparison => "comparison",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn reading_status_round_trip() {
        for (variant, s) in [
            (ReadingStatus::Normal, "normal"),
            (ReadingStatus::High, "high"),
            (ReadingStatus::Low, "low"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ReadingStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn change_direction_round_trip() {
        for (variant, s) in [
            (ChangeDirection::Up, "up"),
            (ChangeDirection::Down, "down"),
            (ChangeDirection::Same, "same"),
            (ChangeDirection::Unknown, "unknown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(ChangeDirection::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReadingStatus::High).unwrap(),
            "\"high\""
        );
        let parsed: ReadingStatus = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, ReadingStatus::Low);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(ReadingStatus::from_str("critical").is_err());
        assert!(ChangeDirection::from_str("sideways").is_err());
        assert!(ComparisonMode::from_str("").is_err());
    }

    #[test]
    fn only_normal_is_normal() {
        assert!(ReadingStatus::Normal.is_normal());
        assert!(!ReadingStatus::High.is_normal());
        assert!(!ReadingStatus::Low.is_normal());
    }
}
