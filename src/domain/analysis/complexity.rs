//! Coarse complexity rating shared by scope and story point estimates.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-level complexity rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ComplexityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a rating outside Low/Medium/High.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown complexity level: {0}")]
pub struct UnknownComplexityLevel(pub String);

impl FromStr for ComplexityLevel {
    type Err = UnknownComplexityLevel;

    /// Parses a rating, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ComplexityLevel::Low),
            "medium" => Ok(ComplexityLevel::Medium),
            "high" => Ok(ComplexityLevel::High),
            _ => Err(UnknownComplexityLevel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ComplexityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("low".parse::<ComplexityLevel>().unwrap(), ComplexityLevel::Low);
        assert_eq!(" HIGH ".parse::<ComplexityLevel>().unwrap(), ComplexityLevel::High);
        assert_eq!("Medium".parse::<ComplexityLevel>().unwrap(), ComplexityLevel::Medium);
    }

    #[test]
    fn rejects_unknown_levels() {
        assert!("extreme".parse::<ComplexityLevel>().is_err());
        assert!(serde_json::from_str::<ComplexityLevel>("\"extreme\"").is_err());
    }

    #[test]
    fn serializes_title_case() {
        assert_eq!(serde_json::to_string(&ComplexityLevel::High).unwrap(), "\"High\"");
        let level: ComplexityLevel = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(level, ComplexityLevel::Low);
    }
}
