use serde::{Deserialize, Serialize};

/// Timing precision of a tag category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrecisionType {
    Long,
    Medium,
    Short,
}

impl PrecisionType {
    /// Wire code, as stored in seed data
    pub fn code(&self) -> &'static str {
        match self {
            PrecisionType::Long => "LONG",
            PrecisionType::Medium => "MEDIUM",
            PrecisionType::Short => "SHORT",
        }
    }

    /// All precision types, in the order the form offers them
    pub fn all() -> Vec<PrecisionType> {
        vec![
            PrecisionType::Long,
            PrecisionType::Medium,
            PrecisionType::Short,
        ]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "LONG" => Some(PrecisionType::Long),
            "MEDIUM" => Some(PrecisionType::Medium),
            "SHORT" => Some(PrecisionType::Short),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrecisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
