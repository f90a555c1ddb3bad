use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Granularity requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    Detailed,
    #[default]
    Medium,
    Short,
    Custom,
}

impl SummaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Detailed => "detailed",
            Self::Medium => "medium",
            Self::Short => "short",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for SummaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "medium" | "" => Ok(Self::Medium),
            "short" => Ok(Self::Short),
            "custom" => Ok(Self::Custom),
            other => Err(format!(
                "Invalid summary type: {}. Expected: detailed, medium, short, or custom",
                other
            )),
        }
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Technique that dominated a generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMethod {
    Extractive,
    Abstractive,
    Mixed,
}

impl SummaryMethod {
    pub const ALL: [SummaryMethod; 3] = [Self::Extractive, Self::Abstractive, Self::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Abstractive => "abstractive",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse_loose(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub document_text: String,
    pub summary_type: SummaryType,
    pub custom_length: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary_title: String,
    pub summary_text: String,
    pub summary_method: SummaryMethod,
}
