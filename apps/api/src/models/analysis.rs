use std::fmt;

use serde::{Deserialize, Serialize};

pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_KEY_POINTS: &str = "No key points available";

/// One-word quality grade assigned by the model.
///
/// Serialized as its display string so clients can render it directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
    #[default]
    #[serde(rename = "Not Rated")]
    NotRated,
}

impl Rating {
    /// Maps a rating word to a grade, ignoring case. Unknown words are `NotRated`.
    pub fn from_word(word: &str) -> Self {
        const GRADES: [(&str, Rating); 4] = [
            ("excellent", Rating::Excellent),
            ("good", Rating::Good),
            ("average", Rating::Average),
            ("poor", Rating::Poor),
        ];

        GRADES
            .iter()
            .find(|(name, _)| word.eq_ignore_ascii_case(name))
            .map(|(_, rating)| *rating)
            .unwrap_or(Rating::NotRated)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::Poor => "Poor",
            Rating::NotRated => "Not Rated",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result of a resume analysis.
///
/// Always fully populated: when the model output lacks a section, the parser
/// fills in a placeholder instead of leaving the field empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub summary: String,
    pub rating: Rating,
    /// Every entry is longer than 3 characters after trimming.
    pub key_points: Vec<String>,
}

impl AnalysisRecord {
    /// Record returned when extraction hits an internal fault.
    pub fn parse_failure() -> Self {
        Self {
            summary: "Could not parse summary.".to_string(),
            rating: Rating::NotRated,
            key_points: vec!["Parsing failed".to_string()],
        }
    }
}

impl Default for AnalysisRecord {
    fn default() -> Self {
        Self {
            summary: NO_SUMMARY.to_string(),
            rating: Rating::NotRated,
            key_points: vec![NO_KEY_POINTS.to_string()],
        }
    }
}
