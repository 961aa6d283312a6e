//! Analysis Parser: turns the model's bold-labeled analysis into an `AnalysisRecord`.
//!
//! Expected shape (sections in this order, free text in between):
//!
//! ```text
//! **Summary:** two or three sentences...
//! **Key Points:**
//! 1. **Strength** detail
//! 2. ...
//! **Rating:** Good
//! ```
//!
//! Parsing is total. Missing sections get placeholders, and an internal
//! fault yields `AnalysisRecord::parse_failure()`.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::models::analysis::{NO_KEY_POINTS, NO_SUMMARY};
use crate::models::{AnalysisRecord, Rating};
use crate::text::{extract_spans, SpanError, SpanRule};

pub const SUMMARY_MARKER: &str = "**Summary:**";
pub const KEY_POINTS_MARKER: &str = "**Key Points:**";
pub const RATING_MARKER: &str = "**Rating:**";

/// Fragments this short (after trimming) are numbering debris, not key points.
const MIN_KEY_POINT_CHARS: usize = 4;

const SECTION_RULES: [SpanRule; 3] = [
    SpanRule::before("summary", SUMMARY_MARKER, KEY_POINTS_MARKER),
    SpanRule::before("key_points", KEY_POINTS_MARKER, RATING_MARKER),
    SpanRule::word("rating", RATING_MARKER),
];

/// Parses raw model text into an analysis record. Never fails.
pub fn parse_analysis(raw: &str) -> AnalysisRecord {
    record_or_fallback(try_parse(raw))
}

fn record_or_fallback(result: Result<AnalysisRecord, SpanError>) -> AnalysisRecord {
    match result {
        Ok(record) => record,
        Err(e) => {
            warn!("Analysis response could not be parsed: {e}");
            AnalysisRecord::parse_failure()
        }
    }
}

fn try_parse(raw: &str) -> Result<AnalysisRecord, SpanError> {
    let spans = extract_spans(raw, &SECTION_RULES)?;

    let summary = spans
        .get("summary")
        .map(normalize_summary)
        .unwrap_or_else(|| NO_SUMMARY.to_string());

    let key_points = spans
        .get("key_points")
        .map(split_key_points)
        .filter(|points| !points.is_empty())
        .unwrap_or_else(|| vec![NO_KEY_POINTS.to_string()]);

    let rating = match spans.get("rating") {
        Some(word) => {
            let rating = Rating::from_word(word);
            if rating == Rating::NotRated {
                debug!("Unrecognised rating word {word:?}, treating as not rated");
            }
            rating
        }
        None => Rating::NotRated,
    };

    Ok(AnalysisRecord {
        summary,
        rating,
        key_points,
    })
}

/// Trims the summary and joins its lines with single spaces.
fn normalize_summary(span: &str) -> String {
    span.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_key_points(block: &str) -> Vec<String> {
    split_numbered(block)
        .into_iter()
        .map(|fragment| strip_leading_bold(fragment.trim_start()).trim().to_string())
        .filter(|point| point.chars().count() >= MIN_KEY_POINT_CHARS)
        .collect()
}

/// Splits on `<digits>.` followed by whitespace, consuming the whitespace run.
/// Text without any such marker comes back as a single fragment.
fn split_numbered(block: &str) -> Vec<&str> {
    let bytes = block.as_bytes();
    let mut fragments = Vec::new();
    let mut fragment_start = 0;
    let mut i = 0;

    while i + 2 < bytes.len() {
        let is_marker = bytes[i].is_ascii_digit()
            && bytes[i + 1] == b'.'
            && bytes[i + 2].is_ascii_whitespace();

        if is_marker {
            // Multi-digit markers like `10.` belong to the marker, not the previous point.
            let mut end = i;
            while end > fragment_start && bytes[end - 1].is_ascii_digit() {
                end -= 1;
            }
            fragments.push(&block[fragment_start..end]);
            let rest = &block[i + 2..];
            i = block.len() - rest.trim_start().len();
            fragment_start = i;
        } else {
            i += 1;
        }
    }

    fragments.push(&block[fragment_start..]);
    fragments
}

/// `**Title** rest` becomes `Title rest`. The bold run must close on the same line.
fn strip_leading_bold(fragment: &str) -> Cow<'_, str> {
    let Some(inner_and_rest) = fragment.strip_prefix("**") else {
        return Cow::Borrowed(fragment);
    };
    match inner_and_rest.find("**") {
        Some(close) if !inner_and_rest[..close].contains('\n') => Cow::Owned(format!(
            "{}{}",
            &inner_and_rest[..close],
            &inner_and_rest[close + 2..]
        )),
        _ => Cow::Borrowed(fragment),
    }
}
