//! Labeled span extraction over semi-structured model output.
//!
//! Each `SpanRule` names a start anchor and how far to read past it. Rules are
//! evaluated independently against the whole text, in order, so a missing
//! section never shifts the others. All slicing is checked: a bad boundary is
//! reported as `SpanError` instead of panicking.

use thiserror::Error;

/// Where a span stops once its start anchor is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanEnd {
    /// Up to (not including) the first occurrence of this anchor after the start.
    /// No span is produced if the anchor never follows.
    Before(&'static str),
    /// A single word of ASCII word characters, after optional whitespace.
    /// Every occurrence of the start anchor is tried until one is followed by a word.
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanRule {
    pub label: &'static str,
    pub start: &'static str,
    pub end: SpanEnd,
}

impl SpanRule {
    pub const fn before(label: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            label,
            start,
            end: SpanEnd::Before(end),
        }
    }

    pub const fn word(label: &'static str, start: &'static str) -> Self {
        Self {
            label,
            start,
            end: SpanEnd::Word,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("span '{label}' has invalid bounds {start}..{end}")]
    InvalidBounds {
        label: &'static str,
        start: usize,
        end: usize,
    },
}

/// Result of running a rule set: one optional slice per rule, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spans<'t> {
    found: Vec<(&'static str, Option<&'t str>)>,
}

impl<'t> Spans<'t> {
    pub fn get(&self, label: &str) -> Option<&'t str> {
        self.found
            .iter()
            .find(|(l, _)| *l == label)
            .and_then(|(_, span)| *span)
    }
}

/// Runs every rule against `text` and collects the spans that were found.
pub fn extract_spans<'t>(text: &'t str, rules: &[SpanRule]) -> Result<Spans<'t>, SpanError> {
    let found = rules
        .iter()
        .map(|rule| {
            let span = match rule.end {
                SpanEnd::Before(end) => span_before(text, rule, end)?,
                SpanEnd::Word => word_after(text, rule)?,
            };
            Ok((rule.label, span))
        })
        .collect::<Result<Vec<_>, SpanError>>()?;

    Ok(Spans { found })
}

fn span_before<'t>(
    text: &'t str,
    rule: &SpanRule,
    end: &str,
) -> Result<Option<&'t str>, SpanError> {
    let Some(start_at) = text.find(rule.start) else {
        return Ok(None);
    };
    let body_start = start_at + rule.start.len();
    let rest = slice(text, rule.label, body_start, text.len())?;

    match rest.find(end) {
        Some(offset) => slice(text, rule.label, body_start, body_start + offset).map(Some),
        None => Ok(None),
    }
}

fn word_after<'t>(text: &'t str, rule: &SpanRule) -> Result<Option<&'t str>, SpanError> {
    for (start_at, anchor) in text.match_indices(rule.start) {
        let after = slice(text, rule.label, start_at + anchor.len(), text.len())?;
        let candidate = after.trim_start();
        let word_len = candidate
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();

        if word_len > 0 {
            let word_start = text.len() - candidate.len();
            return slice(text, rule.label, word_start, word_start + word_len).map(Some);
        }
    }
    Ok(None)
}

fn slice<'t>(
    text: &'t str,
    label: &'static str,
    start: usize,
    end: usize,
) -> Result<&'t str, SpanError> {
    text.get(start..end)
        .ok_or(SpanError::InvalidBounds { label, start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: [SpanRule; 2] = [
        SpanRule::before("body", "<b>", "</b>"),
        SpanRule::word("grade", "grade="),
    ];

    #[test]
    fn test_before_span_is_non_greedy() {
        let spans = extract_spans("<b>one</b> <b>two</b>", &RULES).unwrap();
        assert_eq!(spans.get("body"), Some("one"));
    }

    #[test]
    fn test_before_span_crosses_lines() {
        let spans = extract_spans("<b>first\nsecond</b>", &RULES).unwrap();
        assert_eq!(spans.get("body"), Some("first\nsecond"));
    }

    #[test]
    fn test_before_span_requires_end_anchor() {
        let spans = extract_spans("<b>never closed", &RULES).unwrap();
        assert_eq!(spans.get("body"), None);
    }

    #[test]
    fn test_end_anchor_before_start_is_ignored() {
        let spans = extract_spans("</b> <b>late", &RULES).unwrap();
        assert_eq!(spans.get("body"), None);
    }

    #[test]
    fn test_word_skips_whitespace() {
        let spans = extract_spans("grade=  \n Good things", &RULES).unwrap();
        assert_eq!(spans.get("grade"), Some("Good"));
    }

    #[test]
    fn test_word_stops_at_punctuation() {
        let spans = extract_spans("grade=Good.", &RULES).unwrap();
        assert_eq!(spans.get("grade"), Some("Good"));
    }

    #[test]
    fn test_word_tries_later_anchors() {
        let spans = extract_spans("grade= - grade=Poor", &RULES).unwrap();
        assert_eq!(spans.get("grade"), Some("Poor"));
    }

    #[test]
    fn test_word_missing() {
        let spans = extract_spans("grade=", &RULES).unwrap();
        assert_eq!(spans.get("grade"), None);
    }

    #[test]
    fn test_rules_are_independent() {
        let spans = extract_spans("grade=Average and nothing else", &RULES).unwrap();
        assert_eq!(spans.get("body"), None);
        assert_eq!(spans.get("grade"), Some("Average"));
        assert_eq!(spans.found.len(), 2);
    }

    #[test]
    fn test_multibyte_text_is_sliced_safely() {
        let spans = extract_spans("<b>naïve • café</b> grade=Gut", &RULES).unwrap();
        assert_eq!(spans.get("body"), Some("naïve • café"));
        assert_eq!(spans.get("grade"), Some("Gut"));
    }

    #[test]
    fn test_unknown_label() {
        let spans = extract_spans("", &RULES).unwrap();
        assert_eq!(spans.get("missing"), None);
    }
}
