//! Document Formatter: classifies plain-text resume lines into `Block`s.
//!
//! Single forward pass, two states. A heading or paragraph seen while a list is
//! open closes it first; a bullet seen outside a list opens one. Whatever is
//! still open at end of input is closed, so the output is always validly bracketed.

use std::iter::FusedIterator;
use std::str::Lines;

use crate::models::{Block, Document};

/// Section names that start a heading line (matched as a case-insensitive prefix).
pub const SECTION_NAMES: [&str; 6] = [
    "Summary",
    "Education",
    "Skills",
    "Projects",
    "Experience",
    "Achievements",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    Outside,
    Inside,
}

/// A trimmed, non-empty input line after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Heading(&'a str),
    Bullet(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if is_heading(line) {
            Line::Heading(line)
        } else if let Some(rest) = line.strip_prefix(|c| c == '-' || c == '•') {
            Line::Bullet(rest.trim())
        } else {
            Line::Text(line)
        }
    }

    fn into_block(self) -> Block {
        match self {
            Line::Heading(text) => Block::Heading(text.to_string()),
            Line::Bullet(text) => Block::ListItem(text.to_string()),
            Line::Text(text) => Block::Paragraph(text.to_string()),
        }
    }
}

fn is_heading(line: &str) -> bool {
    SECTION_NAMES.iter().any(|name| {
        line.get(..name.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
    })
}

/// Returns the next state, an optional bracket block to emit first, and the content block.
fn transition(state: ListState, line: Line<'_>) -> (ListState, Option<Block>, Block) {
    match (state, line) {
        (ListState::Outside, Line::Bullet(_)) => {
            (ListState::Inside, Some(Block::ListOpen), line.into_block())
        }
        (ListState::Inside, Line::Bullet(_)) => (ListState::Inside, None, line.into_block()),
        (ListState::Inside, _) => (ListState::Outside, Some(Block::ListClose), line.into_block()),
        (ListState::Outside, _) => (ListState::Outside, None, line.into_block()),
    }
}

/// Lazy lines → blocks transducer. Consumes its input once; not restartable.
#[derive(Debug)]
pub struct Blocks<I> {
    lines: I,
    state: ListState,
    pending: Option<Block>,
    finished: bool,
}

impl<'a, I> Blocks<I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            state: ListState::Outside,
            pending: None,
            finished: false,
        }
    }
}

impl<'a, I> Iterator for Blocks<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if let Some(block) = self.pending.take() {
            return Some(block);
        }
        if self.finished {
            return None;
        }

        let Some(line) = self.lines.by_ref().map(str::trim).find(|l| !l.is_empty()) else {
            self.finished = true;
            return match self.state {
                ListState::Inside => {
                    self.state = ListState::Outside;
                    Some(Block::ListClose)
                }
                ListState::Outside => None,
            };
        };

        let (next_state, bracket, content) = transition(self.state, Line::classify(line));
        self.state = next_state;
        match bracket {
            Some(bracket) => {
                self.pending = Some(content);
                Some(bracket)
            }
            None => Some(content),
        }
    }
}

impl<'a, I> FusedIterator for Blocks<I> where I: Iterator<Item = &'a str> {}

/// Streams the blocks of `text` line by line.
pub fn blocks(text: &str) -> Blocks<Lines<'_>> {
    Blocks::new(text.lines())
}

/// Formats raw model text into a complete document.
pub fn format_document(text: &str) -> Document {
    blocks(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(t: &str) -> Block {
        Block::Heading(t.to_string())
    }
    fn para(t: &str) -> Block {
        Block::Paragraph(t.to_string())
    }
    fn item(t: &str) -> Block {
        Block::ListItem(t.to_string())
    }

    #[test]
    fn test_skills_list_then_paragraph() {
        let doc = format_document("Skills\n- Python\n- Go\nSome paragraph.");
        assert_eq!(
            doc.blocks(),
            &[
                heading("Skills"),
                Block::ListOpen,
                item("Python"),
                item("Go"),
                Block::ListClose,
                para("Some paragraph."),
            ]
        );
    }

    #[test]
    fn test_blank_lines_produce_nothing() {
        let doc = format_document("\n   \nJane Doe\n\n\t\n");
        assert_eq!(doc.blocks(), &[para("Jane Doe")]);
        assert!(format_document("").is_empty());
        assert!(format_document("  \n \r\n").is_empty());
    }

    #[test]
    fn test_blank_line_does_not_close_list() {
        let doc = format_document("- a\n\n- b");
        assert_eq!(
            doc.blocks(),
            &[Block::ListOpen, item("a"), item("b"), Block::ListClose]
        );
    }

    #[test]
    fn test_heading_is_case_insensitive_prefix() {
        let doc = format_document("EXPERIENCE:\nskills and tools\nProjects Overview");
        assert_eq!(
            doc.blocks(),
            &[
                heading("EXPERIENCE:"),
                heading("skills and tools"),
                heading("Projects Overview"),
            ]
        );
    }

    #[test]
    fn test_heading_closes_list() {
        let doc = format_document("- Rust\nEducation\n- BSc");
        assert_eq!(
            doc.blocks(),
            &[
                Block::ListOpen,
                item("Rust"),
                Block::ListClose,
                heading("Education"),
                Block::ListOpen,
                item("BSc"),
                Block::ListClose,
            ]
        );
    }

    #[test]
    fn test_heading_takes_precedence_over_bullet() {
        let doc = format_document("Summary - brief\n- Skills");
        assert_eq!(
            doc.blocks(),
            &[
                heading("Summary - brief"),
                Block::ListOpen,
                item("Skills"),
                Block::ListClose,
            ]
        );
    }

    #[test]
    fn test_bullet_markers_are_stripped() {
        let doc = format_document("  •   Led team  \n-tight\n- - double");
        assert_eq!(
            doc.blocks(),
            &[
                Block::ListOpen,
                item("Led team"),
                item("tight"),
                item("- double"),
                Block::ListClose,
            ]
        );
    }

    #[test]
    fn test_text_lines_are_trimmed_not_rewritten() {
        let doc = format_document("   Jane   Doe  \r\n  jane@example.com");
        assert_eq!(doc.blocks(), &[para("Jane   Doe"), para("jane@example.com")]);
    }

    #[test]
    fn test_transducer_is_lazy() {
        let mut stream = Blocks::new(std::iter::repeat("- forever"));
        assert_eq!(stream.next(), Some(Block::ListOpen));
        assert_eq!(stream.next(), Some(item("forever")));
        assert_eq!(stream.next(), Some(item("forever")));
    }

    #[test]
    fn test_transducer_is_fused() {
        let mut stream = blocks("- a");
        assert_eq!(stream.by_ref().count(), 3);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    /// Every sequence of up to five lines drawn from a small alphabet.
    fn line_combinations() -> Vec<String> {
        const ALPHABET: [&str; 6] = ["Skills:", "- Rust", "• Go", "Prose line.", "", "-"];
        let mut out = vec![String::new()];
        let mut frontier = vec![Vec::<&str>::new()];
        for _ in 0..5 {
            let mut next = Vec::new();
            for prefix in &frontier {
                for line in ALPHABET {
                    let mut lines = prefix.clone();
                    lines.push(line);
                    out.push(lines.join("\n"));
                    next.push(lines);
                }
            }
            frontier = next;
        }
        out
    }

    #[test]
    fn test_output_is_always_validly_bracketed() {
        for input in line_combinations() {
            let doc = format_document(&input);
            assert_eq!(doc.validate(), Ok(()), "input: {input:?}");
        }
    }

    #[test]
    fn test_reformatting_reconstruction_is_stable() {
        for input in line_combinations() {
            let doc = format_document(&input);
            let rebuilt = format_document(&doc.to_lines().join("\n"));
            assert_eq!(rebuilt, doc, "input: {input:?}");
        }
    }

    #[test]
    fn test_line_order_and_content_preserved() {
        let input = "Jane Doe\nSummary\nBuilds things.\nSkills\n- Rust\n- Go";
        let doc = format_document(input);
        let lines: Vec<String> = input
            .lines()
            .map(|l| l.strip_prefix("- ").unwrap_or(l).to_string())
            .collect();
        let texts: Vec<String> = doc
            .blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Heading(t) | Block::Paragraph(t) | Block::ListItem(t) => Some(t.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, lines);
    }
}
