//! Block model for a reconstructed resume document.
//!
//! A `Document` is a flat, ordered sequence of blocks. Lists are not nested
//! structures; they are bracketed by `ListOpen` / `ListClose` markers so the
//! sequence can be produced in a single forward pass and streamed to a renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Block {
    Heading(String),
    Paragraph(String),
    ListItem(String),
    ListOpen,
    ListClose,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("list opened at block {0} is never closed")]
    UnmatchedListOpen(usize),

    #[error("list close at block {0} has no matching open")]
    UnmatchedListClose(usize),

    #[error("list opened at block {0} while another list is open")]
    NestedList(usize),

    #[error("list item at block {0} is outside of a list")]
    ListItemOutsideList(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Checks that list brackets are balanced, never nest, and enclose every list item.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut open_at: Option<usize> = None;

        for (index, block) in self.blocks.iter().enumerate() {
            match block {
                Block::ListOpen => {
                    if open_at.is_some() {
                        return Err(DocumentError::NestedList(index));
                    }
                    open_at = Some(index);
                }
                Block::ListClose => {
                    if open_at.take().is_none() {
                        return Err(DocumentError::UnmatchedListClose(index));
                    }
                }
                Block::ListItem(_) if open_at.is_none() => {
                    return Err(DocumentError::ListItemOutsideList(index));
                }
                _ => {}
            }
        }

        match open_at {
            Some(index) => Err(DocumentError::UnmatchedListOpen(index)),
            None => Ok(()),
        }
    }

    /// Reconstructs plain text lines: headings and paragraphs verbatim,
    /// list items as `- item`. Bracket blocks produce no line.
    #[cfg(test)]
    pub fn to_lines(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading(text) | Block::Paragraph(text) => Some(text.clone()),
                Block::ListItem(text) => Some(format!("- {text}")),
                Block::ListOpen | Block::ListClose => None,
            })
            .collect()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
