pub mod analysis;
pub mod document;
pub mod form;

pub use analysis::{AnalysisRecord, Rating};
pub use document::{Block, Document};
pub use form::FormRecord;
