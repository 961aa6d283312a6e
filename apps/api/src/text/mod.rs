pub mod spans;

pub use spans::{extract_spans, SpanError, SpanRule};
