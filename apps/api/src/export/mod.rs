// Export: renders a block document into a paginated A4 PDF.
// Layout is computed first (pure, testable), then drawn with printpdf.

pub mod font_metrics;
pub mod pdf;

pub use pdf::{render_pdf, EXPORT_FILENAME};
