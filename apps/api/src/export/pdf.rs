//! PDF rendering for generated resumes.
//!
//! Headings are bold with a rule underneath, list items get a dash bullet and a
//! hanging indent, paragraphs wrap to the content width. Page geometry follows
//! the builder's download settings: A4 with 10 mm margins.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, Color, Greyscale, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference,
    Point,
};
use thiserror::Error;
use tracing::debug;

use crate::export::font_metrics::Face;
use crate::models::{Block, Document};

pub const EXPORT_FILENAME: &str = "Generated_Resume.pdf";
const TITLE: &str = "Generated Resume";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

const HEADING_PT: f32 = 14.0;
const BODY_PT: f32 = 10.5;
const HEADING_LINE_MM: f32 = 7.0;
const BODY_LINE_MM: f32 = 5.0;
const HEADING_GAP_MM: f32 = 5.0;
const RULE_GAP_MM: f32 = 4.0;
const LIST_GAP_MM: f32 = 1.5;
const BULLET_OFFSET_MM: f32 = 1.5;
const LIST_INDENT_MM: f32 = 6.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One positioned drawing operation. Coordinates are in mm from the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Text {
        text: String,
        face: Face,
        size_pt: f32,
        x_mm: f32,
        y_mm: f32,
    },
    Rule {
        y_mm: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub items: Vec<Item>,
}

/// Tracks the baseline of the next line and starts new pages as needed.
struct Cursor {
    pages: Vec<PageLayout>,
    y_mm: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn at_page_top(&self) -> bool {
        self.y_mm >= PAGE_HEIGHT_MM - MARGIN_MM
    }

    /// Moves down by `height_mm`, breaking to a new page if it would cross the bottom margin.
    fn advance(&mut self, height_mm: f32) -> f32 {
        if self.y_mm - height_mm < MARGIN_MM && !self.at_page_top() {
            self.pages.push(PageLayout::default());
            self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.y_mm -= height_mm;
        self.y_mm
    }

    /// Vertical gap that is dropped at the top of a page.
    fn gap(&mut self, height_mm: f32) {
        if !self.at_page_top() {
            self.y_mm = (self.y_mm - height_mm).max(MARGIN_MM);
        }
    }

    fn push(&mut self, item: Item) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    fn text(&mut self, text: String, face: Face, size_pt: f32, x_mm: f32, line_mm: f32) {
        let y_mm = self.advance(line_mm);
        self.push(Item::Text {
            text,
            face,
            size_pt,
            x_mm,
            y_mm,
        });
    }
}

/// Computes page layout for a document without touching any PDF machinery.
pub fn layout(document: &Document) -> Vec<PageLayout> {
    let mut cursor = Cursor::new();

    for block in document.blocks() {
        match block {
            Block::Heading(text) => {
                cursor.gap(HEADING_GAP_MM);
                let metrics = Face::Bold.metrics();
                for line in metrics.wrap(&to_latin1(text), HEADING_PT, CONTENT_WIDTH_MM) {
                    cursor.text(line, Face::Bold, HEADING_PT, MARGIN_MM, HEADING_LINE_MM);
                }
                let y_mm = cursor.advance(RULE_GAP_MM / 2.0);
                cursor.push(Item::Rule { y_mm });
                cursor.gap(RULE_GAP_MM / 2.0);
            }
            Block::Paragraph(text) => {
                let metrics = Face::Regular.metrics();
                for line in metrics.wrap(&to_latin1(text), BODY_PT, CONTENT_WIDTH_MM) {
                    cursor.text(line, Face::Regular, BODY_PT, MARGIN_MM, BODY_LINE_MM);
                }
            }
            Block::ListItem(text) => {
                let metrics = Face::Regular.metrics();
                let width = CONTENT_WIDTH_MM - LIST_INDENT_MM;
                let lines = metrics.wrap(&to_latin1(text), BODY_PT, width);
                for (i, line) in lines.into_iter().enumerate() {
                    cursor.text(
                        line,
                        Face::Regular,
                        BODY_PT,
                        MARGIN_MM + LIST_INDENT_MM,
                        BODY_LINE_MM,
                    );
                    if i == 0 {
                        let y_mm = cursor.y_mm;
                        cursor.push(Item::Text {
                            text: "-".to_string(),
                            face: Face::Regular,
                            size_pt: BODY_PT,
                            x_mm: MARGIN_MM + BULLET_OFFSET_MM,
                            y_mm,
                        });
                    }
                }
            }
            Block::ListOpen | Block::ListClose => cursor.gap(LIST_GAP_MM),
        }
    }

    cursor.pages
}

/// Renders `document` to PDF bytes.
pub fn render_pdf(document: &Document) -> Result<Vec<u8>, ExportError> {
    let pages = layout(document);
    debug!("Rendering PDF: {} blocks on {} pages", document.len(), pages.len());

    let (doc, first_page, first_layer) =
        PdfDocument::new(TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        draw_page(&layer, page, &regular, &bold);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

fn draw_page(
    layer: &PdfLayerReference,
    page: &PageLayout,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    layer.set_outline_color(Color::Greyscale(Greyscale::new(0.7, None)));
    layer.set_outline_thickness(0.5);

    for item in &page.items {
        match item {
            Item::Text {
                text,
                face,
                size_pt,
                x_mm,
                y_mm,
            } => {
                let font = match face {
                    Face::Regular => regular,
                    Face::Bold => bold,
                };
                layer.use_text(text.as_str(), *size_pt, Mm(*x_mm), Mm(*y_mm), font);
            }
            Item::Rule { y_mm } => layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(MARGIN_MM), Mm(*y_mm)), false),
                    (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(*y_mm)), false),
                ],
                is_closed: false,
            }),
        }
    }
}

/// The base-14 fonts only cover Latin-1; map common typography to ASCII and
/// replace anything else outside Latin-1 with `?`.
fn to_latin1(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '•' | '‣' | '◦' | '▪' => '-',
            '‘' | '’' | '‚' => '\'',
            '“' | '”' | '„' => '"',
            '–' | '—' | '‐' | '−' => '-',
            '…' => '.',
            c if (c as u32) <= 0xFF => c,
            _ => '?',
        })
        .collect()
}
