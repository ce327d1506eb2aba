//! A4 PDF rendering of a [`Report`] via `printpdf`.
//!
//! Layout is right-to-left: labels sit against the right margin with their
//! values in a column to the left. Text widths are estimated from the font
//! size, since `printpdf` does not expose glyph metrics.
//!
//! [`layout_pages`] decides what goes where, already shaped for display;
//! [`generate_pdf`] only draws it.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, Rgb};

use crate::error::ExportError;
use crate::report::{APP_NAME, FOOTER, GENERATED_LABEL, Report};
use crate::shaping::TextShaper;
use crate::styles::DocumentStyles;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const PT_TO_MM: f32 = 0.352_778;
const LABEL_COLUMN: f32 = 60.0;
const COLUMN_GAP: f32 = 6.0;
const FOOTER_SIZE: f32 = 8.0;
const BLACK: (u8, u8, u8) = (0, 0, 0);
const LAYER: &str = "Layer 1";

/// One line of display-ready text. Positions are in mm from the bottom
/// left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub bold: bool,
    pub color: (u8, u8, u8),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub texts: Vec<PlacedText>,
}

/// Generate a PDF for `report`. Returns the PDF bytes.
///
/// Fails with [`ExportError::NoArabicFont`] when no font is configured and
/// none of the style's font candidates exist.
pub fn generate_pdf(
    report: &Report,
    styles: &DocumentStyles,
    shaper: &dyn TextShaper,
) -> Result<Vec<u8>, ExportError> {
    let (regular_path, bold_path) = resolve_fonts(styles)?;
    let pages = layout_pages(report, styles, shaper);

    let (doc, page1, layer1) =
        PdfDocument::new(&report.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
    let regular = external_font(&doc, &regular_path)?;
    let bold = match bold_path {
        Some(path) => external_font(&doc, &path)?,
        None => regular.clone(),
    };

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            doc.get_page(page).get_layer(layer)
        };
        for placed in &page.texts {
            let (r, g, b) = placed.color;
            let channel = |c: u8| f32::from(c) / 255.0;
            layer.set_fill_color(Color::Rgb(Rgb::new(
                channel(r),
                channel(g),
                channel(b),
                None,
            )));
            let font = if placed.bold { &bold } else { &regular };
            layer.use_text(
                placed.text.as_str(),
                placed.size,
                Mm(placed.x),
                Mm(placed.y),
                font,
            );
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save failed: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

/// The configured font pair, or the first candidate present on disk.
/// A missing bold face falls back to the regular one.
pub fn resolve_fonts(styles: &DocumentStyles) -> Result<(PathBuf, Option<PathBuf>), ExportError> {
    if let Some(regular) = &styles.regular_font_path {
        return Ok((regular.clone(), styles.bold_font_path.clone()));
    }
    let candidate = styles
        .font_candidates
        .iter()
        .find(|c| c.regular.is_file())
        .ok_or(ExportError::NoArabicFont)?;
    tracing::debug!(font = %candidate.regular.display(), "using system font");
    let bold = candidate.bold.clone().filter(|p| p.is_file());
    Ok((candidate.regular.clone(), bold))
}

fn external_font(doc: &PdfDocumentReference, path: &Path) -> Result<IndirectFontRef, ExportError> {
    let font_error = |reason: String| ExportError::Font {
        path: path.display().to_string(),
        reason,
    };
    let file = File::open(path).map_err(|e| font_error(e.to_string()))?;
    doc.add_external_font(file)
        .map_err(|e| font_error(e.to_string()))
}

/// Place every header, section title, row and footer of `report` on A4
/// pages. All text is passed through `shaper`.
pub fn layout_pages(
    report: &Report,
    styles: &DocumentStyles,
    shaper: &dyn TextShaper,
) -> Vec<PageLayout> {
    let mut layout = Layout {
        pages: vec![PageLayout::default()],
        y: PAGE_HEIGHT - styles.margin_mm,
        styles,
        shaper,
    };
    layout.header(report);
    for section in &report.sections {
        layout.section_title(&section.title);
        for row in &section.rows {
            layout.row(&row.label, &row.value);
        }
        layout.advance(3.0);
    }
    layout.finish()
}

struct Layout<'a> {
    pages: Vec<PageLayout>,
    /// Baseline of the next line, in mm from the page bottom.
    y: f32,
    styles: &'a DocumentStyles,
    shaper: &'a dyn TextShaper,
}

impl Layout<'_> {
    fn right_edge(&self) -> f32 {
        PAGE_WIDTH - self.styles.margin_mm
    }

    fn bottom_limit(&self) -> f32 {
        self.styles.margin_mm + FOOTER_SIZE * PT_TO_MM * 3.0
    }

    fn line_height(size: f32) -> f32 {
        size * PT_TO_MM * 1.5
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Start a new page when fewer than `needed` mm remain above the footer.
    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed >= self.bottom_limit() {
            return;
        }
        self.pages.push(PageLayout::default());
        self.y = PAGE_HEIGHT - self.styles.margin_mm;
    }

    fn place(&mut self, text: String, size: f32, x: f32, bold: bool, color: (u8, u8, u8)) {
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.texts.push(PlacedText {
                text,
                size,
                x,
                y,
                bold,
                color,
            });
        }
    }

    /// Place `text` with its right end at `right_x`.
    fn text_right(&mut self, text: &str, size: f32, right_x: f32, bold: bool, color: (u8, u8, u8)) {
        let shaped = self.shaper.shape(text);
        let x = (right_x - estimated_width(&shaped, size)).max(self.styles.margin_mm);
        self.place(shaped, size, x, bold, color);
    }

    fn header(&mut self, report: &Report) {
        let title_size = self.styles.heading1_size as f32;
        let body_size = self.styles.body_size as f32;
        let brand = self.styles.brand_color;

        self.advance(title_size * PT_TO_MM);
        let app = self.shaper.shape(APP_NAME);
        self.place(app, title_size, self.styles.margin_mm, true, brand);
        self.text_right(&report.subject, title_size, self.right_edge(), true, brand);
        self.advance(Self::line_height(title_size));

        self.text_right(&report.title, body_size + 3.0, self.right_edge(), true, BLACK);
        self.advance(Self::line_height(body_size + 3.0));

        let generated = format!("{GENERATED_LABEL}: {}", report.generated_at);
        self.text_right(&generated, body_size - 1.0, self.right_edge(), false, BLACK);
        self.advance(Self::line_height(body_size) + 4.0);
    }

    fn section_title(&mut self, title: &str) {
        let size = self.styles.heading2_size as f32;
        let body = self.styles.body_size as f32;
        // Keep the title with at least its first row.
        self.ensure_space(Self::line_height(size) + Self::line_height(body));
        self.text_right(title, size, self.right_edge(), true, self.styles.brand_color);
        self.advance(Self::line_height(size));
    }

    fn row(&mut self, label: &str, value: &str) {
        let size = self.styles.body_size as f32;
        let line = Self::line_height(size);
        let label_right = self.right_edge();
        let value_right = label_right - LABEL_COLUMN - COLUMN_GAP;
        let value_width = value_right - self.styles.margin_mm;

        let labels = wrap_text(label, chars_for_width(LABEL_COLUMN, size));
        let values = wrap_text(value, chars_for_width(value_width, size));
        let lines = labels.len().max(values.len());

        for i in 0..lines {
            self.ensure_space(line);
            if let Some(label) = labels.get(i) {
                self.text_right(label, size, label_right, true, BLACK);
            }
            if let Some(value) = values.get(i) {
                self.text_right(value, size, value_right, false, BLACK);
            }
            self.advance(line);
        }
        self.advance(1.0);
    }

    /// Add the footer and page number to every page.
    fn finish(mut self) -> Vec<PageLayout> {
        let footer = self.shaper.shape(FOOTER);
        let footer_x = (PAGE_WIDTH - estimated_width(&footer, FOOTER_SIZE)) / 2.0;
        let y = self.styles.margin_mm;
        let margin = self.styles.margin_mm;
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.texts.push(PlacedText {
                text: footer.clone(),
                size: FOOTER_SIZE,
                x: footer_x,
                y,
                bold: false,
                color: BLACK,
            });
            page.texts.push(PlacedText {
                text: (i + 1).to_string(),
                size: FOOTER_SIZE,
                x: margin,
                y,
                bold: false,
                color: BLACK,
            });
        }
        self.pages
    }
}

fn estimated_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5 * PT_TO_MM
}

fn chars_for_width(width_mm: f32, size: f32) -> usize {
    ((width_mm / (size * 0.5 * PT_TO_MM)) as usize).max(8)
}

/// Word wrap by character count, on logical-order text.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let current_len = current.chars().count();
        if current_len > 0 && current_len + word.chars().count() + 1 > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
