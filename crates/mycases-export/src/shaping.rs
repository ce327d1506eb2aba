//! Arabic glyph shaping and bidi reordering.
//!
//! PDF text is drawn glyph by glyph, left to right, in the order given.
//! Arabic therefore needs its contextual presentation forms selected and
//! its runs put in visual order before drawing. DOCX does not: Word shapes
//! complex scripts itself.

use unicode_bidi::{BidiInfo, Level};

/// Converts logical-order text to the visual form to be drawn.
pub trait TextShaper: Send + Sync {
    fn shape(&self, text: &str) -> String;
}

/// Reshapes Arabic letters to their joined forms and reorders each line
/// for right-to-left display. Text without right-to-left characters is
/// returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicShaper;

impl TextShaper for ArabicShaper {
    fn shape(&self, text: &str) -> String {
        if !text.chars().any(is_rtl) {
            return text.to_string();
        }
        let reshaped = ar_reshaper::reshape_line(text);
        let bidi = BidiInfo::new(&reshaped, Some(Level::rtl()));
        bidi.paragraphs
            .iter()
            .map(|para| bidi.reorder_line(para, para.range.clone()).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Draws text exactly as stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unshaped;

impl TextShaper for Unshaped {
    fn shape(&self, text: &str) -> String {
        text.to_string()
    }
}

fn is_rtl(c: char) -> bool {
    matches!(
        u32::from(c),
        0x0590..=0x08FF | 0xFB1D..=0xFDFF | 0xFE70..=0xFEFF
    )
}
