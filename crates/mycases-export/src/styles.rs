use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// DOCX font for Latin text.
    pub body_font: String,

    /// DOCX font for Arabic (complex script) text.
    pub arabic_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Report title size in points.
    pub heading1_size: usize,

    /// Section title size in points.
    pub heading2_size: usize,

    /// Page margin in millimetres (applied uniformly).
    pub margin_mm: f32,

    /// TTF used for PDF body text. When unset the first existing
    /// [`Self::font_candidates`] entry is used.
    pub regular_font_path: Option<PathBuf>,

    /// TTF used for PDF headings and labels. Falls back to the regular font.
    pub bold_font_path: Option<PathBuf>,

    /// Arabic-capable system fonts tried in order when no font path is
    /// configured.
    pub font_candidates: Vec<FontCandidate>,

    /// Header colour as RGB.
    pub brand_color: (u8, u8, u8),
}

/// A regular TTF and its optional bold companion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCandidate {
    pub regular: PathBuf,
    pub bold: Option<PathBuf>,
}

impl FontCandidate {
    fn pair(regular: &str, bold: &str) -> Self {
        Self {
            regular: PathBuf::from(regular),
            bold: Some(PathBuf::from(bold)),
        }
    }
}

/// Well-known locations of fonts with Arabic presentation forms.
pub fn system_arabic_fonts() -> Vec<FontCandidate> {
    vec![
        FontCandidate::pair(
            "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
            "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Bold.ttf",
        ),
        FontCandidate::pair(
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        ),
        FontCandidate::pair(
            "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
        ),
        FontCandidate::pair(
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        ),
        FontCandidate::pair(r"C:\Windows\Fonts\arial.ttf", r"C:\Windows\Fonts\arialbd.ttf"),
        FontCandidate::pair(r"C:\Windows\Fonts\tahoma.ttf", r"C:\Windows\Fonts\tahomabd.ttf"),
    ]
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            arabic_font: "Noto Naskh Arabic".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            margin_mm: 12.0,
            regular_font_path: None,
            bold_font_path: None,
            font_candidates: system_arabic_fonts(),
            brand_color: (0x17, 0x56, 0x06),
        }
    }
}
