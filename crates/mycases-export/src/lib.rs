//! mycases-export
//!
//! Report assembly from case and survey records, and DOCX + PDF
//! generation from the assembled report.

pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod report;
pub mod shaping;
pub mod styles;

use std::path::Path;

use error::ExportError;
use report::Report;
use shaping::TextShaper;
use styles::DocumentStyles;

/// Output format, chosen from the target file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Docx,
    Pdf,
}

impl ExportFormat {
    /// DOCX for `.docx`, PDF for anything else.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("docx") => ExportFormat::Docx,
            _ => ExportFormat::Pdf,
        }
    }
}

/// Render `report` in the format implied by `path` and write it there.
pub fn export_to_path(
    report: &Report,
    path: &Path,
    styles: &DocumentStyles,
    shaper: &dyn TextShaper,
) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::for_path(path);
    let bytes = match format {
        ExportFormat::Docx => {
            let rendered = render::render_markdown(report)?;
            docx::generate_docx(&rendered, styles)?
        }
        ExportFormat::Pdf => pdf::generate_pdf(report, styles, shaper)?,
    };
    std::fs::write(path, bytes).map_err(|e| ExportError::Write {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), ?format, "report exported");
    Ok(format)
}
