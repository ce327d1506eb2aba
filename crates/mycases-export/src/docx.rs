use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a right-to-left DOCX document from rendered report output.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` → DOCX Heading 1
/// - `## Heading` → DOCX Heading 2
/// - `- item` → list item, with `**label:**` rendered bold
/// - `---` → page break
/// - Everything else → normal paragraph
///
/// Every paragraph is right-aligned and every run carries the Arabic
/// complex-script font.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2", styles));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1", styles));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(body_paragraph(text, styles));
        } else if trimmed == "---" {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn fonts(styles: &DocumentStyles) -> RunFonts {
    RunFonts::new()
        .ascii(&styles.body_font)
        .hi_ansi(&styles.body_font)
        .cs(&styles.arabic_font)
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .align(AlignmentType::Right)
        .add_run(Run::new().add_text(text).fonts(fonts(styles)))
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Right);
    for run in parse_inline(text, styles) {
        para = para.add_run(run.size(styles.body_size * 2));
    }
    para
}

/// Split `**bold**` spans into runs. `\*` and `\\` are literal. An
/// unpaired trailing marker leaves the rest of the line plain.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut spans: Vec<(String, bool)> = Vec::new();
    let mut current = String::new();
    let mut bold = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => current.push(chars.next().unwrap_or('\\')),
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                spans.push((std::mem::take(&mut current), bold));
                bold = !bold;
            }
            c => current.push(c),
        }
    }
    if bold {
        // Unclosed: put the marker back and keep the tail plain.
        current.insert_str(0, "**");
    }
    spans.push((current, false));

    spans
        .into_iter()
        .filter(|(segment, _)| !segment.is_empty())
        .map(|(segment, bold)| {
            let run = Run::new().add_text(segment).fonts(fonts(styles));
            if bold { run.bold() } else { run }
        })
        .collect()
}
