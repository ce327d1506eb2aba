use std::path::Path;

use jiff::civil::date;
use tempfile::TempDir;

use mycases_core::models::case::CaseRecord;
use mycases_export::docx::generate_docx;
use mycases_export::error::ExportError;
use mycases_export::pdf::{PageLayout, generate_pdf, layout_pages, resolve_fonts};
use mycases_export::render::render_markdown;
use mycases_export::report::{CASE_REPORT_TITLE, FOOTER, Report, case_report};
use mycases_export::shaping::{ArabicShaper, TextShaper, Unshaped};
use mycases_export::styles::{DocumentStyles, FontCandidate};
use mycases_export::{ExportFormat, export_to_path};

fn report(rows: usize) -> Report {
    let mut case = CaseRecord::new("1", "عمر");
    case.set_text("dob", "2018-09-03").unwrap();
    let long = "كلمة ".repeat(rows * 10);
    case.set_text("father_health", long).unwrap();
    case_report(&case, &[], date(2025, 9, 3).at(9, 0, 0, 0))
}

fn no_fonts() -> DocumentStyles {
    DocumentStyles {
        font_candidates: vec![],
        ..DocumentStyles::default()
    }
}

fn page_texts(page: &PageLayout) -> Vec<&str> {
    page.texts.iter().map(|t| t.text.as_str()).collect()
}

fn is_base_arabic_letter(c: char) -> bool {
    ('\u{0621}'..='\u{064A}').contains(&c)
}

#[test]
fn arabic_is_joined_and_reversed() {
    let shaped = ArabicShaper.shape("عمر");
    assert_eq!(shaped.chars().count(), 3);
    assert!(!shaped.chars().any(is_base_arabic_letter));
    // Final reh is drawn first.
    assert_eq!(shaped.chars().next(), Some('\u{FEAE}'));
}

#[test]
fn latin_text_is_left_alone() {
    assert_eq!(ArabicShaper.shape("Omar 2018-09-03"), "Omar 2018-09-03");
}

#[test]
fn every_arabic_word_gets_presentation_forms() {
    let shaped = ArabicShaper.shape(CASE_REPORT_TITLE);
    assert!(!shaped.chars().any(is_base_arabic_letter));
    assert_eq!(shaped.split(' ').count(), 2);
}

#[test]
fn layout_carries_labels_and_values() {
    let mut case = CaseRecord::new("1", "عمر");
    case.set_text("dob", "2018-09-03").unwrap();
    case.set_text("father_health", "سليم").unwrap();
    let report = case_report(&case, &[], date(2025, 9, 3).at(9, 0, 0, 0));

    let pages = layout_pages(&report, &DocumentStyles::default(), &ArabicShaper);
    assert_eq!(pages.len(), 1);
    let texts = page_texts(&pages[0]);

    for expected in ["الحالة الصحية للأب", "سليم", "عمر", CASE_REPORT_TITLE, FOOTER] {
        let shaped = ArabicShaper.shape(expected);
        assert!(texts.contains(&shaped.as_str()), "{expected} not placed");
    }
    assert!(texts.iter().all(|t| !t.chars().any(is_base_arabic_letter)));
}

#[test]
fn layout_keeps_logical_text_with_unshaped() {
    let pages = layout_pages(&report(1), &DocumentStyles::default(), &Unshaped);
    let texts = page_texts(&pages[0]);
    assert!(texts.contains(&"اسم الحالة"));
    assert!(texts.contains(&"عمر"));
}

#[test]
fn long_reports_paginate_with_footer_on_every_page() {
    let styles = DocumentStyles::default();
    assert_eq!(layout_pages(&report(1), &styles, &ArabicShaper).len(), 1);

    let pages = layout_pages(&report(400), &styles, &ArabicShaper);
    assert!(pages.len() > 1);
    let footer = ArabicShaper.shape(FOOTER);
    for (i, page) in pages.iter().enumerate() {
        let texts = page_texts(page);
        assert!(texts.contains(&footer.as_str()));
        assert!(texts.contains(&(i + 1).to_string().as_str()));
    }
}

#[test]
fn text_stays_on_the_page() {
    let styles = DocumentStyles::default();
    for page in layout_pages(&report(40), &styles, &ArabicShaper) {
        for text in &page.texts {
            assert!(text.x >= styles.margin_mm && text.x < 210.0);
            assert!(text.y >= styles.margin_mm && text.y < 297.0);
        }
    }
}

#[test]
fn pdf_without_an_arabic_font_is_an_error() {
    let err = generate_pdf(&report(1), &no_fonts(), &ArabicShaper).unwrap_err();
    assert!(matches!(err, ExportError::NoArabicFont));
}

#[test]
fn missing_candidates_are_skipped() {
    let styles = DocumentStyles {
        font_candidates: vec![FontCandidate {
            regular: "/nonexistent/a.ttf".into(),
            bold: None,
        }],
        ..DocumentStyles::default()
    };
    assert!(matches!(resolve_fonts(&styles), Err(ExportError::NoArabicFont)));
}

#[test]
fn configured_font_wins_over_candidates() {
    let styles = DocumentStyles {
        regular_font_path: Some("/fonts/custom.ttf".into()),
        ..no_fonts()
    };
    let (regular, bold) = resolve_fonts(&styles).unwrap();
    assert_eq!(regular, Path::new("/fonts/custom.ttf"));
    assert_eq!(bold, None);
}

#[test]
fn missing_font_file_is_reported() {
    let styles = DocumentStyles {
        regular_font_path: Some("/nonexistent/font.ttf".into()),
        ..DocumentStyles::default()
    };
    let err = generate_pdf(&report(1), &styles, &ArabicShaper).unwrap_err();
    assert!(matches!(err, ExportError::Font { .. }));
}

#[test]
fn pdf_with_a_system_font() {
    let styles = DocumentStyles::default();
    if resolve_fonts(&styles).is_err() {
        return;
    }
    let short = generate_pdf(&report(1), &styles, &ArabicShaper).unwrap();
    let long = generate_pdf(&report(400), &styles, &ArabicShaper).unwrap();
    assert!(short.starts_with(b"%PDF"));
    assert!(long.len() > short.len());
}

#[test]
fn docx_is_a_zip_package() {
    let rendered = render_markdown(&report(1)).unwrap();
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn docx_contains_arabic_labels_and_values() {
    let mut case = CaseRecord::new("1", "عمر");
    case.set_text("father_health", "سليم").unwrap();
    let report = case_report(&case, &[], date(2025, 9, 3).at(9, 0, 0, 0));
    let rendered = render_markdown(&report).unwrap();
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).unwrap();

    let json = docx_rs::read_docx(&bytes).unwrap().json();
    for expected in ["الحالة الصحية للأب", "سليم", "عمر", CASE_REPORT_TITLE, FOOTER] {
        assert!(json.contains(expected), "{expected} missing from document.xml");
    }
}

#[test]
fn docx_keeps_markup_in_values_literal() {
    let mut case = CaseRecord::new("1", "عمر");
    case.set_text("father_health", "ok\n---\n# Injected").unwrap();
    case.set_text("mother_health", "a ** b").unwrap();
    let report = case_report(&case, &[], date(2025, 9, 3).at(9, 0, 0, 0));
    let rendered = render_markdown(&report).unwrap();
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).unwrap();

    let json = docx_rs::read_docx(&bytes).unwrap().json();
    assert!(json.contains("ok --- # Injected"));
    assert!(json.contains("a ** b"));
}

#[test]
fn format_follows_extension() {
    assert_eq!(ExportFormat::for_path(Path::new("a.docx")), ExportFormat::Docx);
    assert_eq!(ExportFormat::for_path(Path::new("a.DOCX")), ExportFormat::Docx);
    assert_eq!(ExportFormat::for_path(Path::new("a.pdf")), ExportFormat::Pdf);
    assert_eq!(ExportFormat::for_path(Path::new("report")), ExportFormat::Pdf);
}

#[test]
fn export_writes_the_file() {
    let dir = TempDir::new().unwrap();

    let docx = dir.path().join("omar.docx");
    assert_eq!(
        export_to_path(&report(1), &docx, &no_fonts(), &ArabicShaper).unwrap(),
        ExportFormat::Docx
    );
    assert!(std::fs::read(&docx).unwrap().starts_with(b"PK"));

    let pdf = dir.path().join("omar.pdf");
    let err = export_to_path(&report(1), &pdf, &no_fonts(), &ArabicShaper).unwrap_err();
    assert!(matches!(err, ExportError::NoArabicFont));
    assert!(!pdf.exists());
}
