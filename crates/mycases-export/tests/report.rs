use jiff::civil::date;

use mycases_core::models::case::CaseRecord;
use mycases_core::models::survey::{Answer, SurveyRecord};
use mycases_export::render::{escape_inline, render_markdown};
use mycases_export::report::{CONTEXT_SECTION, FOOTER, Row, case_report, survey_report};

fn omar() -> CaseRecord {
    let mut case = CaseRecord::new("1", "Omar");
    case.set_text("dob", "2018-09-03").unwrap();
    case.set_text("diagnosis", "ASD").unwrap();
    case.set_text("mother_name", "").unwrap();
    case
}

fn communication() -> SurveyRecord {
    let mut survey = SurveyRecord::new("استبيان التواصل واللغة");
    survey.survey_date = Some("2025-06-01".to_string());
    survey.set_answer("case_id", Answer::Bare("1".into()));
    survey.set_answer("communication_notes", Answer::labeled("ملاحظات إضافية", "جيد"));
    survey.set_answer(
        "verbal_communication",
        Answer::labeled("التواصل اللفظي", "يستخدم جمل كاملة"),
    );
    survey.set_answer("extra_key", Answer::Bare("x".into()));
    survey.set_answer("eye_contact", Answer::labeled("التواصل البصري", ""));
    survey
}

#[test]
fn survey_rows_follow_form_order_and_skip_bookkeeping() {
    let now = date(2025, 9, 3).at(12, 0, 0, 0);
    let report = survey_report(&communication(), &omar(), now);

    let context = &report.sections[0];
    assert_eq!(context.title, CONTEXT_SECTION);
    assert!(context.rows.contains(&Row {
        label: "العمر".to_string(),
        value: "7 سنة، 0 شهر، 0 يوم".to_string(),
    }));
    assert!(context.rows.contains(&Row {
        label: "الجنس".to_string(),
        value: "-".to_string(),
    }));

    let labels: Vec<_> = report.sections[1]
        .rows
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            "نوع الاستبيان",
            "تاريخ الاستبيان",
            "التواصل اللفظي",
            "ملاحظات إضافية",
            "extra_key",
        ]
    );
    assert_eq!(report.generated_at, "2025-09-03 12:00:00");
    assert_eq!(report.subject, "Omar");
}

#[test]
fn case_report_has_case_then_surveys() {
    let now = date(2025, 9, 3).at(12, 0, 0, 0);
    let report = case_report(&omar(), &[communication()], now);

    assert_eq!(report.sections.len(), 2);
    let case_rows = &report.sections[0].rows;
    assert_eq!(case_rows[0].value, "1");
    assert!(case_rows.iter().all(|r| !r.value.is_empty()));
    assert_eq!(
        report.sections[1].title,
        "استبيان التواصل واللغة (2025-06-01)"
    );
}

#[test]
fn markdown_carries_sections_and_footer() {
    let now = date(2025, 9, 3).at(12, 0, 0, 0);
    let rendered = render_markdown(&case_report(&omar(), &[], now)).unwrap();

    assert!(rendered.starts_with("# تقرير الحالة\n"));
    assert!(rendered.contains("## بيانات الحالة"));
    assert!(rendered.contains("- **اسم الحالة:** Omar"));
    assert!(rendered.trim_end().ends_with(FOOTER));
}

#[test]
fn multiline_values_stay_on_their_row() {
    let mut case = omar();
    case.set_text("father_health", "ok\n---\n# Injected").unwrap();
    let report = case_report(&case, &[], date(2025, 9, 3).at(9, 0, 0, 0));

    assert!(report.sections[0].rows.contains(&Row {
        label: "الحالة الصحية للأب".to_string(),
        value: "ok --- # Injected".to_string(),
    }));

    let rendered = render_markdown(&report).unwrap();
    assert!(rendered.lines().all(|l| l.trim() != "---"));
    assert!(rendered.lines().all(|l| !l.starts_with("# Injected")));
    assert!(rendered.contains("- **الحالة الصحية للأب:** ok --- # Injected\n"));
}

#[test]
fn emphasis_markers_in_values_are_escaped() {
    assert_eq!(escape_inline("a ** b"), r"a \*\* b");
    assert_eq!(escape_inline(r"c:\x"), r"c:\\x");

    let mut case = omar();
    case.set_text("diagnosis", "**bold**").unwrap();
    let rendered = render_markdown(&case_report(&case, &[], date(2025, 9, 3).at(9, 0, 0, 0))).unwrap();
    assert!(rendered.contains(r"\*\*bold\*\*"));
}
