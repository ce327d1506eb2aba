//! Report assembly: records in, titled label/value sections out.
//!
//! Both exporters consume the same [`Report`], so a case looks the same in
//! DOCX and PDF.

use jiff::civil::DateTime;
use serde::Serialize;

use mycases_core::age;
use mycases_core::labels;
use mycases_core::models::case::CaseRecord;
use mycases_core::models::survey::{Answer, SurveyRecord};
use mycases_surveys::survey_for_type;

pub const APP_NAME: &str = "MyCases";
pub const FOOTER: &str = "تم إنشاؤه بواسطة تطبيق MyCases";
pub const GENERATED_LABEL: &str = "تاريخ التقرير";
pub const CASE_REPORT_TITLE: &str = "تقرير الحالة";
pub const SURVEY_REPORT_TITLE: &str = "تقرير استبيان";
pub const CASE_SECTION: &str = "بيانات الحالة";
pub const CONTEXT_SECTION: &str = "معلومات الحالة";
pub const SURVEY_SECTION: &str = "بيانات الاستبيان";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    /// Line breaks and runs of whitespace in free text collapse to single
    /// spaces so every row stays on one line.
    fn new(label: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        Self {
            label: one_line(label.as_ref()),
            value: one_line(value.as_ref()),
        }
    }
}

fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    /// Whose report this is; the child's name.
    pub subject: String,
    pub generated_at: String,
    pub sections: Vec<ReportSection>,
}

/// Full case report: every populated case field, then one section per
/// survey in the order given.
pub fn case_report(case: &CaseRecord, surveys: &[SurveyRecord], now: DateTime) -> Report {
    let mut rows = vec![Row::new(labels::CASE_ID_LABEL, case.case_id.trim())];
    rows.extend(
        case.rows()
            .into_iter()
            .filter(|r| !r.value.trim().is_empty())
            .map(|r| Row::new(r.label, r.value)),
    );

    let mut sections = vec![ReportSection {
        title: CASE_SECTION.to_string(),
        rows,
    }];
    for survey in surveys {
        let title = match survey.survey_date.as_deref() {
            Some(date) if !date.trim().is_empty() => format!("{} ({date})", survey.survey_type),
            _ => survey.survey_type.clone(),
        };
        sections.push(ReportSection {
            title: one_line(&title),
            rows: answer_rows(survey),
        });
    }

    Report {
        title: CASE_REPORT_TITLE.to_string(),
        subject: one_line(case.child_name()),
        generated_at: timestamp(now),
        sections,
    }
}

/// Single-survey report with a short case context block.
pub fn survey_report(survey: &SurveyRecord, case: &CaseRecord, now: DateTime) -> Report {
    let dob = case.dob().unwrap_or_default();
    let or_dash = |v: Option<&str>| match v.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => age::UNAVAILABLE.to_string(),
    };

    let context = vec![
        Row::new(labels::CASE_ID_LABEL, or_dash(Some(case.case_id.as_str()))),
        Row::new(labels::case_label("dob"), or_dash(Some(dob))),
        Row::new(
            labels::case_label("age"),
            age::child_age_text(Some(dob), now.date()),
        ),
        Row::new(labels::case_label("gender"), or_dash(case.text("gender"))),
        Row::new(labels::case_label("diagnosis"), or_dash(case.diagnosis())),
    ];

    let mut rows = vec![
        Row::new(labels::SURVEY_TYPE_LABEL, &survey.survey_type),
        Row::new(
            labels::SURVEY_DATE_LABEL,
            or_dash(survey.survey_date.as_deref()),
        ),
    ];
    rows.extend(answer_rows(survey));

    Report {
        title: one_line(&format!("{SURVEY_REPORT_TITLE}: {}", survey.survey_type)),
        subject: one_line(case.child_name()),
        generated_at: timestamp(now),
        sections: vec![
            ReportSection {
                title: CONTEXT_SECTION.to_string(),
                rows: context,
            },
            ReportSection {
                title: SURVEY_SECTION.to_string(),
                rows,
            },
        ],
    }
}

/// Answer rows of a survey: bookkeeping keys and empty values dropped,
/// known questions first in form order, the rest by key.
pub fn answer_rows(survey: &SurveyRecord) -> Vec<Row> {
    let answered: Vec<(&str, &Answer)> = survey.question_answers().collect();
    let row = |key: &str, answer: &Answer| Row::new(answer.label(key), answer.display_value());

    let Some(definition) = survey_for_type(&survey.survey_type) else {
        return answered.iter().map(|(k, a)| row(*k, *a)).collect();
    };

    let order: Vec<&str> = definition.questions().iter().map(|q| q.key).collect();
    let mut rows: Vec<Row> = order
        .iter()
        .filter_map(|key| answered.iter().find(|(k, _)| k == key))
        .map(|(k, a)| row(*k, *a))
        .collect();
    rows.extend(
        answered
            .iter()
            .filter(|(k, _)| !order.contains(k))
            .map(|(k, a)| row(*k, *a)),
    );
    rows
}

fn timestamp(now: DateTime) -> String {
    now.strftime("%Y-%m-%d %H:%M:%S").to_string()
}
