use std::collections::BTreeMap;
use std::path::Path;

use eyre::{WrapErr, bail, eyre};
use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

use mycases_core::age;
use mycases_core::layout;
use mycases_core::models::case::CaseRecord;
use mycases_core::models::survey::SurveyRecord;
use mycases_export::ExportFormat;
use mycases_export::report::{self, Report};
use mycases_search::index::{self, CaseSummary};
use mycases_search::query::{self, CaseFilter};
use mycases_storage::cases::{self, SavedCase};
use mycases_storage::error::StorageError;
use mycases_storage::surveys;

use crate::state::DesktopState;

pub const CASE_NOT_FOUND: &str = "لم يتم العثور على الحالة";
pub const SURVEY_NOT_FOUND: &str = "لم يتم العثور على الاستبيان";
pub const NAME_REQUIRED: &str = "يجب إدخال اسم الحالة";
pub const DELETE_WORD: &str = "حذف";
pub const DELETE_NOT_CONFIRMED: &str = "لم يتم تأكيد الحذف";
pub const CASE_DELETED: &str = "تم حذف الحالة";
pub const SURVEY_DELETED: &str = "تم حذف الاستبيان";
pub const INVALID_SURVEY_DATE: &str = "تاريخ الاستبيان غير صالح";

/// A registered survey form as listed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyType {
    pub id: String,
    pub title: String,
}

/// Answers submitted for one survey. A missing date means today.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyInput {
    #[serde(default)]
    pub survey_date: Option<String>,
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Cases
// ---------------------------------------------------------------------------

pub fn list_cases(
    state: &DesktopState,
    filter: &CaseFilter,
    today: Date,
) -> eyre::Result<Vec<CaseSummary>> {
    let summaries = index::load_summaries(&state.root, today)?;
    Ok(query::filter(&summaries, filter))
}

/// Find a case by id. Returns its folder and the loaded record.
pub fn show_case(state: &DesktopState, case_id: &str) -> eyre::Result<(String, CaseRecord)> {
    let folder = cases::find_case_folder(&state.root, case_id.trim())
        .ok_or_else(|| eyre!("{CASE_NOT_FOUND}: {case_id}"))?;
    let record =
        cases::load_case(&state.root, &folder).ok_or_else(|| eyre!("{CASE_NOT_FOUND}: {case_id}"))?;
    Ok((folder, record))
}

/// Create a case from raw field values. Any `case_id` in the input is
/// replaced by a freshly allocated one.
pub fn create_case(
    state: &DesktopState,
    input: serde_json::Value,
    today: Date,
) -> eyre::Result<SavedCase> {
    let mut input = expect_object(input)?;
    input.insert("case_id".to_string(), serde_json::Value::String(String::new()));

    let mut record = parse_case(input)?;
    if record.child_name().is_empty() {
        bail!(NAME_REQUIRED);
    }

    record.case_id = cases::allocate_case_id(&state.root).wrap_err("allocating a case id")?;
    save(state, record, today)
}

/// Overlay `input` on the stored case. Omitted fields keep their stored
/// values and the case id never changes.
pub fn edit_case(
    state: &DesktopState,
    case_id: &str,
    input: serde_json::Value,
    today: Date,
) -> eyre::Result<SavedCase> {
    let (_, existing) = show_case(state, case_id)?;

    let mut merged = expect_object(serde_json::to_value(&existing)?)?;
    for (key, value) in expect_object(input)? {
        merged.insert(key, value);
    }
    merged.insert(
        "case_id".to_string(),
        serde_json::Value::String(existing.case_id.clone()),
    );

    let record = parse_case(merged)?;
    if record.child_name().is_empty() {
        bail!(NAME_REQUIRED);
    }
    save(state, record, today)
}

/// Remove a case folder and its surveys. `confirm` must repeat the case id
/// or be the Arabic word for "delete".
pub fn delete_case(state: &DesktopState, case_id: &str, confirm: &str) -> eyre::Result<&'static str> {
    let confirm = confirm.trim();
    if confirm != case_id.trim() && confirm != DELETE_WORD {
        bail!(DELETE_NOT_CONFIRMED);
    }
    let (folder, _) = show_case(state, case_id)?;
    cases::delete_case(&state.root, &folder).map_err(|e| not_found_as(e, CASE_NOT_FOUND))?;
    Ok(CASE_DELETED)
}

fn save(state: &DesktopState, mut record: CaseRecord, today: Date) -> eyre::Result<SavedCase> {
    record.refresh_derived(today);
    record.clear_inactive_followups();
    for key in record.unexpected_choices() {
        tracing::warn!(case_id = %record.case_id, field = key, "value is not one of the form options");
    }
    let saved = cases::save_case(&state.root, &record)?;
    Ok(saved)
}

fn parse_case(fields: serde_json::Map<String, serde_json::Value>) -> eyre::Result<CaseRecord> {
    if !fields.contains_key("child_name") {
        bail!(NAME_REQUIRED);
    }
    CaseRecord::from_json(serde_json::Value::Object(fields)).wrap_err("invalid case data")
}

fn expect_object(
    value: serde_json::Value,
) -> eyre::Result<serde_json::Map<String, serde_json::Value>> {
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(eyre!("expected a JSON object, got {other}")),
    }
}

// ---------------------------------------------------------------------------
// Surveys
// ---------------------------------------------------------------------------

pub fn survey_types() -> Vec<SurveyType> {
    mycases_surveys::all_surveys()
        .iter()
        .map(|s| SurveyType {
            id: s.id().to_string(),
            title: s.title().to_string(),
        })
        .collect()
}

pub fn list_surveys(state: &DesktopState, case_id: &str) -> eyre::Result<Vec<SurveyRecord>> {
    let (folder, _) = show_case(state, case_id)?;
    Ok(surveys::list_surveys(&state.root, &folder))
}

/// Fill in a survey form for a case and store it, replacing any earlier
/// survey of the same type. Returns the file name written.
pub fn add_survey(
    state: &DesktopState,
    case_id: &str,
    survey_id: &str,
    input: SurveyInput,
    now: DateTime,
) -> eyre::Result<String> {
    let definition = mycases_surveys::get_survey(survey_id)
        .ok_or_else(|| mycases_surveys::error::SurveyError::UnknownSurvey(survey_id.to_string()))?;
    let (folder, case) = show_case(state, case_id)?;

    let date = match input.survey_date.as_deref().map(str::trim) {
        None | Some("") => now.date(),
        Some(raw) => age::parse_date(raw).ok_or_else(|| eyre!("{INVALID_SURVEY_DATE}: {raw}"))?,
    };

    let record = definition.new_record(date, &input.answers, Some(&case), now)?;
    let filename = surveys::save_survey(&state.root, &folder, &record)?;
    Ok(filename)
}

pub fn show_survey(
    state: &DesktopState,
    case_id: &str,
    filename: &str,
) -> eyre::Result<SurveyRecord> {
    let (folder, _) = show_case(state, case_id)?;
    surveys::load_survey(&state.root, &folder, filename)
        .ok_or_else(|| eyre!("{SURVEY_NOT_FOUND}: {filename}"))
}

/// Remove one survey file. `confirm` must repeat the file name (with or
/// without `.json`) or be the Arabic word for "delete".
pub fn delete_survey(
    state: &DesktopState,
    case_id: &str,
    filename: &str,
    confirm: &str,
) -> eyre::Result<&'static str> {
    let confirm = confirm.trim();
    let stem = filename_stem(filename);
    if confirm != DELETE_WORD && filename_stem(confirm) != stem {
        bail!(DELETE_NOT_CONFIRMED);
    }
    let (folder, _) = show_case(state, case_id)?;
    surveys::delete_survey(&state.root, &folder, filename)
        .map_err(|e| not_found_as(e, SURVEY_NOT_FOUND))?;
    Ok(SURVEY_DELETED)
}

fn filename_stem(name: &str) -> &str {
    let name = name.trim();
    name.strip_suffix(&format!(".{}", layout::JSON_EXT))
        .unwrap_or(name)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Report for a case and every survey attached to it.
pub fn case_report(state: &DesktopState, case_id: &str, now: DateTime) -> eyre::Result<Report> {
    let (folder, case) = show_case(state, case_id)?;
    let surveys = surveys::list_surveys(&state.root, &folder);
    Ok(report::case_report(&case, &surveys, now))
}

pub fn survey_report(
    state: &DesktopState,
    case_id: &str,
    filename: &str,
    now: DateTime,
) -> eyre::Result<Report> {
    let (_, case) = show_case(state, case_id)?;
    let survey = show_survey(state, case_id, filename)?;
    Ok(report::survey_report(&survey, &case, now))
}

pub fn export_report(state: &DesktopState, report: &Report, out: &Path) -> eyre::Result<ExportFormat> {
    let format = mycases_export::export_to_path(report, out, &state.styles, state.shaper.as_ref())
        .wrap_err_with(|| format!("exporting to {}", out.display()))?;
    Ok(format)
}

/// Suggested file name for a case export, e.g. `12_Omar.pdf`.
pub fn default_case_export_name(case: &CaseRecord) -> String {
    file_safe(&format!("{}_{}.pdf", case.case_id, case.child_name()))
}

/// Suggested file name for a survey export: type, child name and date.
pub fn default_survey_export_name(survey: &SurveyRecord, case: &CaseRecord) -> String {
    let date = survey.survey_date.as_deref().unwrap_or_default();
    file_safe(&format!(
        "{}_{}_{}.pdf",
        survey.survey_type,
        case.child_name(),
        date
    ))
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c => c,
        })
        .collect()
}

fn not_found_as(err: StorageError, message: &str) -> eyre::Report {
    match err {
        StorageError::NotFound { path } => eyre!("{message}: {path}"),
        other => other.into(),
    }
}
