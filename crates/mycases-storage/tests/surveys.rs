use serde_json::json;
use tempfile::TempDir;

use mycases_core::models::case::CaseRecord;
use mycases_core::models::survey::{Answer, SurveyRecord};
use mycases_storage::DataRoot;
use mycases_storage::cases::save_case;
use mycases_storage::error::StorageError;
use mycases_storage::surveys::{delete_survey, list_surveys, load_survey, save_survey};

fn case_root() -> (TempDir, DataRoot) {
    let dir = TempDir::new().unwrap();
    let root = DataRoot::new(dir.path());
    save_case(&root, &CaseRecord::new("1", "Omar")).unwrap();
    (dir, root)
}

fn survey(kind: &str, date: Option<&str>, note: &str) -> SurveyRecord {
    let mut record = SurveyRecord::new(kind);
    record.survey_date = date.map(str::to_string);
    record.set_answer("notes", Answer::labeled("ملاحظات", note));
    record
}

#[test]
fn saving_same_type_twice_keeps_latest() {
    let (_dir, root) = case_root();
    let kind = "استبيان التواصل واللغة";

    let name = save_survey(&root, "1", &survey(kind, Some("2025-01-01"), "first")).unwrap();
    assert_eq!(name, format!("{kind}.json"));
    save_survey(&root, "1", &survey(kind, Some("2025-02-01"), "second")).unwrap();

    let all = list_surveys(&root, "1");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].answer("notes").unwrap().display_value(), "second");
    assert_eq!(all[0].filename.as_deref(), Some(kind));
}

#[test]
fn listing_sorts_by_date_with_undated_first() {
    let (_dir, root) = case_root();
    save_survey(&root, "1", &survey("b", Some("2025-03-01"), "")).unwrap();
    save_survey(&root, "1", &survey("a", Some("2024-12-31"), "")).unwrap();
    save_survey(&root, "1", &survey("c", None, "")).unwrap();
    save_survey(&root, "1", &survey("d", Some("not a date"), "")).unwrap();

    let order: Vec<_> = list_surveys(&root, "1")
        .into_iter()
        .map(|s| s.survey_type)
        .collect();
    assert_eq!(order, vec!["c", "d", "a", "b"]);
}

#[test]
fn unreadable_survey_is_skipped() {
    let (_dir, root) = case_root();
    save_survey(&root, "1", &survey("a", None, "x")).unwrap();
    std::fs::write(root.surveys_dir("1").join("broken.json"), b"[").unwrap();
    std::fs::write(root.surveys_dir("1").join("readme.txt"), b"hi").unwrap();

    assert_eq!(list_surveys(&root, "1").len(), 1);
}

#[test]
fn filename_is_attached_but_not_persisted() {
    let (_dir, root) = case_root();
    std::fs::write(
        root.surveys_dir("1").join("legacy.json"),
        json!({"survey_type": "legacy", "_filename": "stale", "q": "bare"}).to_string(),
    )
    .unwrap();

    let record = load_survey(&root, "1", "legacy.json").unwrap();
    assert_eq!(record.filename.as_deref(), Some("legacy"));
    assert!(record.answer("_filename").is_none());
    assert_eq!(record.answer("q"), Some(&Answer::Bare(json!("bare"))));

    save_survey(&root, "1", &record).unwrap();
    let raw = std::fs::read_to_string(root.surveys_dir("1").join("legacy.json")).unwrap();
    assert!(!raw.contains("_filename"));
}

#[test]
fn invalid_survey_type_is_rejected() {
    let (_dir, root) = case_root();
    let err = save_survey(&root, "1", &SurveyRecord::new("")).unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));
    let err = save_survey(&root, "1", &SurveyRecord::new("../x")).unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));
}

#[test]
fn survey_for_missing_case_is_not_found() {
    let (_dir, root) = case_root();
    let err = save_survey(&root, "404", &survey("a", None, "")).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[test]
fn delete_survey_and_missing_file() {
    let (_dir, root) = case_root();
    save_survey(&root, "1", &survey("a", None, "")).unwrap();

    delete_survey(&root, "1", "a.json").unwrap();
    assert!(list_surveys(&root, "1").is_empty());

    let err = delete_survey(&root, "1", "a").unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}
