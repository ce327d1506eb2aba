use jiff::civil::date;
use serde_json::json;
use tempfile::TempDir;

use mycases_core::models::case::CaseRecord;
use mycases_storage::DataRoot;
use mycases_storage::cases::{
    allocate_case_id, delete_case, find_case_folder, list_case_folders, load_case, save_case,
};
use mycases_storage::error::StorageError;
use mycases_storage::ledger;

fn scratch() -> (TempDir, DataRoot) {
    let dir = TempDir::new().unwrap();
    let root = DataRoot::new(dir.path());
    (dir, root)
}

#[test]
fn first_case_scenario() {
    let (_dir, root) = scratch();

    let id = allocate_case_id(&root).unwrap();
    assert_eq!(id, "1");

    let mut record = CaseRecord::new(&id, "Omar");
    record.set_text("dob", "2018-09-03").unwrap();
    record.refresh_derived(date(2025, 9, 3));
    let saved = save_case(&root, &record).unwrap();

    assert_eq!(saved.folder, "1");
    assert!(saved.created);
    assert!(root.case_file("1").is_file());
    assert!(root.surveys_dir("1").is_dir());

    let loaded = load_case(&root, &saved.folder).unwrap();
    assert_eq!(loaded.text("age"), Some("7 سنة، 0 شهر، 0 يوم"));
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, root) = scratch();
    let mut record = CaseRecord::new("12", "ليلى");
    record.set_text("diagnosis", "تأخر لغوي").unwrap();
    record.set_count("siblings_count", 3).unwrap();

    let saved = save_case(&root, &record).unwrap();
    assert_eq!(load_case(&root, &saved.folder), Some(record));
}

#[test]
fn documents_are_pretty_and_keep_arabic() {
    let (_dir, root) = scratch();
    save_case(&root, &CaseRecord::new("1", "ليلى")).unwrap();

    let text = std::fs::read_to_string(root.case_file("1")).unwrap();
    assert!(text.contains("ليلى"));
    assert!(text.contains("\n    \"case_id\": \"1\""));
}

#[test]
fn missing_name_writes_nothing() {
    let (_dir, root) = scratch();
    let err = save_case(&root, &CaseRecord::new("1", "")).unwrap_err();
    assert!(matches!(err, StorageError::Validation(_)));
    assert!(list_case_folders(&root).is_empty());
}

#[test]
fn edit_reuses_existing_folder() {
    let (_dir, root) = scratch();
    let mut record = CaseRecord::new("3", "Omar");
    save_case(&root, &record).unwrap();

    record.set_text("gender", "ذكر").unwrap();
    let saved = save_case(&root, &record).unwrap();
    assert!(!saved.created);
    assert_eq!(list_case_folders(&root), vec!["3".to_string()]);
    assert_eq!(load_case(&root, "3").unwrap().text("gender"), Some("ذكر"));
}

#[test]
fn legacy_folder_is_found_and_updated() {
    let (_dir, root) = scratch();
    let legacy = root.case_dir("5_Omar_2018-09-03");
    std::fs::create_dir_all(&legacy).unwrap();
    std::fs::write(
        legacy.join("case.json"),
        json!({"case_id": "5", "child_name": "Omar", "dob": "2018-09-03"}).to_string(),
    )
    .unwrap();

    assert_eq!(
        find_case_folder(&root, "5").as_deref(),
        Some("5_Omar_2018-09-03")
    );

    let record = load_case(&root, "5_Omar_2018-09-03").unwrap();
    assert_eq!(record.dob(), Some("2018-09-03"));

    let saved = save_case(&root, &record).unwrap();
    assert_eq!(saved.folder, "5_Omar_2018-09-03");
    let raw = std::fs::read_to_string(legacy.join("case.json")).unwrap();
    assert!(raw.contains("\"ar_key\""));
}

#[test]
fn resolver_ignores_unknown_and_empty_ids() {
    let (_dir, root) = scratch();
    save_case(&root, &CaseRecord::new("1", "Omar")).unwrap();

    assert_eq!(find_case_folder(&root, "1").as_deref(), Some("1"));
    assert_eq!(find_case_folder(&root, "2"), None);
    assert_eq!(find_case_folder(&root, ""), None);
}

#[test]
fn listing_skips_folders_without_case_document() {
    let (_dir, root) = scratch();
    save_case(&root, &CaseRecord::new("2", "B")).unwrap();
    save_case(&root, &CaseRecord::new("1", "A")).unwrap();
    std::fs::create_dir_all(root.case_dir("stray")).unwrap();

    assert_eq!(list_case_folders(&root), vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn corrupt_case_loads_as_none() {
    let (_dir, root) = scratch();
    std::fs::create_dir_all(root.case_dir("9")).unwrap();
    std::fs::write(root.case_file("9"), b"{ not json").unwrap();

    assert_eq!(load_case(&root, "9"), None);
    assert_eq!(load_case(&root, "missing"), None);
}

#[test]
fn delete_case_removes_tree() {
    let (_dir, root) = scratch();
    save_case(&root, &CaseRecord::new("1", "Omar")).unwrap();

    delete_case(&root, "1").unwrap();
    assert!(!root.case_dir("1").exists());
    assert!(matches!(
        delete_case(&root, "1"),
        Err(StorageError::NotFound { .. })
    ));
    assert!(delete_case(&root, "..").is_err());
}

#[test]
fn allocation_skips_ids_already_stored() {
    let (_dir, root) = scratch();
    save_case(&root, &CaseRecord::new("1", "A")).unwrap();
    save_case(&root, &CaseRecord::new("2", "B")).unwrap();

    // No ledger on disk yet, so it starts at 1.
    assert_eq!(allocate_case_id(&root).unwrap(), "3");
    assert_eq!(ledger::load_ledger(&root).next_id, "4");
}
