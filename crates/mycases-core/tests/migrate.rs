use serde_json::json;

use mycases_core::migrate::{is_legacy_case, migrate_case};
use mycases_core::models::case::CaseRecord;

#[test]
fn flat_document_is_wrapped_with_labels() {
    let legacy = json!({
        "case_id": "4",
        "child_name": "Omar",
        "dob": "2018-09-03",
        "father_age": 35,
        "family_size": 4,
        "siblings_count": "2",
        "relation_degree": null,
        "extra_key": "kept"
    });
    assert!(is_legacy_case(&legacy));

    let migrated = migrate_case(legacy).unwrap();
    assert!(!is_legacy_case(&migrated));
    assert_eq!(
        migrated["child_name"],
        json!({"ar_key": "اسم الحالة", "value": "Omar"})
    );
    assert_eq!(migrated["father_age"]["value"], json!("35"));
    assert_eq!(migrated["siblings_count"]["value"], json!(2));
    assert!(migrated.get("relation_degree").is_none());
    assert_eq!(migrated["extra_key"], json!("kept"));
}

#[test]
fn labeled_document_passes_through() {
    let mut record = CaseRecord::new("9", "Sara");
    record.set_text("gender", "أنثى").unwrap();
    record.set_count("child_order", 1).unwrap();
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(migrate_case(value.clone()).unwrap(), value);
    assert_eq!(CaseRecord::from_json(value).unwrap(), record);
}

#[test]
fn numeric_case_id_becomes_string() {
    let record = CaseRecord::from_json(json!({"case_id": 12, "child_name": "Ali"})).unwrap();
    assert_eq!(record.case_id, "12");
}

#[test]
fn bad_counter_is_rejected() {
    let err = migrate_case(json!({"child_name": "Ali", "family_size": "many"}));
    assert!(err.is_err());
    assert!(migrate_case(json!(["not", "an", "object"])).is_err());
}
