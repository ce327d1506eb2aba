use std::path::PathBuf;

use mycases_desktop::config::{
    self, DataPathSource, FontConfig, MyCasesConfig, data_path_source, load_config_from,
    save_config_to,
};

#[test]
fn v0_config_gains_version() {
    let json = serde_json::json!({ "data_path": "/srv/cases" });
    let migrated = config::migrate(json, 0).unwrap();
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["data_path"], "/srv/cases");
}

#[test]
fn v0_config_without_data_path_is_rejected() {
    let json = serde_json::json!({ "something": "else" });
    assert!(config::migrate(json, 0).is_err());
}

#[test]
fn newer_config_version_is_rejected() {
    let json = serde_json::json!({ "config_version": 9, "data_path": "/srv/cases" });
    let err = config::migrate(json, 9).unwrap_err();
    assert!(err.to_string().contains("newer"));
}

#[test]
fn load_legacy_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"data_path": "/srv/cases"}"#).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.data_path, PathBuf::from("/srv/cases"));
    assert!(loaded.fonts.is_none());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut original = MyCasesConfig::new(dir.path());
    original.fonts = Some(FontConfig {
        regular: PathBuf::from("/fonts/NotoNaskhArabic-Regular.ttf"),
        bold: None,
    });
    save_config_to(&path, &original).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, original);

    let styles = loaded.document_styles();
    assert_eq!(
        styles.regular_font_path,
        Some(PathBuf::from("/fonts/NotoNaskhArabic-Regular.ttf"))
    );
    assert!(styles.bold_font_path.is_none());
}

#[test]
fn environment_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = MyCasesConfig::new(dir.path());

    assert_eq!(
        data_path_source(Some("/tmp/elsewhere"), Some(&config)),
        DataPathSource::Environment(PathBuf::from("/tmp/elsewhere"))
    );
    assert_eq!(
        data_path_source(Some("  "), Some(&config)),
        DataPathSource::Config(dir.path().to_path_buf())
    );
}

#[test]
fn unusable_config_path_counts_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let gone = MyCasesConfig::new(dir.path().join("removed"));
    assert_eq!(data_path_source(None, Some(&gone)), DataPathSource::Missing);

    let relative = MyCasesConfig::new("relative/cases");
    assert_eq!(data_path_source(None, Some(&relative)), DataPathSource::Missing);

    assert_eq!(data_path_source(None, None), DataPathSource::Missing);
}
