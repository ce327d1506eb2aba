//! Data-root layout conventions.
//!
//! Pure path functions, no filesystem access. These define where every
//! document lives under the configured data root:
//!
//! ```text
//! <root>/case_ids.json
//! <root>/<case folder>/case.json
//! <root>/<case folder>/surveys/<survey_type>.json
//! ```

use std::path::{Path, PathBuf};

pub const LEDGER_FILE: &str = "case_ids.json";

pub const CASE_FILE: &str = "case.json";

pub const SURVEYS_DIR: &str = "surveys";

pub const JSON_EXT: &str = "json";

pub fn ledger(root: &Path) -> PathBuf {
    root.join(LEDGER_FILE)
}

pub fn case_dir(root: &Path, folder: &str) -> PathBuf {
    root.join(folder)
}

pub fn case_file(root: &Path, folder: &str) -> PathBuf {
    case_dir(root, folder).join(CASE_FILE)
}

pub fn surveys_dir(root: &Path, folder: &str) -> PathBuf {
    case_dir(root, folder).join(SURVEYS_DIR)
}

/// Path of a survey document. `stem` is the filename without `.json`.
pub fn survey_file(root: &Path, folder: &str, stem: &str) -> PathBuf {
    surveys_dir(root, folder).join(survey_filename(stem))
}

pub fn survey_filename(stem: &str) -> String {
    format!("{stem}.{JSON_EXT}")
}

/// Folder name for a newly created case. The allocated id alone is the
/// key, so editing the child's name or birth date never moves the folder.
pub fn new_case_folder(case_id: &str) -> String {
    case_id.trim().to_string()
}

/// Whether `name` can be used as a single path component under the root.
pub fn is_safe_component(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed != "."
        && trimmed != ".."
        && !trimmed.contains(['/', '\\', '\0'])
}
