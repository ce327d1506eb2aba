use mycases_core::layout;
use mycases_core::models::case::CaseRecord;

use crate::error::StorageError;
use crate::ledger;
use crate::objects;
use crate::root::DataRoot;
use crate::state;

/// Outcome of a successful [`save_case`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCase {
    pub folder: String,
    pub created: bool,
    pub message: String,
}

pub const SAVED_MESSAGE: &str = "تم حفظ بيانات الحالة بنجاح";

/// Persist a case, creating its folder on first save.
///
/// An existing folder holding the same `case_id` is reused; otherwise the
/// folder is named after the id. `case.json` is always overwritten.
pub fn save_case(root: &DataRoot, record: &CaseRecord) -> Result<SavedCase, StorageError> {
    record
        .validate()
        .map_err(|e| StorageError::Validation(e.to_string()))?;

    let case_id = record.case_id.trim();
    let (folder, created) = match find_case_folder(root, case_id) {
        Some(folder) => (folder, false),
        None => {
            let folder = layout::new_case_folder(case_id);
            if !layout::is_safe_component(&folder) {
                return Err(StorageError::Validation(format!(
                    "case id {case_id:?} cannot be used as a folder name"
                )));
            }
            if root.case_file(&folder).exists() {
                return Err(StorageError::Validation(format!(
                    "folder {folder:?} already holds another case"
                )));
            }
            (folder, true)
        }
    };

    let surveys_dir = root.surveys_dir(&folder);
    std::fs::create_dir_all(&surveys_dir).map_err(|e| StorageError::io(&surveys_dir, e))?;

    let path = root.case_file(&folder);
    state::save_state(&path, record)?;
    tracing::info!(case_id, folder = %folder, created, "case saved");

    Ok(SavedCase {
        folder,
        created,
        message: SAVED_MESSAGE.to_string(),
    })
}

/// Load a case. Missing or unparsable documents are logged and yield `None`.
pub fn load_case(root: &DataRoot, folder: &str) -> Option<CaseRecord> {
    if !layout::is_safe_component(folder) {
        return None;
    }
    let path = root.case_file(folder);
    let raw = match state::load_value(&path) {
        Ok(raw) => raw,
        Err(StorageError::NotFound { .. }) => {
            tracing::debug!(path = %path.display(), "no case document");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read case");
            return None;
        }
    };
    match CaseRecord::from_json(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse case");
            None
        }
    }
}

/// Case folders under the root (subdirectories holding `case.json`),
/// sorted by name. An unreadable root yields an empty list.
pub fn list_case_folders(root: &DataRoot) -> Vec<String> {
    let dirs = match objects::list_dirs(root.path()) {
        Ok(dirs) => dirs,
        Err(StorageError::NotFound { .. }) => return Vec::new(),
        Err(e) => {
            tracing::warn!(root = %root.path().display(), error = %e, "failed to list data root");
            return Vec::new();
        }
    };
    dirs.into_iter()
        .filter(|folder| root.case_file(folder).is_file())
        .collect()
}

/// Folder whose stored `case_id` equals `case_id`. First match wins.
pub fn find_case_folder(root: &DataRoot, case_id: &str) -> Option<String> {
    let case_id = case_id.trim();
    if case_id.is_empty() {
        return None;
    }
    list_case_folders(root).into_iter().find(|folder| {
        load_case(root, folder).is_some_and(|record| record.case_id.trim() == case_id)
    })
}

/// Remove a case folder and all of its surveys. The id is not released.
pub fn delete_case(root: &DataRoot, folder: &str) -> Result<(), StorageError> {
    if !layout::is_safe_component(folder) {
        return Err(StorageError::Validation(format!(
            "{folder:?} is not a case folder"
        )));
    }
    let dir = root.case_dir(folder);
    objects::delete_tree(&dir)?;
    tracing::info!(folder, "case deleted");
    Ok(())
}

/// Issue a case id for a new case.
///
/// Ids already held by stored cases are skipped, which only happens after
/// the ledger was lost or reset.
pub fn allocate_case_id(root: &DataRoot) -> Result<String, StorageError> {
    loop {
        let id = ledger::next_id(root)?;
        let taken = find_case_folder(root, &id)
            .or_else(|| root.case_dir(&layout::new_case_folder(&id)).exists().then(|| id.clone()));
        match taken {
            None => return Ok(id),
            Some(folder) => {
                tracing::warn!(case_id = %id, folder = %folder, "issued id already in use, skipping");
            }
        }
    }
}
