use mycases_core::layout;
use mycases_core::models::survey::SurveyRecord;

use crate::error::StorageError;
use crate::objects;
use crate::root::DataRoot;
use crate::state;

pub const SAVED_MESSAGE: &str = "تم حفظ بيانات الاستبيان بنجاح";

/// Write `surveys/<survey_type>.json` for a case, replacing any earlier
/// survey of the same type. Returns the file name written.
pub fn save_survey(
    root: &DataRoot,
    folder: &str,
    record: &SurveyRecord,
) -> Result<String, StorageError> {
    record
        .validate()
        .map_err(|e| StorageError::Validation(e.to_string()))?;
    let case_dir = case_dir(root, folder)?;
    if !case_dir.is_dir() {
        return Err(StorageError::NotFound {
            path: case_dir.display().to_string(),
        });
    }

    let stem = record.survey_type.trim();
    let path = root.survey_file(folder, stem);
    state::save_state(&path, record)?;
    tracing::info!(folder, survey_type = stem, "survey saved");

    Ok(layout::survey_filename(stem))
}

/// Every readable survey of a case, oldest `survey_date` first.
///
/// Surveys without a usable date sort before all dated ones. Unreadable
/// files are logged and skipped.
pub fn list_surveys(root: &DataRoot, folder: &str) -> Vec<SurveyRecord> {
    if !layout::is_safe_component(folder) {
        return Vec::new();
    }
    let dir = root.surveys_dir(folder);
    let files = match objects::list_files(&dir, layout::JSON_EXT) {
        Ok(files) => files,
        Err(StorageError::NotFound { .. }) => return Vec::new(),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to list surveys");
            return Vec::new();
        }
    };

    let mut surveys: Vec<SurveyRecord> = files
        .iter()
        .filter_map(|file| load_survey(root, folder, file))
        .collect();
    surveys.sort_by_key(|s| s.date());
    surveys
}

/// Load one survey by file name, with or without the `.json` extension.
pub fn load_survey(root: &DataRoot, folder: &str, filename: &str) -> Option<SurveyRecord> {
    let stem = survey_stem(filename);
    if !layout::is_safe_component(folder) || !layout::is_safe_component(stem) {
        return None;
    }
    let path = root.survey_file(folder, stem);
    match state::load_state::<SurveyRecord>(&path) {
        Ok(mut record) => {
            record.answers.remove("_filename");
            record.filename = Some(stem.to_string());
            Some(record)
        }
        Err(StorageError::NotFound { .. }) => {
            tracing::debug!(path = %path.display(), "survey not found");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load survey");
            None
        }
    }
}

/// Remove one survey file. `NotFound` if it does not exist.
pub fn delete_survey(root: &DataRoot, folder: &str, filename: &str) -> Result<(), StorageError> {
    let stem = survey_stem(filename);
    if !layout::is_safe_component(stem) {
        return Err(StorageError::Validation(format!(
            "{filename:?} is not a survey file"
        )));
    }
    case_dir(root, folder)?;
    let path = root.survey_file(folder, stem);
    objects::delete_object(&path)?;
    tracing::info!(folder, survey = stem, "survey deleted");
    Ok(())
}

fn survey_stem(filename: &str) -> &str {
    let trimmed = filename.trim();
    trimmed
        .strip_suffix(&format!(".{}", layout::JSON_EXT))
        .unwrap_or(trimmed)
}

fn case_dir(root: &DataRoot, folder: &str) -> Result<std::path::PathBuf, StorageError> {
    if !layout::is_safe_component(folder) {
        return Err(StorageError::Validation(format!(
            "{folder:?} is not a case folder"
        )));
    }
    Ok(root.case_dir(folder))
}
