use jiff::civil::Date;
use serde::Serialize;

use mycases_core::age;
use mycases_storage::DataRoot;
use mycases_storage::cases;

use crate::error::SearchError;

/// One row of the case list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseSummary {
    pub folder: String,
    pub case_id: String,
    pub child_name: String,
    pub dob: String,
    pub diagnosis: String,
    /// Whole years on the load date; empty when the DOB is unusable.
    pub age_years: String,
    pub display_name: String,
}

impl CaseSummary {
    pub fn display_name(child_name: &str, dob: &str, case_id: &str) -> String {
        format!("{child_name} - {dob} ({case_id})")
    }
}

/// Read every case folder into a summary, in folder order.
///
/// Folders whose case is unreadable or has no name are skipped.
pub fn load_summaries(root: &DataRoot, today: Date) -> Result<Vec<CaseSummary>, SearchError> {
    if !root.path().is_dir() {
        return Err(SearchError::DataRootMissing(
            root.path().display().to_string(),
        ));
    }

    let mut summaries = Vec::new();
    for folder in cases::list_case_folders(root) {
        let Some(record) = cases::load_case(root, &folder) else {
            tracing::warn!(folder = %folder, "skipping unreadable case");
            continue;
        };
        let child_name = record.child_name().to_string();
        if child_name.is_empty() {
            tracing::warn!(folder = %folder, "skipping case without a name");
            continue;
        }

        let dob = record.dob().unwrap_or_default().trim().to_string();
        let case_id = record.case_id.trim().to_string();
        summaries.push(CaseSummary {
            display_name: CaseSummary::display_name(&child_name, &dob, &case_id),
            age_years: age::age_years_text(Some(dob.as_str()), today).unwrap_or_default(),
            diagnosis: record.diagnosis().unwrap_or_default().trim().to_string(),
            folder,
            case_id,
            child_name,
            dob,
        });
    }

    tracing::debug!(count = summaries.len(), "case summaries loaded");
    Ok(summaries)
}
