use thiserror::Error;

use crate::questions::ValidationIssue;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("unknown survey: {0}")]
    UnknownSurvey(String),

    #[error("unknown question '{key}' for survey '{survey_id}'")]
    UnknownQuestion { survey_id: String, key: String },

    #[error("invalid answers: {}", join(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn join(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
