//! mycases-surveys
//!
//! Questionnaire definitions. Pure data plus answer validation; persistence
//! lives in `mycases-storage`. Each definition names its questions, their
//! Arabic labels and, for closed questions, the allowed options.

pub mod definitions;
pub mod error;
pub mod questions;

use std::collections::BTreeMap;

use jiff::civil::{Date, DateTime};
use mycases_core::models::case::CaseRecord;
use mycases_core::models::survey::{Answer, BOOKKEEPING_KEYS, SurveyRecord};

use error::SurveyError;
use questions::{Question, Section, ValidationIssue};

/// Trait implemented by each survey form.
pub trait SurveyDefinition: Send + Sync {
    /// Stable identifier used on the command line (e.g. "communication").
    fn id(&self) -> &str;

    /// Arabic title. Stored as `survey_type` and used as the file name.
    fn title(&self) -> &str;

    /// Question groups in form order.
    fn sections(&self) -> &[Section];

    /// Whether the form copies the case identity (id, name, DOB, gender)
    /// into the survey document.
    fn includes_case_context(&self) -> bool {
        false
    }

    /// All questions in form order.
    fn questions(&self) -> Vec<&Question> {
        self.sections().iter().flat_map(|s| &s.questions).collect()
    }

    fn question(&self, key: &str) -> Option<&Question> {
        self.sections()
            .iter()
            .flat_map(|s| &s.questions)
            .find(|q| q.key == key)
    }

    /// Check a record against this definition. Unknown keys and choice
    /// values outside the option list are reported; empty answers pass.
    fn validate(&self, record: &SurveyRecord) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if record.survey_type != self.title() {
            issues.push(ValidationIssue {
                key: "survey_type".to_string(),
                value: record.survey_type.clone(),
                message: format!(
                    "{}: survey type {:?} does not match",
                    self.id(),
                    record.survey_type
                ),
            });
        }
        for (key, answer) in &record.answers {
            if BOOKKEEPING_KEYS.contains(&key.as_str()) {
                continue;
            }
            let value = answer.display_value();
            match self.question(key) {
                None => issues.push(ValidationIssue {
                    key: key.clone(),
                    value,
                    message: format!("{}: unknown question '{key}'", self.id()),
                }),
                Some(question) if !question.accepts(&value) => issues.push(ValidationIssue {
                    key: key.clone(),
                    message: format!(
                        "{}: {:?} is not an option for '{}'",
                        self.id(),
                        value,
                        question.label
                    ),
                    value,
                }),
                Some(_) => {}
            }
        }
        issues
    }

    /// Build a record from raw answers keyed by question key.
    ///
    /// Every question is present in the result, unanswered ones with an
    /// empty value, each labeled with its Arabic question text.
    fn new_record(
        &self,
        date: Date,
        answers: &BTreeMap<String, String>,
        case: Option<&CaseRecord>,
        now: DateTime,
    ) -> Result<SurveyRecord, SurveyError> {
        if let Some(key) = answers.keys().find(|k| self.question(k).is_none()) {
            return Err(SurveyError::UnknownQuestion {
                survey_id: self.id().to_string(),
                key: key.clone(),
            });
        }

        let mut record = SurveyRecord::new(self.title());
        record.survey_date = Some(date.to_string());
        record.stamp_submission(now);

        if self.includes_case_context()
            && let Some(case) = case
        {
            let context = [
                ("case_id", case.case_id.as_str()),
                ("child_name", case.child_name()),
                ("dob", case.dob().unwrap_or_default()),
                ("gender", case.text("gender").unwrap_or_default()),
            ];
            for (key, value) in context {
                record.set_answer(key, Answer::Bare(value.into()));
            }
        }

        for question in self.questions() {
            let value = answers
                .get(question.key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            record.set_answer(question.key, Answer::labeled(question.label, value));
        }

        let issues = self.validate(&record);
        if !issues.is_empty() {
            tracing::debug!(survey = self.id(), issues = issues.len(), "survey answers rejected");
            return Err(SurveyError::Invalid(issues));
        }
        Ok(record)
    }
}

/// Return all registered surveys, in menu order.
pub fn all_surveys() -> Vec<Box<dyn SurveyDefinition>> {
    vec![
        Box::new(definitions::first_assessment::FirstAssessment),
        Box::new(definitions::communication::Communication),
        Box::new(definitions::social_interaction::SocialInteraction),
        Box::new(definitions::daily_routine::DailyRoutine),
        Box::new(definitions::motor_skills::MotorSkills),
    ]
}

/// Look up a survey by ID.
pub fn get_survey(id: &str) -> Option<Box<dyn SurveyDefinition>> {
    all_surveys().into_iter().find(|s| s.id() == id)
}

/// Look up a survey by its stored `survey_type` title.
pub fn survey_for_type(title: &str) -> Option<Box<dyn SurveyDefinition>> {
    let title = title.trim();
    all_surveys().into_iter().find(|s| s.title() == title)
}
