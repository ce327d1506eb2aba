use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::age;
use crate::error::CoreError;
use crate::layout;

use super::field::Labeled;

/// Keys that describe the survey or repeat case identity rather than
/// answer a question.
pub const BOOKKEEPING_KEYS: &[&str] = &[
    "survey_type",
    "survey_date",
    "submission_timestamp",
    "case_id",
    "child_name",
    "dob",
    "gender",
    "_filename",
];

/// A single answer: labeled in current documents, a bare scalar in legacy
/// ones and for the case-context columns some forms copy in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Labeled(Labeled<serde_json::Value>),
    Bare(serde_json::Value),
}

impl Answer {
    pub fn labeled(ar_key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Answer::Labeled(Labeled::new(ar_key, value.into()))
    }

    pub fn value(&self) -> &serde_json::Value {
        match self {
            Answer::Labeled(l) => &l.value,
            Answer::Bare(v) => v,
        }
    }

    /// The Arabic label, or `fallback` for bare values.
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Answer::Labeled(l) => &l.ar_key,
            Answer::Bare(_) => fallback,
        }
    }

    /// The value as display text. Strings are shown without quotes and
    /// `null` is empty.
    pub fn display_value(&self) -> String {
        match self.value() {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_value().trim().is_empty()
    }
}

/// One questionnaire instance attached to a case, stored as
/// `surveys/<survey_type>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub survey_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_timestamp: Option<String>,
    #[serde(flatten)]
    pub answers: BTreeMap<String, Answer>,
    /// Filename stem the record was loaded from; never written back.
    #[serde(skip)]
    pub filename: Option<String>,
}

impl SurveyRecord {
    pub fn new(survey_type: impl Into<String>) -> Self {
        Self {
            survey_type: survey_type.into(),
            survey_date: None,
            submission_timestamp: None,
            answers: BTreeMap::new(),
            filename: None,
        }
    }

    /// Validate the discriminator, which doubles as the filename stem.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.survey_type.trim().is_empty() {
            return Err(CoreError::MissingField("survey_type".to_string()));
        }
        if !layout::is_safe_component(&self.survey_type) {
            return Err(CoreError::InvalidField {
                field: "survey_type".to_string(),
                reason: format!("{:?} cannot be used as a filename", self.survey_type),
            });
        }
        Ok(())
    }

    /// Parsed `survey_date`; `None` when missing or not `yyyy-MM-dd`.
    pub fn date(&self) -> Option<Date> {
        self.survey_date.as_deref().and_then(age::parse_date)
    }

    /// Stamp the submission time as a local civil date-time.
    pub fn stamp_submission(&mut self, now: jiff::civil::DateTime) {
        self.submission_timestamp = Some(now.to_string());
    }

    pub fn answer(&self, key: &str) -> Option<&Answer> {
        self.answers.get(key)
    }

    pub fn set_answer(&mut self, key: impl Into<String>, answer: Answer) {
        self.answers.insert(key.into(), answer);
    }

    /// Answers that are real question responses: bookkeeping keys and
    /// empty values excluded, in key order.
    pub fn question_answers(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers
            .iter()
            .filter(|(k, a)| !BOOKKEEPING_KEYS.contains(&k.as_str()) && !a.is_empty())
            .map(|(k, a)| (k.as_str(), a))
    }
}
