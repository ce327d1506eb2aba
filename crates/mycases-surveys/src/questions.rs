use serde::Serialize;
use thiserror::Error;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "options")]
pub enum AnswerKind {
    /// One of a fixed list of Arabic options.
    Choice(&'static [&'static str]),
    /// Free text, possibly empty.
    FreeText,
}

/// A single question on a survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: &'static str,
    /// Arabic label, stored as the answer's `ar_key`.
    pub label: &'static str,
    pub kind: AnswerKind,
}

impl Question {
    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            kind: AnswerKind::Choice(options),
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: AnswerKind::FreeText,
        }
    }

    /// Whether `value` is an acceptable answer. Empty is always accepted.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self.kind {
            AnswerKind::FreeText => true,
            AnswerKind::Choice(options) => value.is_empty() || options.contains(&value),
        }
    }
}

/// A titled group of questions, shown as one block on the form and in
/// reports.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: Vec<Question>,
}

pub const YES_NO: &[&str] = &["نعم", "لا"];

/// A problem found while checking a survey record against its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ValidationIssue {
    pub key: String,
    pub value: String,
    pub message: String,
}
