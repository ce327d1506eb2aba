use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::age;
use crate::error::CoreError;
use crate::labels::{self, CASE_FIELDS, FieldKind};
use crate::migrate;

use super::field::Labeled;

type Text = Option<Labeled<String>>;
type Count = Option<Labeled<u32>>;

/// One child's intake record, stored as `case.json`.
///
/// `case_id` is a bare string; every other value carries its Arabic label.
/// Only `case_id` and `child_name` are required for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(default)]
    pub case_id: String,
    pub child_name: Labeled<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_language: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_language_notes: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_language: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_language_notes: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosed_by: Text,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_dob: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_age: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_job: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_health: Text,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_dob: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_age: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_job: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_health: Text,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_preg_age: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_preg_age: Text,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents_relation: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_degree: Text,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_size: Count,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siblings_count: Count,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_order: Count,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_cases_family: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similar_cases_who: Text,
}

/// A display row produced from a case: key, label, rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRow {
    pub key: &'static str,
    pub label: String,
    pub value: String,
}

macro_rules! text_ref {
    ($record:expr, $key:expr, $($name:ident),+ $(,)?) => {
        match $key {
            $(stringify!($name) => Some(&$record.$name),)+
            _ => None,
        }
    };
}

macro_rules! text_mut {
    ($record:expr, $key:expr, $($name:ident),+ $(,)?) => {
        match $key {
            $(stringify!($name) => Some(&mut $record.$name),)+
            _ => None,
        }
    };
}

macro_rules! with_text_fields {
    ($mac:ident, $record:expr, $key:expr) => {
        $mac!(
            $record, $key, dob, age, gender, first_language, first_language_notes,
            second_language, second_language_notes, diagnosis, diagnosed_by, father_name,
            father_dob, father_age, father_job, father_health, mother_name, mother_dob,
            mother_age, mother_job, mother_health, father_preg_age, mother_preg_age,
            parents_relation, relation_degree, similar_cases_family, similar_cases_who,
        )
    };
}

impl CaseRecord {
    /// A record holding only the mandatory identity fields.
    pub fn new(case_id: impl Into<String>, child_name: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            child_name: Labeled::new(labels::case_label("child_name"), child_name.into()),
            dob: None,
            age: None,
            gender: None,
            first_language: None,
            first_language_notes: None,
            second_language: None,
            second_language_notes: None,
            diagnosis: None,
            diagnosed_by: None,
            father_name: None,
            father_dob: None,
            father_age: None,
            father_job: None,
            father_health: None,
            mother_name: None,
            mother_dob: None,
            mother_age: None,
            mother_job: None,
            mother_health: None,
            father_preg_age: None,
            mother_preg_age: None,
            parents_relation: None,
            relation_degree: None,
            family_size: None,
            siblings_count: None,
            child_order: None,
            similar_cases_family: None,
            similar_cases_who: None,
        }
    }

    /// Build a record from raw JSON in either the labeled or the legacy
    /// flat-scalar shape.
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        if migrate::is_legacy_case(&value) {
            tracing::debug!("upgrading flat-scalar case document");
        }
        let migrated = migrate::migrate_case(value)?;
        Ok(serde_json::from_value(migrated)?)
    }

    /// Both mandatory fields must be non-blank before the record is written.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.child_name.is_blank() {
            return Err(CoreError::MissingField("child_name".to_string()));
        }
        if self.case_id.trim().is_empty() {
            return Err(CoreError::MissingField("case_id".to_string()));
        }
        Ok(())
    }

    pub fn child_name(&self) -> &str {
        self.child_name.value.trim()
    }

    /// Text value of a labeled text field; `child_name` included.
    pub fn text(&self, key: &str) -> Option<&str> {
        if key == "child_name" {
            return Some(self.child_name.value.as_str());
        }
        with_text_fields!(text_ref, self, key)
            .and_then(|slot: &Text| slot.as_ref())
            .map(|f| f.value.as_str())
    }

    /// Counter value of a labeled count field.
    pub fn count(&self, key: &str) -> Option<u32> {
        let slot = match key {
            "family_size" => &self.family_size,
            "siblings_count" => &self.siblings_count,
            "child_order" => &self.child_order,
            _ => return None,
        };
        slot.as_ref().map(|f| f.value)
    }

    /// Set a text field by key, attaching its canonical label.
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<(), CoreError> {
        let value = value.into();
        if key == "child_name" {
            self.child_name.value = value;
            return Ok(());
        }
        let label = labels::case_label(key).to_string();
        let slot: Option<&mut Text> = with_text_fields!(text_mut, self, key);
        match slot {
            Some(slot) => {
                *slot = Some(Labeled::new(label, value));
                Ok(())
            }
            None => Err(CoreError::InvalidField {
                field: key.to_string(),
                reason: "not a text field".to_string(),
            }),
        }
    }

    /// Set a counter field by key, attaching its canonical label.
    pub fn set_count(&mut self, key: &str, value: u32) -> Result<(), CoreError> {
        let label = labels::case_label(key).to_string();
        let slot = match key {
            "family_size" => &mut self.family_size,
            "siblings_count" => &mut self.siblings_count,
            "child_order" => &mut self.child_order,
            _ => {
                return Err(CoreError::InvalidField {
                    field: key.to_string(),
                    reason: "not a count field".to_string(),
                });
            }
        };
        *slot = Some(Labeled::new(label, value));
        Ok(())
    }

    pub fn dob(&self) -> Option<&str> {
        self.text("dob")
    }

    pub fn diagnosis(&self) -> Option<&str> {
        self.text("diagnosis")
    }

    /// Recompute every stored age string from the stored birth dates.
    pub fn refresh_derived(&mut self, today: Date) {
        let child_dob = self.text("dob").map(str::to_owned);
        let father_dob = self.text("father_dob").map(str::to_owned);
        let mother_dob = self.text("mother_dob").map(str::to_owned);

        let derived = [
            ("age", age::child_age_text(child_dob.as_deref(), today)),
            ("father_age", age::parent_age_text(father_dob.as_deref(), today)),
            ("mother_age", age::parent_age_text(mother_dob.as_deref(), today)),
            (
                "father_preg_age",
                age::age_at_birth_text(child_dob.as_deref(), father_dob.as_deref()),
            ),
            (
                "mother_preg_age",
                age::age_at_birth_text(child_dob.as_deref(), mother_dob.as_deref()),
            ),
        ];
        for (key, value) in derived {
            // Every key above is a text field.
            let _ = self.set_text(key, value);
        }
    }

    /// Drop follow-up answers whose triggering flag is not "yes".
    pub fn clear_inactive_followups(&mut self) {
        if self.text("parents_relation") != Some(labels::YES) {
            self.relation_degree = None;
        }
        if self.text("similar_cases_family") != Some(labels::YES) {
            self.similar_cases_who = None;
        }
    }

    /// Keys of choice fields holding a value outside the form's options.
    /// Legacy records may carry free text here, so this is advisory.
    pub fn unexpected_choices(&self) -> Vec<&'static str> {
        CASE_FIELDS
            .iter()
            .filter_map(|field| {
                let options = labels::field_options(field.key)?;
                let value = self.text(field.key)?.trim();
                (!value.is_empty() && !options.contains(&value)).then_some(field.key)
            })
            .collect()
    }

    /// Every populated field as a display row, in form order.
    pub fn rows(&self) -> Vec<CaseRow> {
        let mut rows = Vec::new();
        for field in CASE_FIELDS {
            let row = match field.kind {
                FieldKind::Text => {
                    let labeled = if field.key == "child_name" {
                        Some(&self.child_name)
                    } else {
                        with_text_fields!(text_ref, self, field.key)
                            .and_then(|slot: &Text| slot.as_ref())
                    };
                    labeled.map(|f| (f.ar_key.clone(), f.value.clone()))
                }
                FieldKind::Count => {
                    let slot = match field.key {
                        "family_size" => &self.family_size,
                        "siblings_count" => &self.siblings_count,
                        _ => &self.child_order,
                    };
                    slot.as_ref()
                        .map(|f| (f.ar_key.clone(), f.value.to_string()))
                }
            };
            if let Some((label, value)) = row {
                rows.push(CaseRow {
                    key: field.key,
                    label,
                    value,
                });
            }
        }
        rows
    }
}
