//! Upgrade of case documents written by the earlier flat-scalar schema.
//!
//! The first revision stored `"child_name": "Omar"`; the current one stores
//! `"child_name": {"ar_key": "اسم الحالة", "value": "Omar"}`. Both shapes
//! can coexist in one data root, so every load runs [`migrate_case`], a pure
//! transform on the raw JSON that is a no-op for current documents.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::labels::{CASE_FIELDS, CaseField, FieldKind};

/// Normalize a raw case document to the labeled shape.
///
/// - bare scalars of known fields are wrapped with their canonical label
/// - `null` values are dropped
/// - text fields holding numbers become strings and counters holding
///   numeric strings become integers
/// - a numeric `case_id` becomes a string
/// - unknown keys are left untouched
pub fn migrate_case(mut json: Value) -> Result<Value, CoreError> {
    let obj = json
        .as_object_mut()
        .ok_or_else(|| CoreError::InvalidDocument("case is not a JSON object".to_string()))?;

    if let Some(id) = obj.get_mut("case_id") {
        match id {
            Value::String(_) => {}
            Value::Number(n) => *id = Value::String(n.to_string()),
            Value::Null => *id = Value::String(String::new()),
            other => {
                return Err(CoreError::InvalidField {
                    field: "case_id".to_string(),
                    reason: format!("unexpected value {other}"),
                });
            }
        }
    }

    for field in CASE_FIELDS {
        let Some(raw) = obj.remove(field.key) else {
            continue;
        };
        if let Some(labeled) = normalize_field(field, raw)? {
            obj.insert(field.key.to_string(), labeled);
        }
    }

    Ok(json)
}

/// Whether a raw document still uses the flat-scalar schema.
pub fn is_legacy_case(json: &Value) -> bool {
    json.get("child_name").is_some_and(|v| !v.is_object())
}

fn normalize_field(field: &CaseField, raw: Value) -> Result<Option<Value>, CoreError> {
    let (label, value) = match raw {
        Value::Null => return Ok(None),
        Value::Object(mut wrapped) => {
            let label = match wrapped.remove("ar_key") {
                Some(Value::String(s)) if !s.is_empty() => s,
                _ => field.label.to_string(),
            };
            let value = wrapped.remove("value").unwrap_or(Value::Null);
            (label, value)
        }
        scalar => (field.label.to_string(), scalar),
    };

    let Some(value) = coerce(field, value)? else {
        return Ok(None);
    };

    let mut out = Map::new();
    out.insert("ar_key".to_string(), Value::String(label));
    out.insert("value".to_string(), value);
    Ok(Some(Value::Object(out)))
}

fn coerce(field: &CaseField, value: Value) -> Result<Option<Value>, CoreError> {
    let invalid = |reason: String| CoreError::InvalidField {
        field: field.key.to_string(),
        reason,
    };

    match (field.kind, value) {
        (_, Value::Null) => Ok(None),
        (FieldKind::Text, Value::String(s)) => Ok(Some(Value::String(s))),
        (FieldKind::Text, Value::Number(n)) => Ok(Some(Value::String(n.to_string()))),
        (FieldKind::Text, Value::Bool(b)) => Ok(Some(Value::String(b.to_string()))),
        (FieldKind::Count, Value::Number(n)) => match n.as_u64() {
            Some(v) if v <= u64::from(u32::MAX) => Ok(Some(Value::Number(n))),
            _ => Err(invalid(format!("expected a non-negative integer, got {n}"))),
        },
        (FieldKind::Count, Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<u32>()
                .map(|v| Some(Value::Number(v.into())))
                .map_err(|_| invalid(format!("expected a non-negative integer, got {s:?}")))
        }
        (_, other) => Err(invalid(format!("unexpected value {other}"))),
    }
}
