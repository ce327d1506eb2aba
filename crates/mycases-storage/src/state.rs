use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::ser::PrettyFormatter;

use crate::error::StorageError;
use crate::objects;

/// Load and deserialize a JSON document.
pub fn load_state<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let body = objects::get_object(path)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load a JSON document as an untyped value.
pub fn load_value(path: &Path) -> Result<serde_json::Value, StorageError> {
    load_state(path)
}

/// Serialize and atomically write a JSON document.
pub fn save_state<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let body = to_pretty_json(value)?;
    objects::put_object(path, &body)
}

/// Pretty JSON with 4-space indentation. Non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
    let mut body = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut body, formatter);
    value.serialize(&mut ser)?;
    Ok(body)
}
