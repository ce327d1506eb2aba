use serde::{Deserialize, Serialize};

/// A stored value paired with the Arabic label it was entered under.
///
/// On disk: `{ "ar_key": "اسم الحالة", "value": "Omar" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labeled<T> {
    pub ar_key: String,
    pub value: T,
}

impl<T> Labeled<T> {
    pub fn new(ar_key: impl Into<String>, value: T) -> Self {
        Self {
            ar_key: ar_key.into(),
            value,
        }
    }
}

impl Labeled<String> {
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
