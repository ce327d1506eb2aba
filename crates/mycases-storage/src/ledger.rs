//! Case ID ledger: `case_ids.json` at the data root.
//!
//! Issues monotonically increasing decimal ids. Single writer only; two
//! processes allocating at once can issue the same id.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::root::DataRoot;
use crate::state;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub next_id: String,
    #[serde(default)]
    pub used_ids: Vec<String>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            next_id: "1".to_string(),
            used_ids: Vec::new(),
        }
    }
}

impl Ledger {
    /// Take the current id and advance the counter. `next` is below
    /// `u64::MAX`.
    fn issue(&mut self, next: u64) -> String {
        let issued = next.to_string();
        self.next_id = (next + 1).to_string();
        if !self.used_ids.contains(&issued) {
            self.used_ids.push(issued.clone());
        }
        issued
    }
}

/// Read the ledger. A missing file yields a fresh ledger; an unreadable or
/// malformed one is logged and replaced by a fresh ledger.
pub fn load_ledger(root: &DataRoot) -> Ledger {
    let path = root.ledger();
    if !path.exists() {
        return Ledger::default();
    }
    match state::load_state::<Ledger>(&path) {
        Ok(ledger) => ledger,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "case id ledger unreadable, starting over");
            Ledger::default()
        }
    }
}

/// Issue the next case id and persist the advanced ledger.
///
/// Nothing is issued if the ledger cannot be written back.
pub fn next_id(root: &DataRoot) -> Result<String, StorageError> {
    let mut ledger = load_ledger(root);
    let next = match ledger.next_id.trim().parse::<u64>() {
        Ok(n) if n.checked_add(1).is_some() => n,
        _ => {
            tracing::warn!(next_id = %ledger.next_id, "case id ledger counter invalid, starting over");
            ledger = Ledger::default();
            1
        }
    };
    let issued = ledger.issue(next);
    state::save_state(&root.ledger(), &ledger)?;
    tracing::debug!(case_id = %issued, "case id issued");
    Ok(issued)
}
