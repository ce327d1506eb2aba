//! mycases-core
//!
//! Pure domain types, field labels, filesystem layout conventions, and the
//! date arithmetic behind every derived age shown to the clinician.
//! No I/O lives here; this is the shared vocabulary of the MyCases system.

pub mod age;
pub mod error;
pub mod labels;
pub mod layout;
pub mod migrate;
pub mod models;
