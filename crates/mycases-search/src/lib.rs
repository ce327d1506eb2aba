//! mycases-search
//!
//! Case list materialization and the in-memory filter behind the search box.

pub mod error;
pub mod index;
pub mod query;
