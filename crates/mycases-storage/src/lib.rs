//! mycases-storage
//!
//! Local-filesystem persistence for cases and surveys. Every operation
//! takes the [`DataRoot`] it works under; there is no process-global
//! data directory.

pub mod cases;
pub mod error;
pub mod ledger;
pub mod objects;
pub mod root;
pub mod state;
pub mod surveys;

pub use root::DataRoot;
