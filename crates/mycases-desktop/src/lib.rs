//! mycases-desktop library root.
//!
//! The binary is a thin clap front end; the command layer, config and
//! state live here so integration tests can drive them against a scratch
//! data root.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dialogs;
pub mod state;
