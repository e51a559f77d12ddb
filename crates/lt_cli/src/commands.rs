//! Command modules for the lt CLI.
//!
//! - `config_cmd`: inspect and edit the cascading configuration

pub mod config_cmd;
