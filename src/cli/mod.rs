//! Support code for the `stay_core_cli` binary.

pub mod commands;
pub mod output;
pub mod table;
