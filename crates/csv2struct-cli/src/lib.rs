//! CLI library components for csv2struct.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod package;
pub mod summary;
pub mod types;
