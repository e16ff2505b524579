//! CLI support for the `app-schema-cli` binary

pub mod commands;
pub mod error;

pub use error::CliError;
