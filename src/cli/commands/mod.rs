//! CLI command implementations

pub mod export;
