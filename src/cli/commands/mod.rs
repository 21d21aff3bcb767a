//! Subcommand implementations.

/// Batch translation command handler.
pub mod run;
