//! CLI subcommand implementations.

pub mod account;
pub mod batch;
pub mod finder;
pub mod verify;
