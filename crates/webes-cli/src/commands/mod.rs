//! CLI command handlers
//!
//! Each subcommand has its own module.

pub mod init;
pub mod validate;
pub mod wipe;
