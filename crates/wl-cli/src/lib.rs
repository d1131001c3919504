//! Worklog CLI library.
//!
//! This crate provides the CLI interface for the worklog session engine.

mod cli;
pub mod commands;
mod config;
pub mod store;

pub use cli::{Cli, Commands};
pub use config::Config;
