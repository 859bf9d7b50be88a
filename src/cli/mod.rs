//! Command-line interface for the four programs
//!
//! Each subcommand owns its argument struct and an `execute` entry point.

pub mod commands;
pub mod config;
pub mod output;
