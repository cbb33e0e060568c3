//! CLI argument definitions for horadric
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod catalog;
mod core;

pub use catalog::{CompatFormat, ParseFormat};
pub use core::{Cli, Commands};
