//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::catalog::{CompatFormat, ParseFormat};

#[derive(Parser)]
#[command(name = "horadric")]
#[command(about = "Item catalog tool - property text codec and runeword compatibility", long_about = None)]
pub struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default database path
        #[arg(long)]
        database: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },

    /// Render a property as display text
    #[command(visible_alias = "t")]
    Translate {
        /// Property code (e.g. res-fire, skilltab, str/lvl)
        code: String,

        /// Minimum value
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        min: i32,

        /// Maximum value (defaults to min)
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i32>,

        /// Parameter (skill name, skill tab number, ...)
        #[arg(long)]
        param: Option<String>,
    },

    /// Parse display text lines into properties (reads stdin when no text is given)
    #[command(visible_alias = "p")]
    Parse {
        /// Lines of item text
        text: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ParseFormat::Text)]
        format: ParseFormat,

        /// Skip collapsing the four attributes into all-stats
        #[arg(long)]
        no_combine: bool,
    },

    /// List display templates
    Templates {
        /// Only show this code
        #[arg(long)]
        code: Option<String>,

        /// Show the order reverse parsing tries patterns in
        #[arg(long)]
        order: bool,
    },

    /// Import an item catalog JSON document
    #[command(visible_alias = "i")]
    Import {
        /// Path to the JSON document
        input: PathBuf,

        /// Database path
        #[arg(long, env = "HORADRIC_DB")]
        database: Option<PathBuf>,
    },

    /// List runeword/base item compatibility
    Compat {
        /// Database path
        #[arg(long, env = "HORADRIC_DB")]
        database: Option<PathBuf>,

        /// Only this runeword id
        #[arg(long)]
        recipe: Option<i64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = CompatFormat::Table)]
        format: CompatFormat,
    },

    /// Recompute runeword compatibility from the database contents
    Resolve {
        /// Database path
        #[arg(long, env = "HORADRIC_DB")]
        database: Option<PathBuf>,
    },
}
