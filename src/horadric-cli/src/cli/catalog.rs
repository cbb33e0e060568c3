//! Output format options

/// Output format for the parse command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ParseFormat {
    #[default]
    Text,
    Json,
}

/// Output format for the compat command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CompatFormat {
    #[default]
    Table,
    Json,
}
