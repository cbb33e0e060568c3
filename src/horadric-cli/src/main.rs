mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "horadric=debug,horadric_idb=debug,horadric_cli=debug"
    } else {
        "horadric=info,horadric_idb=info,horadric_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure { database, show } => {
            commands::configure::handle(database, show)?;
        }

        Commands::Translate {
            code,
            min,
            max,
            param,
        } => {
            commands::codec::translate(&code, min, max, param)?;
        }

        Commands::Parse {
            text,
            format,
            no_combine,
        } => {
            commands::codec::parse(text, format, no_combine)?;
        }

        Commands::Templates { code, order } => {
            commands::codec::templates(code, order)?;
        }

        Commands::Import { input, database } => {
            commands::import::handle(&input, database)?;
        }

        Commands::Compat {
            database,
            recipe,
            format,
        } => {
            commands::compat::list(database, recipe, format)?;
        }

        Commands::Resolve { database } => {
            commands::compat::resolve(database)?;
        }
    }

    Ok(())
}
