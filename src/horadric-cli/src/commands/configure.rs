//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up horadric CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
pub fn handle(database: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(path) = database {
        set_database(&mut config, path)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.database {
        Some(path) => println!("Database: {}", path.display()),
        None => println!(
            "No database configured (using {})",
            config.database_path(None).display()
        ),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn set_database(config: &mut Config, path: PathBuf) -> Result<()> {
    println!("Database configured: {}", path.display());
    config.set_database(path);
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

fn show_usage() {
    println!("Usage: horadric configure --database PATH");
    println!("   or: horadric configure --show");
    println!();
    println!("The --database flag and HORADRIC_DB take precedence over the configured path.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_show_config_does_not_panic() {
        show_config(&Config::default());
        show_config(&Config {
            database: Some(PathBuf::from("share/catalog.db")),
        });
    }
}
