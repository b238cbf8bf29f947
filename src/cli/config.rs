//! Configuration CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::Config;

/// Configuration commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    palette_file: String,
    hotkeys: String,
    missing_store: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config),
            ConfigCommand::Path => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    fn execute(&self, config: &Config) -> Result<()> {
        let output = ConfigOutput {
            config_file: Config::config_file_path()?.display().to_string(),
            palette_file: config.palette_path()?.display().to_string(),
            hotkeys: format!("{:?}", config.ui.hotkeys),
            missing_store: format!("{:?}", config.ui.missing_store),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Config file:   {}", output.config_file);
            println!("Palette file:  {}", output.palette_file);
            println!("Hotkeys:       {}", output.hotkeys);
            println!("Missing store: {}", output.missing_store);
        }
        Ok(())
    }
}
