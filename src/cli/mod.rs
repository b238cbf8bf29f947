//! CLI command handlers for Swatchbook.
//!
//! This module provides headless, scriptable access to the palette engine:
//! listing and editing the stored palette, and converting colors.

pub mod config;
pub mod convert;
pub mod palette;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;

// Re-export types used by main.rs and tests
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use palette::{AddArgs, ListArgs, MoveArgs, RemoveArgs};

/// Swatchbook - curate sampled colors into an ordered palette
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Palette file to use instead of the configured one
    #[arg(long, value_name = "FILE", global = true)]
    pub palette: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List palette entries in order
    List(ListArgs),
    /// Add a color to the palette
    Add(AddArgs),
    /// Remove a palette entry by key
    Remove(RemoveArgs),
    /// Move a palette entry onto another entry or to the end
    Move(MoveArgs),
    /// Convert a color between hex, RGB and HSL
    Convert(ConvertArgs),
    /// Show configuration
    Config(ConfigArgs),
}

impl Command {
    /// Commands that write to the palette store.
    const fn edits_palette(&self) -> bool {
        matches!(self, Self::Add(_) | Self::Remove(_) | Self::Move(_))
    }
}

impl Cli {
    /// Runs the selected command.
    ///
    /// An unreadable config file falls back to defaults for read-only commands.
    /// Commands that edit the palette fail instead, since the defaults may point
    /// at a different store.
    pub fn execute(&self) -> Result<()> {
        let config = match Config::load() {
            Ok(config) => config,
            Err(err) if self.command.edits_palette() => {
                return Err(err.context("Cannot edit the palette without a valid config"));
            }
            Err(err) => {
                warn!("Failed to load config, using defaults: {err:#}");
                Config::default()
            }
        };
        let palette = self.palette.as_deref();

        match &self.command {
            Command::List(args) => args.execute(&config, palette),
            Command::Add(args) => args.execute(&config, palette),
            Command::Remove(args) => args.execute(&config, palette),
            Command::Move(args) => args.execute(&config, palette),
            Command::Convert(args) => args.execute(),
            Command::Config(args) => args.execute(&config),
        }
    }
}
