//! Palette editing CLI commands.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::models::PaletteEntry;
use crate::services::{
    DragToken, JsonFileStore, PaletteSession, SessionEvent, UnavailableSampler,
};

type CliSession = PaletteSession<JsonFileStore, UnavailableSampler>;

/// Opens a session on the palette file, preferring an explicit override.
fn open_session(config: &Config, palette: Option<&Path>) -> Result<CliSession> {
    let store = match palette {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::in_resource_dir(&config.resource_dir()?),
    };
    let path = store.path().to_path_buf();
    PaletteSession::open(
        store,
        UnavailableSampler,
        config.ui.hotkeys,
        config.ui.missing_store,
    )
    .with_context(|| format!("Failed to open palette {}", path.display()))
}

/// Stages `hex` (and `name`) as the current color, rejecting invalid input.
fn stage(session: &mut CliSession, hex: &str, name: Option<&str>) -> Result<()> {
    let outcome = session.handle(SessionEvent::HexInput(hex.to_string()))?;
    if !outcome.staging_changed {
        anyhow::bail!("Invalid hex color '{hex}'. Expected #RRGGBB");
    }
    session.handle(SessionEvent::NameInput(name.map(String::from)))?;
    Ok(())
}

/// JSON-serializable palette entry for output
#[derive(Serialize, Debug)]
struct EntryOutput<'a> {
    key: &'a str,
    hex_color: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> From<&'a PaletteEntry> for EntryOutput<'a> {
    fn from(entry: &'a PaletteEntry) -> Self {
        Self {
            key: entry.key(),
            hex_color: entry.hex().as_str(),
            name: entry.name(),
        }
    }
}

/// List palette entries
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    /// Execute list command
    pub fn execute(&self, config: &Config, palette: Option<&Path>) -> Result<()> {
        let session = open_session(config, palette)?;
        let entries = session.palette().snapshot();

        if self.json {
            let output: Vec<EntryOutput> = entries.iter().map(EntryOutput::from).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("Palette is empty");
            return Ok(());
        }

        for (index, entry) in entries.iter().enumerate() {
            println!("{:>3}. {}", index + 1, entry.key());
        }
        Ok(())
    }
}

/// Add a color to the palette
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Hex color (#RRGGBB)
    #[arg(value_name = "HEX")]
    hex: String,

    /// Display name for the color
    #[arg(long)]
    name: Option<String>,

    /// Drop the new color onto this entry's position instead of the front
    #[arg(long, value_name = "KEY", conflicts_with = "end")]
    onto: Option<String>,

    /// Drop the new color at the end of the palette
    #[arg(long)]
    end: bool,
}

impl AddArgs {
    /// Execute add command
    pub fn execute(&self, config: &Config, palette: Option<&Path>) -> Result<()> {
        let mut session = open_session(config, palette)?;
        stage(&mut session, &self.hex, self.name.as_deref())?;
        let key = session.staging().current_entry().key().to_string();

        let target = match (&self.onto, self.end) {
            (Some(key), _) => Some(DragToken::entry(key.clone())),
            (None, true) => Some(DragToken::EndOfList),
            (None, false) => None,
        };

        let outcome = match target {
            Some(target) => {
                session.handle(SessionEvent::DragStart(DragToken::Staging))?;
                session.handle(SessionEvent::DragEnd(Some(target)))?
            }
            None => session.handle(SessionEvent::AddStaging)?,
        };

        if outcome.palette_changed {
            println!("Added {key}");
        } else {
            println!("{key} is already in the palette");
        }
        Ok(())
    }
}

/// Remove a palette entry
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Key of the entry (hex, or hex_name for named colors)
    #[arg(value_name = "KEY")]
    key: String,
}

impl RemoveArgs {
    /// Execute remove command
    pub fn execute(&self, config: &Config, palette: Option<&Path>) -> Result<()> {
        let mut session = open_session(config, palette)?;
        let outcome = session.handle(SessionEvent::Remove(self.key.clone()))?;
        if !outcome.palette_changed {
            anyhow::bail!("No palette entry with key '{}'", self.key);
        }
        println!("Removed {}", self.key);
        Ok(())
    }
}

/// Move a palette entry
#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Key of the entry to move
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Key of the entry whose position it takes
    #[arg(value_name = "TARGET", required_unless_present = "end")]
    target: Option<String>,

    /// Move to the end of the palette
    #[arg(long, conflicts_with = "target")]
    end: bool,
}

impl MoveArgs {
    /// Execute move command
    pub fn execute(&self, config: &Config, palette: Option<&Path>) -> Result<()> {
        let mut session = open_session(config, palette)?;
        let source = DragToken::entry(self.source.clone());
        let target = match &self.target {
            Some(key) => DragToken::entry(key.clone()),
            None => DragToken::EndOfList,
        };

        session.handle(SessionEvent::DragStart(source))?;
        let outcome = session.handle(SessionEvent::DragEnd(Some(target)))?;

        if !outcome.palette_changed {
            anyhow::bail!("Could not move '{}': unknown key", self.source);
        }
        let position = session
            .palette()
            .index_of(&self.source)
            .map_or(0, |index| index + 1);
        println!("Moved {} to position {position}", self.source);
        Ok(())
    }
}
