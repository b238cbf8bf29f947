//! Event handling for one picker session.
//!
//! Events are processed one at a time and each runs to completion before the
//! next, so the palette never sees two interleaved mutations. Every event that
//! changes the palette results in exactly one full write to the store.

use anyhow::Result;
use tracing::{debug, info};

use super::drag::{DragReorderResolver, DragToken};
use super::sampler::{ScreenPos, ScreenSampler};
use super::staging::{InputOutcome, StagingController};
use super::store::PaletteStore;
use super::sync::{LoadedPalette, SyncController};
use crate::config::{HotkeyScheme, MissingStorePolicy, ModifierKey, SampleAction};
use crate::models::{InsertPosition, PaletteModel};

/// A discrete user or system event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Hex text typed into the hex field
    HexInput(String),
    /// RGB fields; `None` marks an empty field
    RgbInput(Option<i64>, Option<i64>, Option<i64>),
    /// HSL fields; `None` marks an empty field
    HslInput(Option<i64>, Option<i64>, Option<i64>),
    /// Name typed for the staging color
    NameInput(Option<String>),
    /// Screen position typed into the X/Y fields, then sampled
    PositionInput(ScreenPos),
    /// A neighborhood swatch was clicked
    PickNeighbor(usize),
    /// A modifier hotkey was pressed
    HotkeyPressed(ModifierKey),
    /// Add the staging color to the front of the palette
    AddStaging,
    /// Remove an entry by key
    Remove(String),
    /// A drag gesture started
    DragStart(DragToken),
    /// The drag gesture in progress ended, with or without a drop target
    DragEnd(Option<DragToken>),
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOutcome {
    /// The staging color or name changed
    pub staging_changed: bool,
    /// The palette changed and was written back
    pub palette_changed: bool,
}

impl EventOutcome {
    const NONE: Self = Self {
        staging_changed: false,
        palette_changed: false,
    };

    const fn staging(outcome: InputOutcome) -> Self {
        Self {
            staging_changed: outcome.is_applied(),
            palette_changed: false,
        }
    }

    const fn palette(changed: bool) -> Self {
        Self {
            staging_changed: false,
            palette_changed: changed,
        }
    }
}

/// Owns the palette, staging color, drag state and persistence for one session.
#[derive(Debug)]
pub struct PaletteSession<S, P> {
    palette: PaletteModel,
    staging: StagingController,
    drag: DragReorderResolver,
    sync: SyncController<S>,
    sampler: P,
    hotkeys: HotkeyScheme,
}

impl<S: PaletteStore, P: ScreenSampler> PaletteSession<S, P> {
    /// Opens a session, loading the palette from `store`.
    ///
    /// # Errors
    ///
    /// Fails if the store is corrupt, or if it is absent and `missing_store`
    /// is `Fail`.
    pub fn open(
        store: S,
        sampler: P,
        hotkeys: HotkeyScheme,
        missing_store: MissingStorePolicy,
    ) -> Result<Self> {
        let sync = SyncController::new(store);
        let palette = match sync.load()? {
            LoadedPalette::Stored(palette) => palette,
            LoadedPalette::Absent => match missing_store {
                MissingStorePolicy::CreateEmpty => {
                    info!("Starting with an empty palette");
                    PaletteModel::new()
                }
                MissingStorePolicy::Fail => anyhow::bail!("No stored palette found"),
            },
        };

        Ok(Self {
            palette,
            staging: StagingController::new(),
            drag: DragReorderResolver::new(),
            sync,
            sampler,
            hotkeys,
        })
    }

    /// Handles one event to completion.
    ///
    /// # Errors
    ///
    /// Returns an error only when a palette write fails. The in-memory palette
    /// keeps the change in that case.
    pub fn handle(&mut self, event: SessionEvent) -> Result<EventOutcome> {
        debug!(?event, "Handling event");
        let outcome = match event {
            SessionEvent::HexInput(text) => {
                EventOutcome::staging(self.staging.set_from_hex(&text))
            }
            SessionEvent::RgbInput(r, g, b) => {
                EventOutcome::staging(self.staging.set_from_rgb(r, g, b))
            }
            SessionEvent::HslInput(h, s, l) => {
                EventOutcome::staging(self.staging.set_from_hsl(h, s, l))
            }
            SessionEvent::NameInput(name) => {
                self.staging.set_name(name);
                EventOutcome::staging(InputOutcome::Applied)
            }
            SessionEvent::PositionInput(pos) => EventOutcome::staging(
                self.staging.set_from_sampled_position(&self.sampler, pos),
            ),
            SessionEvent::PickNeighbor(index) => {
                EventOutcome::staging(self.staging.pick_neighbor(index))
            }
            SessionEvent::HotkeyPressed(key) => match self.hotkeys.action_for(key) {
                Some(SampleAction::SampleUnderPointer) => {
                    EventOutcome::staging(self.staging.sample_under_pointer(&self.sampler))
                }
                Some(SampleAction::Resample) => {
                    EventOutcome::staging(self.staging.resample(&self.sampler))
                }
                None => EventOutcome::NONE,
            },
            SessionEvent::AddStaging => {
                let entry = self.staging.current_entry().clone();
                EventOutcome::palette(self.palette.merge_insert(entry, InsertPosition::Front))
            }
            SessionEvent::Remove(key) => {
                EventOutcome::palette(self.palette.remove(&key).is_some())
            }
            SessionEvent::DragStart(token) => {
                let loaded = self.drag.begin(token, &self.palette, &mut self.staging);
                EventOutcome {
                    staging_changed: loaded,
                    palette_changed: false,
                }
            }
            SessionEvent::DragEnd(target) => {
                let result = self.drag.end(target, &mut self.palette, &self.staging);
                EventOutcome::palette(result.palette_changed())
            }
        };

        if outcome.palette_changed {
            self.sync.persist(&self.palette)?;
        }
        Ok(outcome)
    }

    /// The current palette.
    #[must_use]
    pub const fn palette(&self) -> &PaletteModel {
        &self.palette
    }

    /// The staging controller.
    #[must_use]
    pub const fn staging(&self) -> &StagingController {
        &self.staging
    }

    /// Token of the drag gesture in progress, if any.
    #[must_use]
    pub const fn active_drag(&self) -> Option<&DragToken> {
        self.drag.active()
    }

    /// Persistence controller (for inspecting the store).
    #[must_use]
    pub const fn sync(&self) -> &SyncController<S> {
        &self.sync
    }
}
