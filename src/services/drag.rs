//! Drag-and-drop reordering of the palette.
//!
//! A gesture starts on a token and ends on an optional drop token. Besides real
//! entry keys there are two slots with no palette entry behind them: the
//! staging slot (drag source only) and the end-of-list slot (drop target only).

use tracing::debug;

use super::staging::StagingController;
use crate::models::{InsertPosition, PaletteModel};

/// Identifies a drag source or drop target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DragToken {
    /// The staging color, not yet part of the palette
    Staging,
    /// The empty slot after the last entry
    EndOfList,
    /// A palette entry, by key
    Entry(String),
}

impl DragToken {
    /// Token for the entry with `key`.
    pub fn entry(key: impl Into<String>) -> Self {
        Self::Entry(key.into())
    }
}

/// What a finished gesture did to the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dropped outside any target
    Cancelled,
    /// Source or target could not be resolved; no move happened
    Ignored {
        /// The staging entry was inserted before resolution failed
        committed_staging: bool,
    },
    /// An entry was moved
    Moved {
        /// The staging entry was inserted as part of this gesture
        committed_staging: bool,
        /// Index before the move
        from: usize,
        /// Index after the move
        to: usize,
    },
}

impl DragOutcome {
    /// Returns true if the palette was mutated.
    #[must_use]
    pub const fn palette_changed(&self) -> bool {
        match self {
            Self::Cancelled => false,
            Self::Ignored { committed_staging } => *committed_staging,
            Self::Moved { .. } => true,
        }
    }
}

/// Tracks one gesture at a time and turns it into palette operations.
#[derive(Debug, Clone, Default)]
pub struct DragReorderResolver {
    active: Option<DragToken>,
}

impl DragReorderResolver {
    /// Creates a resolver with no gesture in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Starts a gesture on `token`.
    ///
    /// Dragging an existing entry loads its color and name into staging so it
    /// can be re-edited. Returns true if an entry was loaded.
    pub fn begin(
        &mut self,
        token: DragToken,
        palette: &PaletteModel,
        staging: &mut StagingController,
    ) -> bool {
        let loaded = match &token {
            DragToken::Entry(key) => match palette.get(key) {
                Some(entry) => {
                    staging.load_entry(entry);
                    true
                }
                None => {
                    debug!(key = %key, "Drag started on unknown entry");
                    false
                }
            },
            DragToken::Staging | DragToken::EndOfList => false,
        };
        self.active = Some(token);
        loaded
    }

    /// Finishes the gesture in progress by dropping it on `target`.
    ///
    /// The source is the token recorded by `begin`; a drop with no gesture in
    /// progress is ignored. A staging source is first committed at the front of
    /// the palette and then treated as its derived key. An end-of-list target
    /// stands for the current last entry. If either side does not resolve the
    /// move is skipped.
    pub fn end(
        &mut self,
        target: Option<DragToken>,
        palette: &mut PaletteModel,
        staging: &StagingController,
    ) -> DragOutcome {
        let Some(source) = self.active.take() else {
            debug!("Drop without a drag in progress");
            return DragOutcome::Ignored {
                committed_staging: false,
            };
        };

        let Some(target) = target else {
            return DragOutcome::Cancelled;
        };

        let mut committed_staging = false;
        let source_key = match source {
            DragToken::Staging => {
                let entry = staging.current_entry().clone();
                let key = entry.key().to_string();
                committed_staging = palette.merge_insert(entry, InsertPosition::Front);
                Some(key)
            }
            DragToken::Entry(key) => Some(key),
            DragToken::EndOfList => None,
        };

        let target_key = match target {
            DragToken::EndOfList => palette.last().map(|e| e.key().to_string()),
            DragToken::Entry(key) => Some(key),
            DragToken::Staging => None,
        };

        let moved = source_key
            .zip(target_key)
            .and_then(|(source, target)| palette.move_to_index(&source, &target));

        match moved {
            Some((from, to)) => DragOutcome::Moved {
                committed_staging,
                from,
                to,
            },
            None => {
                debug!("Drag gesture did not resolve to a move");
                DragOutcome::Ignored { committed_staging }
            }
        }
    }

    /// Token of the gesture in progress.
    #[must_use]
    pub const fn active(&self) -> Option<&DragToken> {
        self.active.as_ref()
    }
}
