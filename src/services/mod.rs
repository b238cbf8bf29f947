//! Service layer for palette editing.
//!
//! This module contains the controllers that sit between raw user input, the
//! palette model, and the external collaborators (screen sampler and store).

pub mod drag;
pub mod sampler;
pub mod session;
pub mod staging;
pub mod store;
pub mod sync;

// Re-export commonly used types
pub use drag::{DragOutcome, DragReorderResolver, DragToken};
pub use sampler::{ColorCapture, ScreenPos, ScreenSampler, UnavailableSampler};
pub use session::{EventOutcome, PaletteSession, SessionEvent};
pub use staging::{InputOutcome, StagingController};
pub use store::{ColorsDocument, JsonFileStore, PaletteStore};
pub use sync::{LoadedPalette, SyncController};
