//! Swatchbook Library
//!
//! This library provides the palette engine behind the Swatchbook color picker:
//! exact RGB / hex / HSL conversions, identity keys for palette entries, the
//! ordered palette model, the staging color, drag-and-drop reordering, and
//! persistence of the palette to a JSON store.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
