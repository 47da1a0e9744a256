//! # VertexKit Core
//!
//! Core types, errors, and constants shared across the VertexKit workspace.
//! Holds nothing that depends on geometry or interaction state, so the
//! settings crate and the designer crate can both build on it.

pub mod color;
pub mod constants;
pub mod error;

pub use color::{Color, ColorParseError};
pub use constants::clamp_ndc;
pub use error::{Error, Result, StorageError};
