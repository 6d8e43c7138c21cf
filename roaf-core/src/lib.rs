//! Core types for the ROAF waste pickup calendar.

/// Shared error type for provider and frontend crates.
pub mod error;
/// Domain model for waste fractions and pickup records.
pub mod model;

pub use error::*;
pub use model::*;
