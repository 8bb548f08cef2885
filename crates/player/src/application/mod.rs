//! Application layer - use cases for the character detail page
//!
//! Services depend on port traits, not on the HTTP adapter.

pub mod api;
pub mod error;
pub mod services;

pub use error::CharacterPageError;
