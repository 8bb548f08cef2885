//! Common utility functions shared across the Alice crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod html;

pub use html::{escape_html, push_escaped_char};
