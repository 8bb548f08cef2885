//! Alice Player crate.
//!
//! Loads one character detail page: parses the character id from the page
//! path, fetches the character payload and the skill-link map concurrently,
//! assembles a [`CharacterView`](alice_domain::CharacterView), and renders it.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;
