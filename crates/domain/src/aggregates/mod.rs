//! Aggregate roots - domain objects that own their related data
//!
//! Aggregates here are read models: built once per page load from fetched
//! payloads, then handed to a renderer and dropped. They expose accessors
//! only, so nothing can change them after construction.

pub mod character_view;

pub use character_view::{CharacterView, PortraitPaths, SkillCard, StatLine};
