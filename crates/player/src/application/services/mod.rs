//! Application services
//!
//! Use cases for the character detail page. Services depend on the
//! [`ApiPort`](crate::ports::outbound::ApiPort) trait, not on the HTTP adapter.

pub mod character_detail_service;
pub mod character_view_assembler;

pub use character_detail_service::{
    CharacterDetailService, CHARACTER_INFO_PATH, SKILL_LINKS_PATH,
};
pub use character_view_assembler::{assemble_character_view, UNNAMED_SKILL};
