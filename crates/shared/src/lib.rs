//! Alice Protocol - Wire types for the character API
//!
//! This crate contains the response bodies the player fetches:
//! - `GET /api/character-info?id=<id>` → [`CharacterInfoResponse`]
//! - `GET /api/skill-links` → [`SkillLinksResponse`]
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Lenient decoding** - Records are kept as raw JSON until the player
//!    decodes them one by one, so a single malformed record never rejects
//!    the whole payload

pub mod character;
pub mod skill_links;

pub use character::{CharacterInfoResponse, SkillIdData, SkillRecordData, StatRecordData};
pub use skill_links::{SkillLinkMap, SkillLinksResponse};
