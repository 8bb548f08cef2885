//! Character Detail Service - loads one character page
//!
//! The character payload and the skill-link map are fetched concurrently and
//! joined before assembly. The two fetches fail differently:
//! - Character payload: any failure means the character is not found.
//! - Skill links: any failure degrades to an empty map, so the page renders
//!   with no clickable skills.

use futures_util::future::join;

use alice_domain::{CharacterId, CharacterView, PortraitTemplate};
use alice_shared::{CharacterInfoResponse, SkillLinkMap, SkillLinksResponse};

use super::character_view_assembler::assemble_character_view;
use crate::application::CharacterPageError;
use crate::ports::outbound::ApiPort;

/// Character payload endpoint; takes `?id=<id>`
pub const CHARACTER_INFO_PATH: &str = "/api/character-info";

/// Skill-link map endpoint
pub const SKILL_LINKS_PATH: &str = "/api/skill-links";

/// Character detail service
///
/// Generic over [`ApiPort`] so tests can drive it with a mocked raw port.
#[derive(Clone)]
pub struct CharacterDetailService<A: ApiPort> {
    api: A,
    portraits: PortraitTemplate,
}

impl<A: ApiPort> CharacterDetailService<A> {
    pub fn new(api: A, portraits: PortraitTemplate) -> Self {
        Self { api, portraits }
    }

    /// Fetch the character payload; `None` on any failure.
    pub async fn fetch_character_info(
        &self,
        character_id: CharacterId,
    ) -> Option<CharacterInfoResponse> {
        let path = format!("{}?id={}", CHARACTER_INFO_PATH, character_id);
        match self.api.get_optional::<CharacterInfoResponse>(&path).await {
            Ok(Some(info)) => Some(info),
            Ok(None) => {
                tracing::info!(%character_id, "Character info endpoint returned 404");
                None
            }
            Err(e) => {
                tracing::warn!(%character_id, "Failed to fetch character info: {}", e);
                None
            }
        }
    }

    /// Fetch the skill-link map; empty on any failure.
    pub async fn fetch_skill_links(&self) -> SkillLinkMap {
        match self.api.get::<SkillLinksResponse>(SKILL_LINKS_PATH).await {
            Ok(response) => response.into_links(),
            Err(e) => {
                tracing::warn!("Failed to fetch skill links, continuing without: {}", e);
                SkillLinkMap::new()
            }
        }
    }

    /// Fetch both payloads concurrently and assemble the view.
    pub async fn load(&self, character_id: CharacterId) -> Result<CharacterView, CharacterPageError> {
        let (info, links) = join(
            self.fetch_character_info(character_id),
            self.fetch_skill_links(),
        )
        .await;

        tracing::debug!(
            %character_id,
            found = info.is_some(),
            links = links.len(),
            "Character payloads fetched"
        );

        assemble_character_view(character_id, info.as_ref(), &links, &self.portraits)
    }
}
