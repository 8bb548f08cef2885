//! Character detail route
//!
//! The page path ends in the character id: `/character/12` → `12`.

use alice_domain::{CharacterId, CharacterView};

use crate::application::services::CharacterDetailService;
use crate::application::CharacterPageError;
use crate::ports::outbound::ApiPort;

/// Extract the character id from a page path.
///
/// Query and fragment are ignored, as are empty segments, so a trailing slash
/// still resolves to the last real segment.
pub fn character_id_from_path(path: &str) -> Result<CharacterId, CharacterPageError> {
    let path = path.split(['?', '#']).next().unwrap_or_default();

    // Parse path segments, filtering out empty strings
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Err(CharacterPageError::InvalidIdentifier(
            "page path has no character id".to_string(),
        )),
        [.., last] => last
            .parse::<CharacterId>()
            .map_err(CharacterPageError::invalid_identifier),
    }
}

/// Load the page at `path`. An invalid id ends the load before any fetch.
pub async fn load_character_page<A: ApiPort>(
    service: &CharacterDetailService<A>,
    path: &str,
) -> Result<CharacterView, CharacterPageError> {
    let character_id = character_id_from_path(path).inspect_err(|e| {
        tracing::info!(path, "Rejected character page path: {}", e);
    })?;

    tracing::debug!(%character_id, "Loading character page");
    service.load(character_id).await
}
