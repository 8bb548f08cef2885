//! Character View Assembler - merges the two fetched payloads into a view
//!
//! Ordering and fallbacks are fixed:
//! - Stats follow [`StatKind::ORDER`]; a stat is shown only when the stat
//!   record carries a value for it.
//! - Skills follow [`SkillKey::ORDER`]; absent keys are skipped and keys
//!   outside the order (including `stat`) are never shown.
//! - Missing names fall back to placeholders, missing descriptions to empty
//!   text, and missing links to no navigation. A field of the wrong type
//!   counts as missing.
//!
//! Once the payload passes the presence check nothing here can fail.

use serde::Deserialize;

use alice_domain::{
    parse_color_markup, skill_type_label, stat_style, CharacterId, CharacterView, PortraitPaths,
    PortraitTemplate, SkillCard, SkillKey, StatKind, StatLine, STAT_KEY,
};
use alice_shared::{CharacterInfoResponse, SkillLinkMap, SkillRecordData, StatRecordData};

use crate::application::CharacterPageError;

/// Name shown for a skill record without one
pub const UNNAMED_SKILL: &str = "<unnamed>";

/// Build the view for `character_id` from the character payload and the link map.
///
/// Fails with `NotFound` when `raw` is absent or holds no known entries.
pub fn assemble_character_view(
    character_id: CharacterId,
    raw: Option<&CharacterInfoResponse>,
    links: &SkillLinkMap,
    portraits: &PortraitTemplate,
) -> Result<CharacterView, CharacterPageError> {
    let raw = match raw {
        Some(raw) if raw.has_known_entries() => raw,
        _ => return Err(CharacterPageError::not_found(character_id)),
    };

    let stat_record = raw
        .entry(STAT_KEY)
        .and_then(|value| decode_record::<StatRecordData>(STAT_KEY, value));

    let display_name = stat_record
        .as_ref()
        .and_then(|record| record.name.as_deref())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| CharacterView::placeholder_name(character_id));

    let stats = stat_record
        .as_ref()
        .map(build_stat_lines)
        .unwrap_or_default();

    let skills = SkillKey::ORDER
        .iter()
        .filter_map(|key| {
            let value = raw.entry(key.as_str())?;
            let record = decode_record::<SkillRecordData>(key.as_str(), value)?;
            Some(build_skill_card(*key, record, links))
        })
        .collect();

    Ok(CharacterView::new(
        character_id,
        display_name,
        PortraitPaths::for_character(portraits, character_id),
        stats,
        skills,
    ))
}

fn build_stat_lines(record: &StatRecordData) -> Vec<StatLine> {
    StatKind::ORDER
        .iter()
        .filter_map(|kind| {
            let name = kind.wire_name();
            record
                .display_value(name)
                .map(|value| StatLine::new(name, stat_style(name), value))
        })
        .collect()
}

fn build_skill_card(key: SkillKey, record: SkillRecordData, links: &SkillLinkMap) -> SkillCard {
    let navigation_path = record
        .id
        .as_ref()
        .and_then(|id| id.link_key())
        .and_then(|link_key| links.get(&link_key))
        .filter(|path| !path.is_empty())
        .cloned();

    let name = record
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNNAMED_SKILL.to_string());

    let description = parse_color_markup(record.description.as_deref().unwrap_or_default());

    SkillCard::new(
        skill_type_label(key.as_str()),
        name,
        description,
        navigation_path,
    )
}

/// Decode one bundle record.
///
/// Fields decode independently, so only an entry that is not an object is
/// skipped (and logged).
fn decode_record<'a, T: Deserialize<'a>>(key: &str, value: &'a serde_json::Value) -> Option<T> {
    if !value.is_object() {
        tracing::warn!(key, "Skipping character record that is not an object");
        return None;
    }
    match T::deserialize(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(key, "Skipping undecodable character record: {}", e);
            None
        }
    }
}
