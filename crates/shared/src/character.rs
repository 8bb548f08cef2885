//! Character info payload
//!
//! ```json
//! {
//!   "skills": {
//!     "stat": { "name": "Alice", "체력": 1200, "사거리": "550" },
//!     "0":    { "id": 101, "name": "Focus", "description": "&eCalm\\nmind" },
//!     "1":    { "id": "slash", "name": "Slash" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use alice_domain::{SkillKey, STAT_KEY};

// =============================================================================
// Response
// =============================================================================

/// Body of `GET /api/character-info?id=<id>`
///
/// Entries stay as raw JSON so each record can be decoded (or skipped) on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterInfoResponse {
    /// Bundle keyed by skill key (`stat`, `0`, `baseattack`, `1`-`4`)
    #[serde(default)]
    pub skills: Option<BTreeMap<String, serde_json::Value>>,
}

impl CharacterInfoResponse {
    /// Raw entry for `key`; `None` when absent or `null`
    pub fn entry(&self, key: &str) -> Option<&serde_json::Value> {
        self.skills
            .as_ref()
            .and_then(|skills| skills.get(key))
            .filter(|value| !value.is_null())
    }

    /// Whether the bundle holds the stat record or at least one known skill.
    ///
    /// Keys outside the known set do not count.
    pub fn has_known_entries(&self) -> bool {
        self.entry(STAT_KEY).is_some()
            || SkillKey::ORDER
                .iter()
                .any(|key| self.entry(key.as_str()).is_some())
    }
}

// =============================================================================
// Records
// =============================================================================

/// Decodes an optional field, treating a value of the wrong type as absent,
/// so one bad field never drops the rest of its record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// The `stat` record: display name plus stat values keyed by stat name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatRecordData {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Every other field; known stat names are picked out by the player
    #[serde(flatten)]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl StatRecordData {
    /// Value of `stat` formatted for display; `None` when absent or `null`.
    ///
    /// Strings are shown as-is and whole floats without a fraction
    /// (`1200.0` → `1200`). Everything else keeps its JSON form.
    pub fn display_value(&self, stat: &str) -> Option<String> {
        match self.values.get(stat)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(format_number(n)),
            other => Some(other.to_string()),
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // f64's Display drops a zero fraction, unlike serde_json's formatter
        Some(f) if f.is_finite() => f.to_string(),
        _ => n.to_string(),
    }
}

/// A skill record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillRecordData {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<SkillIdData>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Skill identifier; content uses both numbers and strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillIdData {
    Number(serde_json::Number),
    Text(String),
}

impl SkillIdData {
    /// Key into the skill-link map; `None` for an empty string
    pub fn link_key(&self) -> Option<String> {
        match self {
            SkillIdData::Number(n) => Some(n.to_string()),
            SkillIdData::Text(s) if s.is_empty() => None,
            SkillIdData::Text(s) => Some(s.clone()),
        }
    }
}
