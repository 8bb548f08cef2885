//! Skill link map payload

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Skill identifier → navigation path
pub type SkillLinkMap = HashMap<String, String>;

/// Body of `GET /api/skill-links`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLinksResponse {
    #[serde(default)]
    pub skill_links: Option<SkillLinkMap>,
}

impl SkillLinksResponse {
    /// The link map; empty when the field is missing or `null`
    pub fn into_links(self) -> SkillLinkMap {
        self.skill_links.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_camel_case_field() {
        let response: SkillLinksResponse = serde_json::from_value(json!({
            "skillLinks": { "101": "/skills/focus", "slash": "/skills/slash" }
        }))
        .unwrap();

        let links = response.into_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links.get("101").map(String::as_str), Some("/skills/focus"));
    }

    #[test]
    fn test_missing_field_is_empty() {
        let response: SkillLinksResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_links().is_empty());

        let response: SkillLinksResponse =
            serde_json::from_value(json!({ "skillLinks": null })).unwrap();
        assert!(response.into_links().is_empty());
    }
}
