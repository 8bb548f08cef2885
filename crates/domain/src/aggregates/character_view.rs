//! Character view - everything a renderer needs to draw a character page
//!
//! Lines and cards are already in presentation order and all fallbacks are
//! already applied, so a renderer iterates them without further decisions.

use serde::Serialize;

use crate::value_objects::{MarkupText, PortraitTemplate, StatStyle};
use alice_domain::CharacterId;

/// Primary and fallback portrait paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortraitPaths {
    primary: String,
    fallback: String,
}

impl PortraitPaths {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    /// Paths for `id` under `template`; the fallback is the placeholder portrait.
    pub fn for_character(template: &PortraitTemplate, id: CharacterId) -> Self {
        Self::new(template.path_for(id), template.fallback_path())
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

/// One row of the stats grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    name: String,
    icon: &'static str,
    color: &'static str,
    value: String,
}

impl StatLine {
    pub fn new(name: impl Into<String>, style: StatStyle, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: style.icon,
            color: style.color,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Color of the value, as `#rrggbb`
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Value formatted for display
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One skill card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCard {
    type_label: String,
    name: String,
    description: MarkupText,
    #[serde(skip_serializing_if = "Option::is_none")]
    navigation_path: Option<String>,
}

impl SkillCard {
    pub fn new(
        type_label: impl Into<String>,
        name: impl Into<String>,
        description: MarkupText,
        navigation_path: Option<String>,
    ) -> Self {
        Self {
            type_label: type_label.into(),
            name: name.into(),
            description,
            navigation_path,
        }
    }

    /// Slot label, e.g. "Passive" or "Ultimate"
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &MarkupText {
        &self.description
    }

    /// Page this skill links to, if the link map has one for its id
    pub fn navigation_path(&self) -> Option<&str> {
        self.navigation_path.as_deref()
    }

    pub fn is_navigable(&self) -> bool {
        self.navigation_path.is_some()
    }
}

/// Render-ready character page
///
/// # Example
///
/// ```
/// use alice_domain::{CharacterId, CharacterView, PortraitPaths, PortraitTemplate};
///
/// let id = CharacterId::new(7);
/// let view = CharacterView::new(
///     id,
///     "Alice",
///     PortraitPaths::for_character(&PortraitTemplate::default(), id),
///     Vec::new(),
///     Vec::new(),
/// );
///
/// assert_eq!(view.display_name(), "Alice");
/// assert_eq!(view.portrait().primary(), "/Resource/character/7.png");
/// assert_eq!(view.portrait().fallback(), "/Resource/character/0.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    character_id: CharacterId,
    display_name: String,
    portrait: PortraitPaths,
    stats: Vec<StatLine>,
    skills: Vec<SkillCard>,
}

impl CharacterView {
    pub fn new(
        character_id: CharacterId,
        display_name: impl Into<String>,
        portrait: PortraitPaths,
        stats: Vec<StatLine>,
        skills: Vec<SkillCard>,
    ) -> Self {
        Self {
            character_id,
            display_name: display_name.into(),
            portrait,
            stats,
            skills,
        }
    }

    /// Placeholder name for a character whose stat record has none
    pub fn placeholder_name(id: CharacterId) -> String {
        format!("Character #{}", id)
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn portrait(&self) -> &PortraitPaths {
        &self.portrait
    }

    pub fn stats(&self) -> &[StatLine] {
        &self.stats
    }

    pub fn skills(&self) -> &[SkillCard] {
        &self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{parse_color_markup, stat_style};

    #[test]
    fn test_placeholder_name() {
        assert_eq!(
            CharacterView::placeholder_name(CharacterId::new(42)),
            "Character #42"
        );
    }

    #[test]
    fn test_stat_line_takes_style() {
        let line = StatLine::new("체력", stat_style("체력"), "1200");
        assert_eq!(line.icon(), "❤️");
        assert_eq!(line.color(), "#ff6b6b");
        assert_eq!(line.value(), "1200");
    }

    #[test]
    fn test_skill_card_navigation() {
        let card = SkillCard::new("Skill 1", "Slash", MarkupText::default(), None);
        assert!(!card.is_navigable());

        let linked = SkillCard::new(
            "Skill 1",
            "Slash",
            MarkupText::default(),
            Some("/skills/slash".to_string()),
        );
        assert_eq!(linked.navigation_path(), Some("/skills/slash"));
    }

    #[test]
    fn test_serializes_view() {
        let id = CharacterId::new(1);
        let view = CharacterView::new(
            id,
            "Alice",
            PortraitPaths::for_character(&PortraitTemplate::default(), id),
            vec![StatLine::new("사거리", stat_style("사거리"), "550")],
            vec![SkillCard::new(
                "Passive",
                "Focus",
                parse_color_markup("&eA"),
                None,
            )],
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "character_id": 1,
                "display_name": "Alice",
                "portrait": {
                    "primary": "/Resource/character/1.png",
                    "fallback": "/Resource/character/0.png"
                },
                "stats": [
                    { "name": "사거리", "icon": "🎯", "color": "#70a1ff", "value": "550" }
                ],
                "skills": [
                    {
                        "type_label": "Passive",
                        "name": "Focus",
                        "description": [
                            { "kind": "text", "color": "#FFFF55", "content": "A" }
                        ]
                    }
                ]
            })
        );
    }
}
