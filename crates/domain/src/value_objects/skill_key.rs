//! Skill keys partitioning a character's data bundle.
//!
//! The bundle maps `"stat"` to the base statistics and each skill key to one
//! skill record. Skills are always shown in [`SkillKey::ORDER`], whatever order
//! the bundle lists them in.

use serde::Serialize;
use std::borrow::Cow;

/// Bundle key of the base-statistics record. Never a skill.
pub const STAT_KEY: &str = "stat";

/// A skill slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKey {
    /// `"0"`
    Passive,
    /// `"baseattack"`
    BaseAttack,
    /// `"1"`
    Skill1,
    /// `"2"`
    Skill2,
    /// `"3"`
    Skill3,
    /// `"4"`
    Ultimate,
}

impl SkillKey {
    /// Presentation order.
    pub const ORDER: [SkillKey; 6] = [
        Self::Passive,
        Self::BaseAttack,
        Self::Skill1,
        Self::Skill2,
        Self::Skill3,
        Self::Ultimate,
    ];

    /// Key as it appears in the bundle.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passive => "0",
            Self::BaseAttack => "baseattack",
            Self::Skill1 => "1",
            Self::Skill2 => "2",
            Self::Skill3 => "3",
            Self::Ultimate => "4",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|k| k.as_str() == key)
    }

    pub fn type_label(self) -> &'static str {
        match self {
            Self::Passive => "Passive",
            Self::BaseAttack => "Basic Attack",
            Self::Skill1 => "Skill 1",
            Self::Skill2 => "Skill 2",
            Self::Skill3 => "Skill 3",
            Self::Ultimate => "Ultimate",
        }
    }
}

/// Human-readable label for a bundle key; `Skill <key>` for keys outside the table.
pub fn skill_type_label(key: &str) -> Cow<'static, str> {
    match SkillKey::from_key(key) {
        Some(skill) => Cow::Borrowed(skill.type_label()),
        None => Cow::Owned(format!("Skill {}", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        let keys: Vec<&str> = SkillKey::ORDER.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["0", "baseattack", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_stat_is_not_a_skill() {
        assert_eq!(SkillKey::from_key(STAT_KEY), None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SkillKey::from_key("baseattack"), Some(SkillKey::BaseAttack));
        assert_eq!(SkillKey::from_key("4"), Some(SkillKey::Ultimate));
        assert_eq!(SkillKey::from_key("5"), None);
        assert_eq!(SkillKey::from_key("BaseAttack"), None);
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(skill_type_label("0"), "Passive");
        assert_eq!(skill_type_label("baseattack"), "Basic Attack");
        assert_eq!(skill_type_label("3"), "Skill 3");
        assert_eq!(skill_type_label("4"), "Ultimate");
    }

    #[test]
    fn test_unknown_key_label() {
        assert_eq!(skill_type_label("5"), "Skill 5");
        assert_eq!(skill_type_label("dash"), "Skill dash");
    }
}
