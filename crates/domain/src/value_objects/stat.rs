//! Stat value object - the six base statistics shown on a character page.
//!
//! Stat names on the wire are the Korean strings content is authored with;
//! they double as the displayed label.

use serde::Serialize;

/// A base statistic with a fixed presentation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// 체력
    Health,
    /// 공격력
    AttackPower,
    /// 공격속도
    AttackSpeed,
    /// 사거리
    Range,
    /// 이동속도
    MoveSpeed,
    /// 체력재생
    HealthRegen,
}

impl StatKind {
    /// Presentation order.
    pub const ORDER: [StatKind; 6] = [
        Self::Health,
        Self::AttackPower,
        Self::AttackSpeed,
        Self::Range,
        Self::MoveSpeed,
        Self::HealthRegen,
    ];

    /// Key used in the stat record (and shown as the label).
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Health => "체력",
            Self::AttackPower => "공격력",
            Self::AttackSpeed => "공격속도",
            Self::Range => "사거리",
            Self::MoveSpeed => "이동속도",
            Self::HealthRegen => "체력재생",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|kind| kind.wire_name() == name)
    }

    pub fn style(self) -> StatStyle {
        match self {
            Self::Health => StatStyle::new("❤️", "#ff6b6b"),
            Self::AttackPower => StatStyle::new("⚔️", "#ffa502"),
            Self::AttackSpeed => StatStyle::new("⚡", "#ffdd59"),
            Self::Range => StatStyle::new("🎯", "#70a1ff"),
            Self::MoveSpeed => StatStyle::new("👟", "#7bed9f"),
            Self::HealthRegen => StatStyle::new("💚", "#2ed573"),
        }
    }
}

/// Icon and value color for a stat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl StatStyle {
    /// Used for stat names outside the fixed table.
    pub const GENERIC: StatStyle = StatStyle::new("📊", "#ffffff");

    pub const fn new(icon: &'static str, color: &'static str) -> Self {
        Self { icon, color }
    }
}

/// Looks up the style for a stat by its wire name, falling back to
/// [`StatStyle::GENERIC`] for names outside the table.
pub fn stat_style(name: &str) -> StatStyle {
    StatKind::from_wire_name(name)
        .map(StatKind::style)
        .unwrap_or(StatStyle::GENERIC)
}
