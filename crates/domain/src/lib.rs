extern crate self as alice_domain;

pub mod aggregates;
pub mod common;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{CharacterView, PortraitPaths, SkillCard, StatLine};

pub use error::DomainError;

pub use ids::CharacterId;

// Re-export value objects
pub use value_objects::{
    parse_color_markup, skill_type_label, stat_style, MarkupText, PaletteColor, PortraitTemplate,
    SkillKey, StatKind, StatStyle, StyledSegment, DIRECTIVE_MARKER, STAT_KEY,
};
