//! Value objects - Immutable objects defined by their attributes

mod color_markup;
mod palette;
mod portrait;
mod skill_key;
mod stat;

// Inline color markup (`&a` directives, `\n` breaks)
pub use color_markup::{parse_color_markup, MarkupText, StyledSegment, DIRECTIVE_MARKER};

pub use palette::PaletteColor;

pub use portrait::PortraitTemplate;

// Fixed presentation tables
pub use skill_key::{skill_type_label, SkillKey, STAT_KEY};
pub use stat::{stat_style, StatKind, StatStyle};
