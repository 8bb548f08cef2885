//! Portrait resource convention: `<base>/<id>.<ext>`.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Template turning a character id into a portrait path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortraitTemplate {
    base: String,
    extension: String,
}

impl PortraitTemplate {
    pub const DEFAULT_BASE: &'static str = "/Resource/character";
    pub const DEFAULT_EXTENSION: &'static str = "png";

    /// Trailing slashes on `base` and a leading dot on `extension` are dropped.
    pub fn new(base: impl Into<String>, extension: impl Into<String>) -> Self {
        let base = base.into();
        let extension = extension.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn path_for(&self, id: CharacterId) -> String {
        format!("{}/{}.{}", self.base, id, self.extension)
    }

    /// Path shown when the character's own portrait fails to load.
    pub fn fallback_path(&self) -> String {
        self.path_for(CharacterId::PLACEHOLDER)
    }
}

impl Default for PortraitTemplate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE, Self::DEFAULT_EXTENSION)
    }
}
