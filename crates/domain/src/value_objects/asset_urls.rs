//! Asset URL derivation for class artwork and spell icons.

use serde::{Deserialize, Serialize};

/// Derives asset URLs from a base location and an identifier.
///
/// The same rule serves classes and spells. No existence check is made; a
/// missing image is the display layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `{base}/assets/classes/{class_id}`
    pub fn class_image(&self, class_id: &str) -> String {
        format!("{}/assets/classes/{}", self.base, class_id)
    }

    /// `{base}/assets/spells/{spell_id}`
    pub fn spell_icon(&self, spell_id: &str) -> String {
        format!("{}/assets/spells/{}", self.base, spell_id)
    }
}
