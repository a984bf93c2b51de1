//! Class membership for spells.
//!
//! The index is built once per catalog run from the provider's per-class
//! spell lists. It may reference spell ids whose details could not be
//! fetched; lookups against it are membership tests only and never fail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::spell::Spell;
use crate::value_objects::AssetUrls;

/// Mapping from class identifier to the spell ids that belong to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ClassSpellIndex {
    classes: BTreeMap<String, Vec<String>>,
}

impl ClassSpellIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spell list for a class, replacing any previous list.
    pub fn insert(&mut self, class_id: impl Into<String>, spell_ids: Vec<String>) {
        self.classes.insert(class_id.into(), spell_ids);
    }

    /// Spell ids for a class; an unknown class yields an empty slice.
    pub fn spells_for(&self, class_id: &str) -> &[String] {
        self.classes
            .get(class_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `spell_id` is listed under `class_id`.
    pub fn contains(&self, class_id: &str, spell_id: &str) -> bool {
        self.spells_for(class_id).iter().any(|id| id == spell_id)
    }

    /// How many of a class's spell ids resolve to a spell in `spells`.
    ///
    /// Ids whose details failed to load are simply not counted.
    pub fn resolved_count(&self, class_id: &str, spells: &[Spell]) -> usize {
        let listed = self.spells_for(class_id);
        spells
            .iter()
            .filter(|spell| listed.iter().any(|id| *id == spell.id))
            .count()
    }

    /// Class ids in ascending order.
    pub fn class_ids(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes
            .iter()
            .map(|(class, ids)| (class.as_str(), ids.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for ClassSpellIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}

/// Display record for a spellcasting class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub id: String,
    pub name: String,
    /// Class artwork URL, derived from the id
    pub image: String,
}

impl ClassInfo {
    /// Build the display record for a class id.
    ///
    /// The provider only serves identifiers, so the id doubles as the name.
    pub fn from_id(class_id: &str, assets: &AssetUrls) -> Self {
        Self {
            id: class_id.to_string(),
            name: class_id.to_string(),
            image: assets.class_image(class_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ClassSpellIndex {
        let mut index = ClassSpellIndex::new();
        index.insert("wizard", vec!["fireball".into(), "shield".into()]);
        index.insert("cleric", vec!["heal".into(), "shield".into()]);
        index
    }

    #[test]
    fn membership_by_class() {
        let index = index();
        assert!(index.contains("wizard", "fireball"));
        assert!(index.contains("cleric", "shield"));
        assert!(!index.contains("cleric", "fireball"));
    }

    #[test]
    fn unknown_class_is_empty() {
        let index = index();
        assert!(index.spells_for("bard").is_empty());
        assert!(!index.contains("bard", "shield"));
    }

    #[test]
    fn resolved_count_skips_dangling_ids() {
        let spells = vec![Spell::new("fireball", "Fireball", 3)];
        let index = index();
        assert_eq!(index.resolved_count("wizard", &spells), 1);
        assert_eq!(index.resolved_count("cleric", &spells), 0);
        assert_eq!(index.resolved_count("bard", &spells), 0);
    }

    #[test]
    fn class_ids_are_sorted() {
        let index = index();
        let ids: Vec<_> = index.class_ids().collect();
        assert_eq!(ids, vec!["cleric", "wizard"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let value = serde_json::to_value(index()).unwrap();
        assert_eq!(value["wizard"][1], "shield");

        let parsed: ClassSpellIndex =
            serde_json::from_str(r#"{"druid": ["thorn-whip"]}"#).unwrap();
        assert_eq!(parsed.spells_for("druid"), &["thorn-whip".to_string()]);
    }

    #[test]
    fn class_info_uses_derived_image() {
        let assets = AssetUrls::new("https://example.test/v1/");
        let info = ClassInfo::from_id("wizard", &assets);
        assert_eq!(info.name, "wizard");
        assert_eq!(info.image, "https://example.test/v1/assets/classes/wizard");
    }
}
