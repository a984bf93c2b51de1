//! Spell entity for the catalog.
//!
//! Mirrors the record served by the remote spell provider. The icon is not
//! part of the provider's detail record; it is derived from the spell id and
//! attached after fetching (see [`crate::AssetUrls`]).

use serde::{Deserialize, Deserializer, Serialize};

use crate::common::none_if_placeholder;

/// A spell record. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    /// Unique identifier (slug) for this spell
    pub id: String,
    /// Display name of the spell
    pub name: String,
    /// Link to the spell's detail page
    #[serde(default)]
    pub url: String,
    /// Icon URL, derived from the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Spell level (cantrip = 0)
    pub level: u8,
    /// Whether the spell can be cast using a higher-level slot
    #[serde(default)]
    pub upcast: bool,
    /// Casting time as displayed (e.g. "1 action")
    #[serde(default)]
    pub action: String,
    /// Duration as displayed
    #[serde(default)]
    pub duration: String,
    /// Range as displayed
    #[serde(default)]
    pub range: String,
    /// Attack/save type; the provider sends "-" when there is none
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_placeholder",
        skip_serializing_if = "Option::is_none"
    )]
    pub spell_type: Option<String>,
    /// Damage entries in the order received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<Vec<Damage>>,
}

/// One damage component of a spell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    /// Dice expression (e.g. "8d6")
    pub dice: String,
    /// Damage type label (e.g. "fire")
    pub damage_type: String,
}

impl Damage {
    pub fn new(dice: impl Into<String>, damage_type: impl Into<String>) -> Self {
        Self {
            dice: dice.into(),
            damage_type: damage_type.into(),
        }
    }
}

impl Spell {
    /// Create a spell with the required fields; display fields start empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: String::new(),
            icon: None,
            level,
            upcast: false,
            action: String::new(),
            duration: String::new(),
            range: String::new(),
            spell_type: None,
            damage: None,
        }
    }

    /// Attach damage entries.
    pub fn with_damage(mut self, damage: Vec<Damage>) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Mark the spell as upcastable.
    pub fn with_upcast(mut self, upcast: bool) -> Self {
        self.upcast = upcast;
        self
    }

    /// Replace the icon reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Damage entries, treating an absent list as empty.
    pub fn damage_entries(&self) -> &[Damage] {
        self.damage.as_deref().unwrap_or(&[])
    }

    pub fn damage_count(&self) -> usize {
        self.damage_entries().len()
    }

    pub fn has_damage(&self) -> bool {
        !self.damage_entries().is_empty()
    }

    /// Whether any damage entry carries exactly this type label.
    pub fn deals_damage_type(&self, damage_type: &str) -> bool {
        self.damage_entries()
            .iter()
            .any(|d| d.damage_type == damage_type)
    }

    /// Display label for the spell's level.
    pub fn level_label(&self) -> String {
        level_label(self.level)
    }
}

/// Display label for a spell level ("Cantrip" for level 0).
pub fn level_label(level: u8) -> String {
    if level == 0 {
        "Cantrip".to_string()
    } else {
        format!("Level {level}")
    }
}

fn deserialize_placeholder<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(none_if_placeholder))
}
