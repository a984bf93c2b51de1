//! Facet derivation: distinct values used to populate filter options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::Spell;

/// Distinct levels and damage types present in a spell collection.
///
/// Always derived, never stored alongside the spells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub levels: Vec<u8>,
    pub damage_types: Vec<String>,
}

impl Facets {
    pub fn derive(spells: &[Spell]) -> Self {
        Self {
            levels: distinct_levels(spells),
            damage_types: distinct_damage_types(spells),
        }
    }
}

/// Levels present in `spells`, ascending, without duplicates.
pub fn distinct_levels(spells: &[Spell]) -> Vec<u8> {
    spells
        .iter()
        .map(|spell| spell.level)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Damage type labels present in `spells`, lexicographically ascending.
pub fn distinct_damage_types(spells: &[Spell]) -> Vec<String> {
    spells
        .iter()
        .flat_map(Spell::damage_entries)
        .map(|damage| damage.damage_type.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Damage;

    #[test]
    fn derives_sorted_unique_values() {
        let spells = vec![
            Spell::new("heal", "Heal", 6),
            Spell::new("fireball", "Fireball", 3).with_damage(vec![Damage::new("8d6", "fire")]),
            Spell::new("ice-storm", "Ice Storm", 4).with_damage(vec![
                Damage::new("2d8", "bludgeoning"),
                Damage::new("4d6", "cold"),
            ]),
            Spell::new("fire-bolt", "Fire Bolt", 0).with_damage(vec![Damage::new("1d10", "fire")]),
            Spell::new("scorch", "Scorch", 3).with_damage(vec![Damage::new("2d6", "fire")]),
        ];

        let facets = Facets::derive(&spells);
        assert_eq!(facets.levels, vec![0, 3, 4, 6]);
        assert_eq!(facets.damage_types, vec!["bludgeoning", "cold", "fire"]);
    }

    #[test]
    fn empty_collection_has_no_facets() {
        assert_eq!(Facets::derive(&[]), Facets::default());
    }

    #[test]
    fn serializes_camel_case() {
        let facets = Facets {
            levels: vec![1],
            damage_types: vec!["acid".into()],
        };
        let value = serde_json::to_value(&facets).unwrap();
        assert_eq!(value["damageTypes"][0], "acid");
    }
}
