//! Summary counts over a spell collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{level_label, Spell};

/// Aggregate counts for a (usually filtered) spell collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    /// Spell count per level, ascending by level
    pub by_level: BTreeMap<u8, usize>,
    /// Spells with at least one damage entry
    pub with_damage: usize,
    pub upcast: usize,
    /// Most frequent damage type across all damage entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_damage_type: Option<TopDamageType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDamageType {
    pub damage_type: String,
    /// Number of damage entries carrying this type
    pub count: usize,
}

/// One bar of the level distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBucket {
    pub level: u8,
    pub label: String,
    pub count: usize,
    /// Fraction of the largest bucket, in `0.0..=1.0`
    pub fill: f64,
}

impl CatalogStats {
    pub fn compute(spells: &[Spell]) -> Self {
        let mut by_level = BTreeMap::new();
        // Labels in first-seen order
        let mut damage_types: Vec<(&str, usize)> = Vec::new();
        let mut with_damage = 0;
        let mut upcast = 0;

        for spell in spells {
            *by_level.entry(spell.level).or_insert(0) += 1;
            if spell.upcast {
                upcast += 1;
            }
            if spell.has_damage() {
                with_damage += 1;
                for damage in spell.damage_entries() {
                    let label = damage.damage_type.as_str();
                    match damage_types.iter_mut().find(|(seen, _)| *seen == label) {
                        Some((_, count)) => *count += 1,
                        None => damage_types.push((label, 1)),
                    }
                }
            }
        }

        // Only a strictly larger count displaces, so ties keep the first seen.
        let top_damage_type = damage_types
            .into_iter()
            .fold(None::<(&str, usize)>, |best, (label, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((label, count)),
            })
            .map(|(label, count)| TopDamageType {
                damage_type: label.to_string(),
                count,
            });

        Self {
            total: spells.len(),
            by_level,
            with_damage,
            upcast,
            top_damage_type,
        }
    }

    /// `value` as a whole percentage of `total`; 0 for an empty collection.
    pub fn percentage(&self, value: usize) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((value as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// Per-level buckets, ascending, each scaled against the largest one.
    pub fn level_distribution(&self) -> Vec<LevelBucket> {
        let largest = self.by_level.values().copied().max().unwrap_or(0);
        self.by_level
            .iter()
            .map(|(&level, &count)| LevelBucket {
                level,
                label: level_label(level),
                count,
                fill: if largest == 0 {
                    0.0
                } else {
                    count as f64 / largest as f64
                },
            })
            .collect()
    }
}
