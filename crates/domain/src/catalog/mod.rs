//! The aggregated spell catalog and the pure views derived from it.
//!
//! A [`Catalog`] is assembled once per run (from the live provider or the
//! bundled dataset) and is read-only afterwards. Everything a consumer shows
//! is derived on demand: the filtered and sorted list, facets, statistics
//! and class records.

mod facets;
mod query;
mod stats;

pub use facets::{distinct_damage_types, distinct_levels, Facets};
pub use query::{filter_spells, matches, sort_spells};
pub use stats::{CatalogStats, LevelBucket, TopDamageType};

use serde::{Deserialize, Serialize};

use crate::entities::{ClassInfo, ClassSpellIndex, Spell};
use crate::value_objects::{AssetUrls, FilterState};

/// Flat, de-duplicated spell collection plus its class index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    spells: Vec<Spell>,
    class_index: ClassSpellIndex,
}

impl Catalog {
    /// Assemble a catalog. Spell ids are expected to be unique already.
    pub fn new(spells: Vec<Spell>, class_index: ClassSpellIndex) -> Self {
        Self {
            spells,
            class_index,
        }
    }

    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn class_index(&self) -> &ClassSpellIndex {
        &self.class_index
    }

    pub fn get(&self, spell_id: &str) -> Option<&Spell> {
        self.spells.iter().find(|spell| spell.id == spell_id)
    }

    /// Visible spells for `filters`, in display order.
    pub fn query(&self, filters: &FilterState) -> Vec<Spell> {
        filter_spells(&self.spells, &self.class_index, filters)
    }

    /// Facets over the whole collection, independent of any filter.
    pub fn facets(&self) -> Facets {
        Facets::derive(&self.spells)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.spells)
    }

    /// Display records for every class in the index, ascending by id.
    pub fn classes(&self, assets: &AssetUrls) -> Vec<ClassInfo> {
        self.class_index
            .class_ids()
            .map(|class_id| ClassInfo::from_id(class_id, assets))
            .collect()
    }

    /// Number of a class's spells that are actually present in the catalog.
    pub fn resolved_count(&self, class_id: &str) -> usize {
        self.class_index.resolved_count(class_id, &self.spells)
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}
