//! Spellbook domain: catalog records and the pure filter, sort and
//! summary logic applied to them.
//!
//! Nothing in this crate performs I/O. Fetching lives in the engine crate.

pub mod catalog;
pub mod common;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use catalog::{
    distinct_damage_types, distinct_levels, filter_spells, matches, sort_spells, Catalog,
    CatalogStats, Facets, LevelBucket, TopDamageType,
};
pub use entities::{level_label, ClassInfo, ClassSpellIndex, Damage, Spell};
pub use error::DomainError;
pub use value_objects::{AssetUrls, FilterState, FilterUpdate, Selection, SortKey};
