//! Filter and sort over a flat spell collection.

use crate::common::{compare_display_names, contains_ignore_case};
use crate::entities::{ClassSpellIndex, Spell};
use crate::value_objects::{FilterState, SortKey};

/// Check if a spell passes every constraint in `filters`.
///
/// Each dimension set to `all` is skipped. A class absent from `class_index`
/// behaves as an empty class.
pub fn matches(spell: &Spell, class_index: &ClassSpellIndex, filters: &FilterState) -> bool {
    // Search filter
    if !contains_ignore_case(&spell.name, &filters.search_term) {
        return false;
    }

    // Class filter
    if !filters
        .selected_class
        .allows(|class| class_index.contains(class, &spell.id))
    {
        return false;
    }

    // Level filter
    if !filters.selected_level.allows(|level| spell.level == *level) {
        return false;
    }

    // Damage type filter
    filters
        .selected_damage_type
        .allows(|damage_type| spell.deals_damage_type(damage_type))
}

/// Compute the visible, ordered subset of `spells`.
///
/// The input is left untouched. Sorting is stable, so spells that compare
/// equal keep their input order.
pub fn filter_spells(
    spells: &[Spell],
    class_index: &ClassSpellIndex,
    filters: &FilterState,
) -> Vec<Spell> {
    let mut visible: Vec<Spell> = spells
        .iter()
        .filter(|spell| matches(spell, class_index, filters))
        .cloned()
        .collect();
    sort_spells(&mut visible, filters.sort);
    visible
}

/// Stable in-place sort by `key`.
pub fn sort_spells(spells: &mut [Spell], key: SortKey) {
    match key {
        SortKey::Name => spells.sort_by(|a, b| compare_display_names(&a.name, &b.name)),
        SortKey::Level => spells.sort_by_key(|spell| spell.level),
        // Most entries first; spells without damage end up last.
        SortKey::Damage => spells.sort_by(|a, b| b.damage_count().cmp(&a.damage_count())),
    }
}
