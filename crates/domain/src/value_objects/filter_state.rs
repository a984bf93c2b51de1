//! User-owned filter state for the catalog view.
//!
//! The state is created with every dimension unconstrained and changes only
//! through [`FilterState::update`] (one field per [`FilterUpdate`]) or
//! [`FilterState::reset`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Wire spelling of the "no constraint" wildcard.
pub const ALL: &str = "all";

// ============================================================================
// Selection
// ============================================================================

/// A filter dimension: either unconstrained (`all`) or one specific value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// `true` for `All`, otherwise the result of `predicate` on the value.
    pub fn allows(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => predicate(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => write!(f, "{value}"),
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Err = DomainError;

    /// `all` (any case) or an empty string parse to `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(Selection::All);
        }
        trimmed
            .parse::<T>()
            .map(Selection::Only)
            .map_err(|e| DomainError::parse(format!("Invalid value '{trimmed}': {e}")))
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str(ALL),
            Selection::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw<T> {
            Text(String),
            Value(T),
        }

        match Raw::<T>::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Raw::Value(value) => Ok(Selection::Only(value)),
        }
    }
}

// ============================================================================
// SortKey
// ============================================================================

/// Ordering applied to the visible spells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Alphabetical by name
    #[default]
    Name,
    /// Ascending level
    Level,
    /// Most damage entries first
    Damage,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Level => "level",
            SortKey::Damage => "damage",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "name" => Ok(SortKey::Name),
            "level" => Ok(SortKey::Level),
            "damage" => Ok(SortKey::Damage),
            other => Err(DomainError::parse(format!("Unknown sort key: {other}"))),
        }
    }
}

// ============================================================================
// FilterState
// ============================================================================

/// Current filter and sort settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Case-insensitive substring matched against spell names
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub selected_class: Selection<String>,
    #[serde(default)]
    pub selected_level: Selection<u8>,
    #[serde(default)]
    pub selected_damage_type: Selection<String>,
    #[serde(default, rename = "sortBy")]
    pub sort: SortKey,
}

/// A single-field change to [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    SearchTerm(String),
    Class(Selection<String>),
    Level(Selection<u8>),
    DamageType(Selection<String>),
    Sort(SortKey),
}

impl FilterUpdate {
    /// Build an update from a field name and its textual value.
    ///
    /// Accepts the camelCase field names used on the wire, their snake_case
    /// spellings, and short query-string aliases (`search`, `class`, `level`,
    /// `damageType`, `sort`).
    pub fn parse(field: &str, value: &str) -> Result<Self, DomainError> {
        let update = match field {
            "searchTerm" | "search_term" | "search" => FilterUpdate::SearchTerm(value.to_string()),
            "selectedClass" | "selected_class" | "class" => FilterUpdate::Class(value.parse()?),
            "selectedLevel" | "selected_level" | "level" => FilterUpdate::Level(value.parse()?),
            "selectedDamageType" | "selected_damage_type" | "damageType" | "damage_type" => {
                FilterUpdate::DamageType(value.parse()?)
            }
            "sortBy" | "sort_by" | "sort" => FilterUpdate::Sort(value.parse()?),
            other => {
                return Err(DomainError::validation(format!(
                    "Unknown filter field: {other}"
                )))
            }
        };
        Ok(update)
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field change.
    pub fn update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::SearchTerm(term) => self.search_term = term,
            FilterUpdate::Class(class) => self.selected_class = class,
            FilterUpdate::Level(level) => self.selected_level = level,
            FilterUpdate::DamageType(damage_type) => self.selected_damage_type = damage_type,
            FilterUpdate::Sort(sort) => self.sort = sort,
        }
    }

    /// Builder-style [`update`](Self::update).
    pub fn with(mut self, update: FilterUpdate) -> Self {
        self.update(update);
        self
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unconstrained() {
        let state = FilterState::new();
        assert!(state.search_term.is_empty());
        assert!(state.selected_class.is_all());
        assert!(state.selected_level.is_all());
        assert!(state.selected_damage_type.is_all());
        assert_eq!(state.sort, SortKey::Name);
        assert!(state.is_default());
    }

    #[test]
    fn update_changes_only_the_named_field() {
        let mut state = FilterState::new();
        state.update(FilterUpdate::Level(Selection::Only(3)));

        assert_eq!(state.selected_level, Selection::Only(3));
        assert!(state.selected_class.is_all());
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState::new()
            .with(FilterUpdate::SearchTerm("fire".into()))
            .with(FilterUpdate::Class(Selection::Only("wizard".into())))
            .with(FilterUpdate::Sort(SortKey::Damage));
        assert!(!state.is_default());

        state.reset();
        assert!(state.is_default());
    }

    #[test]
    fn parse_by_field_name() {
        assert_eq!(
            FilterUpdate::parse("selectedLevel", "all").unwrap(),
            FilterUpdate::Level(Selection::All)
        );
        assert_eq!(
            FilterUpdate::parse("level", "0").unwrap(),
            FilterUpdate::Level(Selection::Only(0))
        );
        assert_eq!(
            FilterUpdate::parse("class", "wizard").unwrap(),
            FilterUpdate::Class(Selection::Only("wizard".into()))
        );
        assert_eq!(
            FilterUpdate::parse("sortBy", "Damage").unwrap(),
            FilterUpdate::Sort(SortKey::Damage)
        );
        assert_eq!(
            FilterUpdate::parse("search", "  Fire ").unwrap(),
            FilterUpdate::SearchTerm("  Fire ".into())
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            FilterUpdate::parse("colour", "red"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            FilterUpdate::parse("level", "nine"),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            FilterUpdate::parse("sort", "popularity"),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn wildcard_is_preserved_on_the_wire() {
        let state = FilterState::new().with(FilterUpdate::Level(Selection::Only(2)));
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["selectedClass"], "all");
        assert_eq!(value["selectedLevel"], 2);
        assert_eq!(value["sortBy"], "name");

        let parsed: FilterState = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn selection_accepts_numeric_strings() {
        let parsed: Selection<u8> = serde_json::from_str(r#""5""#).unwrap();
        assert_eq!(parsed, Selection::Only(5));
        let parsed: Selection<u8> = serde_json::from_str(r#""ALL""#).unwrap();
        assert_eq!(parsed, Selection::All);
    }
}
