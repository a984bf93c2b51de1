//! Request types for the catalog HTTP API

use serde::{Deserialize, Serialize};
use spellbook_domain::{DomainError, FilterState, FilterUpdate};

/// Query-string filters for spell listings and statistics.
///
/// Every field is optional; an absent field leaves the corresponding
/// [`FilterState`] dimension at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl SpellQuery {
    /// Apply the present parameters, in field order, to a default filter state.
    pub fn to_filter_state(&self) -> Result<FilterState, DomainError> {
        let fields = [
            ("search", &self.search),
            ("class", &self.class),
            ("level", &self.level),
            ("damageType", &self.damage_type),
            ("sort", &self.sort),
        ];

        let mut state = FilterState::default();
        for (field, value) in fields {
            if let Some(value) = value {
                state.update(FilterUpdate::parse(field, value)?);
            }
        }
        Ok(state)
    }
}
