//! Response types for the catalog HTTP API
//!
//! Data routes answer with the structs below; failures answer with
//! [`ErrorResponse`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spellbook_domain::{CatalogStats, ClassInfo, FilterState, LevelBucket, Spell};

pub use spellbook_domain::Facets as FacetsResponse;

// =============================================================================
// Spells
// =============================================================================

/// Filtered, ordered spell listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellListResponse {
    pub spells: Vec<Spell>,
    /// Size of the whole catalog
    pub total: usize,
    /// Number of spells after filtering
    pub filtered: usize,
    /// Effective filters, wildcards included
    pub filters: FilterState,
}

impl SpellListResponse {
    pub fn new(spells: Vec<Spell>, total: usize, filters: FilterState) -> Self {
        Self {
            filtered: spells.len(),
            spells,
            total,
            filters,
        }
    }
}

// =============================================================================
// Classes
// =============================================================================

/// A class record with the number of its spells present in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    #[serde(flatten)]
    pub class: ClassInfo,
    pub spell_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassListResponse {
    pub classes: Vec<ClassSummary>,
}

// =============================================================================
// Stats
// =============================================================================

/// Statistics for a filtered view, with display-ready derived values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CatalogStats,
    pub with_damage_percent: u32,
    pub upcast_percent: u32,
    pub level_distribution: Vec<LevelBucket>,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            with_damage_percent: stats.percentage(stats.with_damage),
            upcast_percent: stats.percentage(stats.upcast),
            level_distribution: stats.level_distribution(),
            stats,
        }
    }
}

// =============================================================================
// Catalog status
// =============================================================================

/// Lifecycle of the catalog build as seen by consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogState {
    /// No build has completed yet
    Loading,
    Ready {
        spells: usize,
        classes: usize,
        fetched_at: DateTime<Utc>,
    },
    /// The last build failed; the next data request retries
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatusResponse {
    /// `live` or `bundled`
    pub source: String,
    #[serde(flatten)]
    pub state: CatalogState,
}

// =============================================================================
// Errors
// =============================================================================

/// Error classification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request was malformed or invalid
    BadRequest,
    /// Requested resource not found
    NotFound,
    /// The catalog could not be built
    ServiceUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
