//! Spellbook Shared - Wire types for the catalog HTTP API
//!
//! This crate contains the request and response shapes exchanged between the
//! engine's HTTP layer and its consumers.
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and serialization
//! 2. **camelCase on the wire** - matches the remote provider's record shape
//! 3. **Domain records are embedded directly** - `Spell`, `Facets` and
//!    `CatalogStats` already carry their serde shape

pub mod requests;
pub mod responses;

pub use requests::SpellQuery;
pub use responses::{
    CatalogState, CatalogStatusResponse, ClassListResponse, ClassSummary, ErrorCode,
    ErrorResponse, FacetsResponse, SpellListResponse, StatsResponse,
};
