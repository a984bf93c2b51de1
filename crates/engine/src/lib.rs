//! Spellbook Engine library.
//!
//! Server-side code for the spell catalog.
//!
//! ## Structure
//!
//! - `use_cases/` - Catalog aggregation and the cached catalog service
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
