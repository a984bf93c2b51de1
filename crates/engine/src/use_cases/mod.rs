//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across ports to fulfill user stories.

pub mod catalog;

pub use catalog::{CatalogLoader, CatalogService};
