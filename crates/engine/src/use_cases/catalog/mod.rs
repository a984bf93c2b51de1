//! Catalog use cases.
//!
//! Aggregates the spell provider into a catalog and serves the cached
//! catalog to the API.

mod catalog_service;
mod fetch_catalog;

pub use catalog_service::{CatalogLoader, CatalogService};
pub use fetch_catalog::{CatalogBuild, CatalogError, FetchCatalog, FetchReport, PartialFetchFailure};
