//! Application state and composition.

use std::sync::Arc;

use spellbook_domain::AssetUrls;

use crate::infrastructure::{
    bundled::BundledCatalog,
    clock::SystemClock,
    config::{CatalogSource, EngineConfig},
    ports::{ClockPort, SpellSourcePort},
    spell_api::HttpSpellSource,
};
use crate::use_cases::catalog::{CatalogLoader, CatalogService, FetchCatalog};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub catalog: Arc<CatalogService>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// The data-sourcing strategy comes from `config.source`; only the
    /// chosen adapter is constructed.
    pub fn new(config: &EngineConfig) -> Self {
        let clock_port: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let assets = AssetUrls::new(config.asset_base());

        let loader = match config.source {
            CatalogSource::Live => {
                let source: Arc<dyn SpellSourcePort> = Arc::new(HttpSpellSource::with_timeout(
                    config.api_base_url.clone(),
                    config.request_timeout_secs,
                ));
                CatalogLoader::Live(FetchCatalog::new(source, clock_port.clone(), assets.clone()))
            }
            CatalogSource::Bundled => CatalogLoader::Bundled(BundledCatalog::new(
                config.bundled_data_path.clone(),
                assets.clone(),
            )),
        };

        Self::from_service(CatalogService::new(loader, clock_port, assets))
    }

    pub fn from_service(catalog: CatalogService) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
