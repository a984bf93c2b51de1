//! Catalog service - builds the catalog once and serves read-only views.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use spellbook_domain::{AssetUrls, Catalog, CatalogStats, ClassInfo, Facets, FilterState, Spell};
use spellbook_shared::CatalogState;
use tokio::sync::{Mutex, OnceCell, RwLock};

use super::fetch_catalog::{CatalogError, FetchCatalog};
use crate::infrastructure::bundled::BundledCatalog;
use crate::infrastructure::config::CatalogSource;
use crate::infrastructure::ports::ClockPort;

/// How the catalog is obtained.
pub enum CatalogLoader {
    Live(FetchCatalog),
    Bundled(BundledCatalog),
}

impl CatalogLoader {
    pub fn kind(&self) -> CatalogSource {
        match self {
            CatalogLoader::Live(_) => CatalogSource::Live,
            CatalogLoader::Bundled(_) => CatalogSource::Bundled,
        }
    }
}

/// Outcome of the most recent finished build attempt.
#[derive(Default)]
struct BuildGate {
    last_error: Option<CatalogError>,
}

/// Owns the session's catalog.
///
/// The first successful build is cached for the life of the process.
/// Concurrent callers during a build wait for that build instead of starting
/// their own, and share its error if it fails. A failed build is not cached;
/// the next caller to arrive after it retries.
pub struct CatalogService {
    loader: CatalogLoader,
    clock: Arc<dyn ClockPort>,
    assets: AssetUrls,
    catalog: OnceCell<Arc<Catalog>>,
    /// Held for the whole of a build attempt
    gate: Mutex<BuildGate>,
    /// Finished build attempts, bumped before `gate` is released
    attempts: AtomicU64,
    state: RwLock<CatalogState>,
}

impl CatalogService {
    pub fn new(loader: CatalogLoader, clock: Arc<dyn ClockPort>, assets: AssetUrls) -> Self {
        Self {
            loader,
            clock,
            assets,
            catalog: OnceCell::new(),
            gate: Mutex::new(BuildGate::default()),
            attempts: AtomicU64::new(0),
            state: RwLock::new(CatalogState::Loading),
        }
    }

    pub fn source(&self) -> CatalogSource {
        self.loader.kind()
    }

    /// Current build state, for loading and error display.
    pub async fn status(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// The catalog, building it on first use.
    pub async fn catalog(&self) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog.clone());
        }

        let arrived_after = self.attempts.load(Ordering::SeqCst);
        let mut gate = self.gate.lock().await;

        // An attempt finished while we queued: take its outcome.
        if self.attempts.load(Ordering::SeqCst) > arrived_after {
            if let Some(e) = &gate.last_error {
                return Err(e.clone());
            }
        }

        let result = self
            .catalog
            .get_or_try_init(|| self.build_and_record())
            .await
            .cloned();

        gate.last_error = result.as_ref().err().cloned();
        self.attempts.fetch_add(1, Ordering::SeqCst);
        result
    }

    async fn build_and_record(&self) -> Result<Arc<Catalog>, CatalogError> {
        *self.state.write().await = CatalogState::Loading;

        match self.build().await {
            Ok(catalog) => {
                *self.state.write().await = CatalogState::Ready {
                    spells: catalog.len(),
                    classes: catalog.class_index().len(),
                    fetched_at: self.clock.now(),
                };
                Ok(Arc::new(catalog))
            }
            Err(e) => {
                *self.state.write().await = CatalogState::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Build ahead of the first request. Failures are logged, not fatal.
    pub async fn preload(&self) {
        match self.catalog().await {
            Ok(catalog) => {
                tracing::info!(
                    source = %self.source(),
                    spells = catalog.len(),
                    "Catalog preloaded"
                );
            }
            Err(e) => {
                tracing::error!(
                    source = %self.source(),
                    error = %e,
                    "Catalog preload failed, will retry on first request"
                );
            }
        }
    }

    async fn build(&self) -> Result<Catalog, CatalogError> {
        tracing::info!(source = %self.source(), "Building spell catalog");
        match &self.loader {
            CatalogLoader::Live(fetch) => fetch.execute().await.map(|build| build.catalog),
            CatalogLoader::Bundled(bundled) => Ok(bundled.load().await?),
        }
    }

    // =========================================================================
    // Read views
    // =========================================================================

    /// Visible spells for `filters`, plus the size of the whole catalog.
    pub async fn query(&self, filters: &FilterState) -> Result<(Vec<Spell>, usize), CatalogError> {
        let catalog = self.catalog().await?;
        Ok((catalog.query(filters), catalog.len()))
    }

    pub async fn spell(&self, spell_id: &str) -> Result<Option<Spell>, CatalogError> {
        Ok(self.catalog().await?.get(spell_id).cloned())
    }

    pub async fn facets(&self) -> Result<Facets, CatalogError> {
        Ok(self.catalog().await?.facets())
    }

    /// Statistics over the filtered view.
    pub async fn stats(&self, filters: &FilterState) -> Result<CatalogStats, CatalogError> {
        let catalog = self.catalog().await?;
        Ok(CatalogStats::compute(&catalog.query(filters)))
    }

    /// Class records with the number of their spells present in the catalog.
    pub async fn classes(&self) -> Result<Vec<(ClassInfo, usize)>, CatalogError> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .classes(&self.assets)
            .into_iter()
            .map(|class| {
                let count = catalog.resolved_count(&class.id);
                (class, count)
            })
            .collect())
    }
}
