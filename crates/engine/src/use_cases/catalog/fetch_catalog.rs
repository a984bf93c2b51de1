//! Fetch catalog use case - aggregates the remote provider into a catalog.
//!
//! Three levels of requests: the class list, then every class's spell ids,
//! then every unique spell's detail. Each level is issued as one concurrent
//! batch and awaited until every request has settled. Only the class list is
//! fatal; anything below it degrades to a smaller catalog.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use spellbook_domain::{AssetUrls, Catalog, ClassSpellIndex, Spell};
use thiserror::Error;

use crate::infrastructure::bundled::ImportError;
use crate::infrastructure::ports::{ClockPort, SourceError, SpellSourcePort};

/// Errors that end a catalog build.
///
/// Cloneable so callers waiting on the same build can share its failure.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The class list could not be fetched; nothing can be built without it.
    #[error("Spell provider unavailable: {0}")]
    ProviderUnavailable(#[source] SourceError),
    #[error("Bundled dataset failed to load: {0}")]
    Bundled(#[source] Arc<ImportError>),
}

impl From<ImportError> for CatalogError {
    fn from(e: ImportError) -> Self {
        Self::Bundled(Arc::new(e))
    }
}

/// A single item that could not be fetched. Logged, never propagated.
#[derive(Debug, Error)]
pub enum PartialFetchFailure {
    #[error("Spell list for class {class_id} unavailable: {source}")]
    ClassSpells {
        class_id: String,
        source: SourceError,
    },
    #[error("Spell {spell_id} unavailable: {source}")]
    SpellDetail {
        spell_id: String,
        source: SourceError,
    },
}

impl PartialFetchFailure {
    fn source_error(&self) -> &SourceError {
        match self {
            Self::ClassSpells { source, .. } | Self::SpellDetail { source, .. } => source,
        }
    }

    fn log(&self) {
        tracing::warn!(
            error = %self,
            malformed = self.source_error().is_malformed(),
            "Partial catalog fetch failure, item skipped"
        );
    }
}

/// What a build fetched and what it had to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// Classes listed by the provider
    pub classes: usize,
    /// Classes whose spell list failed (kept in the index as empty)
    pub failed_classes: Vec<String>,
    /// Distinct spell ids across all class lists
    pub unique_spell_ids: usize,
    /// Spell ids whose detail failed (absent from the catalog)
    pub failed_spells: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl FetchReport {
    pub fn is_complete(&self) -> bool {
        self.failed_classes.is_empty() && self.failed_spells.is_empty()
    }
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub catalog: Catalog,
    pub report: FetchReport,
}

/// Builds a [`Catalog`] from a [`SpellSourcePort`].
pub struct FetchCatalog {
    source: Arc<dyn SpellSourcePort>,
    clock: Arc<dyn ClockPort>,
    assets: AssetUrls,
}

impl FetchCatalog {
    pub fn new(
        source: Arc<dyn SpellSourcePort>,
        clock: Arc<dyn ClockPort>,
        assets: AssetUrls,
    ) -> Self {
        Self {
            source,
            clock,
            assets,
        }
    }

    pub async fn execute(&self) -> Result<CatalogBuild, CatalogError> {
        let started = Instant::now();

        // Step 1: the class list is the only fatal request
        let listed = self.source.list_classes().await.map_err(|e| {
            tracing::error!(error = %e, "Class list unavailable, cannot build catalog");
            CatalogError::ProviderUnavailable(e)
        })?;
        let class_ids = dedupe(listed.iter().map(String::as_str));

        // Step 2: every class's spell list, concurrently
        let class_lists = join_all(class_ids.iter().map(|class_id| async move {
            (*class_id, self.source.list_class_spells(class_id).await)
        }))
        .await;

        let mut class_index = ClassSpellIndex::new();
        let mut failed_classes = Vec::new();
        let mut listed_ids: Vec<&str> = Vec::new();
        let mut fetched_lists = Vec::with_capacity(class_lists.len());
        for (class_id, result) in class_lists {
            match result {
                Ok(spell_ids) => fetched_lists.push((class_id, spell_ids)),
                Err(source) => {
                    PartialFetchFailure::ClassSpells {
                        class_id: class_id.to_string(),
                        source,
                    }
                    .log();
                    failed_classes.push(class_id.to_string());
                    class_index.insert(class_id, Vec::new());
                }
            }
        }

        // Step 3: union of ids, first seen wins (class order, then list order)
        for (_, spell_ids) in &fetched_lists {
            listed_ids.extend(spell_ids.iter().map(String::as_str));
        }
        let unique_ids = dedupe(listed_ids);

        // Step 4: every unique spell's detail, concurrently
        let details = join_all(unique_ids.iter().map(|spell_id| async move {
            (*spell_id, self.source.get_spell(spell_id).await)
        }))
        .await;

        let mut spells = Vec::with_capacity(details.len());
        let mut failed_spells = Vec::new();
        for (spell_id, result) in details {
            match result.and_then(|spell| check_identity(spell_id, spell)) {
                // Step 5: icon derived from the requested id
                Ok(spell) => spells.push(spell.with_icon(self.assets.spell_icon(spell_id))),
                Err(source) => {
                    PartialFetchFailure::SpellDetail {
                        spell_id: spell_id.to_string(),
                        source,
                    }
                    .log();
                    failed_spells.push(spell_id.to_string());
                }
            }
        }

        let unique_spell_ids = unique_ids.len();
        for (class_id, spell_ids) in fetched_lists {
            class_index.insert(class_id, spell_ids);
        }

        let report = FetchReport {
            classes: class_ids.len(),
            failed_classes,
            unique_spell_ids,
            failed_spells,
            fetched_at: self.clock.now(),
        };

        tracing::info!(
            classes = report.classes,
            failed_classes = report.failed_classes.len(),
            spells = spells.len(),
            failed_spells = report.failed_spells.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Catalog assembled from spell provider"
        );

        Ok(CatalogBuild {
            catalog: Catalog::new(spells, class_index),
            report,
        })
    }
}

/// Distinct values in first-seen order.
fn dedupe<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}

/// A detail record must describe the spell that was asked for.
fn check_identity(requested: &str, spell: Spell) -> Result<Spell, SourceError> {
    if spell.id == requested {
        Ok(spell)
    } else {
        Err(SourceError::malformed(format!(
            "requested spell {requested} but received {}",
            spell.id
        )))
    }
}
