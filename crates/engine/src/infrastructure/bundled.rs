//! Bundled spell dataset.
//!
//! Loads a catalog from two JSON files shipped alongside the binary:
//!
//! - `spells.json`: array of spell records
//! - `spells-by-class.json`: object mapping class id to spell ids
//!
//! There is no network boundary here, so there is no partial failure either:
//! any unreadable or malformed file fails the whole load.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use spellbook_domain::{AssetUrls, Catalog, ClassSpellIndex, Spell};
use thiserror::Error;
use tokio::fs;

pub const SPELLS_FILE: &str = "spells.json";
pub const SPELLS_BY_CLASS_FILE: &str = "spells-by-class.json";

/// Errors that can occur while loading the bundled dataset.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),
}

/// Loader for the bundled dataset directory.
pub struct BundledCatalog {
    data_path: PathBuf,
    assets: AssetUrls,
}

impl BundledCatalog {
    /// Create a loader pointing at the directory holding the dataset files.
    pub fn new(data_path: impl Into<PathBuf>, assets: AssetUrls) -> Self {
        Self {
            data_path: data_path.into(),
            assets,
        }
    }

    /// Read both files and assemble a catalog.
    ///
    /// Spells without an icon get the derived asset URL. Repeated ids keep
    /// the first record.
    pub async fn load(&self) -> Result<Catalog, ImportError> {
        let records: Vec<Spell> = self.read_json(SPELLS_FILE).await?;
        let class_index: ClassSpellIndex = self.read_json(SPELLS_BY_CLASS_FILE).await?;

        let mut seen = HashSet::new();
        let mut duplicates = 0usize;
        let spells: Vec<Spell> = records
            .into_iter()
            .filter(|spell| {
                let fresh = seen.insert(spell.id.clone());
                if !fresh {
                    duplicates += 1;
                }
                fresh
            })
            .map(|spell| {
                if spell.icon.is_some() {
                    spell
                } else {
                    let icon = self.assets.spell_icon(&spell.id);
                    spell.with_icon(icon)
                }
            })
            .collect();

        if duplicates > 0 {
            tracing::warn!(
                duplicates,
                path = %self.data_path.display(),
                "Bundled dataset repeats spell ids, kept first occurrence"
            );
        }

        tracing::info!(
            spells = spells.len(),
            classes = class_index.len(),
            path = %self.data_path.display(),
            "Loaded bundled spell dataset"
        );

        Ok(Catalog::new(spells, class_index))
    }

    async fn read_json<T: DeserializeOwned>(&self, filename: &str) -> Result<T, ImportError> {
        let file_path = self.data_path.join(filename);

        if !file_path.exists() {
            return Err(ImportError::DataFileNotFound(file_path));
        }

        let content = fs::read_to_string(&file_path).await?;
        serde_json::from_str(&content).map_err(|source| ImportError::Json {
            path: file_path,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const SPELLS: &str = r#"[
        {
            "id": "fireball", "url": "", "name": "Fireball", "level": 3,
            "upcast": true, "action": "1 action", "duration": "Instantaneous",
            "range": "150 feet", "type": "DEX save",
            "damage": [{ "dice": "8d6", "damageType": "fire" }]
        },
        {
            "id": "shield", "url": "", "name": "Shield", "level": 1,
            "upcast": false, "action": "1 reaction", "duration": "1 round",
            "range": "Self", "type": "-",
            "icon": "https://cdn.test/shield.png"
        },
        {
            "id": "fireball", "url": "", "name": "Fireball (copy)", "level": 3,
            "upcast": false, "action": "", "duration": "", "range": "", "type": "-"
        }
    ]"#;

    const BY_CLASS: &str = r#"{ "wizard": ["fireball", "shield", "wish"], "cleric": [] }"#;

    fn write_dataset(dir: &TempDir, spells: &str, by_class: &str) {
        std::fs::write(dir.path().join(SPELLS_FILE), spells).unwrap();
        std::fs::write(dir.path().join(SPELLS_BY_CLASS_FILE), by_class).unwrap();
    }

    fn loader(dir: &TempDir) -> BundledCatalog {
        BundledCatalog::new(dir.path(), AssetUrls::new("https://example.test/v1"))
    }

    #[tokio::test]
    async fn loads_and_dedupes() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, SPELLS, BY_CLASS);

        let catalog = loader(&dir).load().await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("fireball").map(|s| s.name.as_str()),
            Some("Fireball")
        );
        assert_eq!(catalog.class_index().spells_for("wizard").len(), 3);
        assert_eq!(catalog.resolved_count("wizard"), 2);
    }

    #[tokio::test]
    async fn derives_missing_icons_only() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, SPELLS, BY_CLASS);

        let catalog = loader(&dir).load().await.unwrap();

        assert_eq!(
            catalog.get("fireball").and_then(|s| s.icon.as_deref()),
            Some("https://example.test/v1/assets/spells/fireball")
        );
        assert_eq!(
            catalog.get("shield").and_then(|s| s.icon.as_deref()),
            Some("https://cdn.test/shield.png")
        );
    }

    #[tokio::test]
    async fn shipped_dataset_loads() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let catalog = BundledCatalog::new(data, AssetUrls::new("https://example.test/v1"))
            .load()
            .await
            .unwrap();

        assert!(!catalog.is_empty());
        for (class_id, _) in catalog.class_index().iter() {
            assert!(catalog.resolved_count(class_id) > 0);
        }
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SPELLS_FILE), "[]").unwrap();

        let err = loader(&dir).load().await.unwrap_err();
        match err {
            ImportError::DataFileNotFound(path) => {
                assert!(path.ends_with(SPELLS_BY_CLASS_FILE));
            }
            other => panic!("expected DataFileNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_file_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        write_dataset(&dir, r#"[{ "id": "broken" }]"#, BY_CLASS);

        let err = loader(&dir).load().await.unwrap_err();
        assert!(matches!(err, ImportError::Json { .. }));
    }
}
