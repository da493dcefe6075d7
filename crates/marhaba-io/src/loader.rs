use std::io;
use std::path::PathBuf;

use marhaba_core::CoreError;
use marhaba_core::interchange;
use marhaba_types::Dataset;

use crate::store::{KeyValueStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Could not read data file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse data file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    #[error("Could not encode dataset: {0}")]
    Encode(#[source] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Where a loaded dataset came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Cache,
    File(PathBuf),
}

/// Loads the dataset from the cache first, then from the static data file
pub struct DatasetLoader<S> {
    store: S,
    cache_key: String,
    words_path: PathBuf,
}

impl<S: KeyValueStore> DatasetLoader<S> {
    pub fn new(store: S, cache_key: impl Into<String>, words_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            cache_key: cache_key.into(),
            words_path: words_path.into(),
        }
    }

    /// Cache hit wins; an unreadable or corrupt cache falls through to the file.
    /// One attempt per source, no retry.
    pub async fn load(&self) -> Result<(Dataset, DataSource), LoadError> {
        match self.store.get(&self.cache_key) {
            Ok(Some(json)) => match interchange::from_json(&json) {
                Ok(dataset) => {
                    tracing::info!("Loading data from cache '{}'", self.cache_key);
                    return Ok((dataset, DataSource::Cache));
                }
                Err(e) => {
                    tracing::error!("Error parsing cached data, fetching from file: {}", e);
                }
            },
            Ok(None) => {
                tracing::debug!("No cached data under '{}'", self.cache_key);
            }
            Err(e) => {
                tracing::warn!("Cache unavailable, fetching from file: {}", e);
            }
        }

        self.load_file().await
    }

    async fn load_file(&self) -> Result<(Dataset, DataSource), LoadError> {
        tracing::info!("Fetching data from {}", self.words_path.display());
        let json = tokio::fs::read_to_string(&self.words_path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.words_path.clone(),
                source,
            })?;

        let dataset = interchange::from_json(&json).map_err(|source| LoadError::Parse {
            path: self.words_path.clone(),
            source,
        })?;

        Ok((dataset, DataSource::File(self.words_path.clone())))
    }

    /// Overwrite the cached copy, used after a fresh spreadsheet import
    pub fn save(&mut self, dataset: &Dataset) -> Result<(), LoadError> {
        let json = interchange::to_json(dataset).map_err(LoadError::Encode)?;
        self.store.set(&self.cache_key, &json)?;
        tracing::info!(
            "Cached {} topics under '{}'",
            dataset.len(),
            self.cache_key
        );
        Ok(())
    }

    pub fn clear_cache(&mut self) -> Result<(), LoadError> {
        self.store.clear(&self.cache_key)?;
        tracing::info!("Cleared cached data '{}'", self.cache_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use marhaba_types::{Category, Term};

    use super::*;
    use crate::store::MemoryStore;

    const KEY: &str = "arabicCommunicationData";

    fn temp_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("marhaba-words-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn sample(name: &str) -> Dataset {
        let mut category = Category::new(name, None);
        category.terms.push(Term {
            english: "Hello".into(),
            pronunciation: "marhaba".into(),
            arabic: "مرحبا".into(),
        });
        vec![category]
    }

    #[tokio::test]
    async fn prefers_cache() {
        let path = temp_file(&interchange::to_json(&sample("From file")).unwrap());
        let mut store = MemoryStore::new();
        store
            .set(KEY, &interchange::to_json(&sample("From cache")).unwrap())
            .unwrap();

        let loader = DatasetLoader::new(store, KEY, &path);
        let (dataset, source) = loader.load().await.unwrap();

        assert_eq!(source, DataSource::Cache);
        assert_eq!(dataset[0].name, "From cache");
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn corrupt_cache_falls_back_to_file() {
        let path = temp_file(&interchange::to_json(&sample("From file")).unwrap());
        let mut store = MemoryStore::new();
        store.set(KEY, "{ not json").unwrap();

        let loader = DatasetLoader::new(store, KEY, &path);
        let (dataset, source) = loader.load().await.unwrap();

        assert_eq!(source, DataSource::File(path.clone()));
        assert_eq!(dataset[0].name, "From file");
        // Loading from the file leaves the cache alone
        assert_eq!(loader.store.get(KEY).unwrap().as_deref(), Some("{ not json"));
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn missing_everything_fails() {
        let loader = DatasetLoader::new(MemoryStore::new(), KEY, "no/such/words.json");
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[tokio::test]
    async fn invalid_file_fails() {
        let path = temp_file("[{ \"category\": 3 }]");
        let loader = DatasetLoader::new(MemoryStore::new(), KEY, &path);

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn save_overwrites_cache() {
        let path = temp_file(&interchange::to_json(&sample("From file")).unwrap());
        let mut loader = DatasetLoader::new(MemoryStore::new(), KEY, &path);

        loader.save(&sample("Imported")).unwrap();
        let (dataset, source) = loader.load().await.unwrap();
        assert_eq!(source, DataSource::Cache);
        assert_eq!(dataset[0].name, "Imported");

        loader.clear_cache().unwrap();
        let (dataset, _) = loader.load().await.unwrap();
        assert_eq!(dataset[0].name, "From file");
        let _ = std::fs::remove_file(path);
    }
}
