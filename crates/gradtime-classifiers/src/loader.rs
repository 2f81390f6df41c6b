//! Artifact loading and process-lifetime memoization.
//!
//! The classifier is serialized by the external `gbdt` crate; this module
//! treats the file as opaque beyond handing it to that crate's serde
//! format. `ModelCache` holds the outcome of the first load for the rest of
//! the process, so repeated lookups never touch storage again.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use gbdt::gradient_boost::GBDT;

use crate::error::ModelError;
use crate::models::classifier_trait::Classifier;
use crate::models::gbdt::GbdtClassifier;

/// Conventional artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model_graduation.json";

/// Read and deserialize the classifier artifact at `path`.
pub fn load_classifier<P: AsRef<Path>>(path: P) -> Result<GbdtClassifier, ModelError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ModelError::NotFound(path.to_path_buf())
        } else {
            ModelError::Unreadable(path.to_path_buf(), e.to_string())
        }
    })?;

    let model: GBDT = serde_json::from_str(&content)
        .map_err(|e| ModelError::Unreadable(path.to_path_buf(), e.to_string()))?;

    log::info!("loaded classifier artifact from {}", path.display());
    Ok(GbdtClassifier::new(model))
}

/// Lazily-initialized, process-wide holder for the loaded classifier.
///
/// The first `get` performs the load and caches the result, success or
/// failure, for the lifetime of the cache; later calls return the identical
/// handle (or the identical error) without re-reading storage. A cached
/// failure is the "no model available" sentinel: callers must suppress the
/// prediction surface entirely rather than retry.
pub struct ModelCache {
    path: PathBuf,
    slot: OnceLock<Result<Arc<dyn Classifier + Send + Sync>, ModelError>>,
}

impl ModelCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ModelCache {
            path: path.into(),
            slot: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The shared classifier handle, loading it on first access.
    pub fn get(&self) -> Result<Arc<dyn Classifier + Send + Sync>, ModelError> {
        self.slot
            .get_or_init(|| {
                load_classifier(&self.path)
                    .map(|c| Arc::new(c) as Arc<dyn Classifier + Send + Sync>)
                    .map_err(|e| {
                        log::error!("classifier unavailable: {}", e);
                        e
                    })
            })
            .clone()
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        ModelCache::new(DEFAULT_MODEL_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_artifact_reports_not_found() {
        let err = load_classifier("no_such_model.json").unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn garbage_artifact_reports_unreadable_with_cause() {
        let path = std::env::temp_dir().join("gradtime_garbage_artifact.json");
        fs::write(&path, "not a model").unwrap();
        let err = load_classifier(&path).unwrap_err();
        fs::remove_file(&path).ok();
        match err {
            ModelError::Unreadable(p, cause) => {
                assert_eq!(p, path);
                assert!(!cause.is_empty());
            }
            other => panic!("expected Unreadable, got {:?}", other),
        }
    }

    #[test]
    fn cache_memoizes_the_failure_sentinel() {
        let cache = ModelCache::new("no_such_model.json");
        let first = cache.get();
        let second = cache.get();
        assert!(matches!(first, Err(ModelError::NotFound(_))));
        assert!(matches!(second, Err(ModelError::NotFound(_))));
    }
}
