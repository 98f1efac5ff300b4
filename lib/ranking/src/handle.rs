//! Shared engine slot for catalog replacement
//!
//! Readers take an `Arc` snapshot of the current engine and query it without
//! holding the lock. Replacing the catalog builds a complete new engine first
//! and only then swaps the pointer, so a reader never observes a partially
//! rebuilt vector space.

use crate::engine::RankingEngine;
use parking_lot::RwLock;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use zapgenius_core::{Catalog, Result, TfIdfVectorizer};

#[derive(Debug, Clone)]
pub struct EngineHandle {
    current: Arc<RwLock<Arc<RankingEngine>>>,
}

impl EngineHandle {
    pub fn new(engine: RankingEngine) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(engine))),
        }
    }

    /// Snapshot of the engine currently published
    pub fn engine(&self) -> Arc<RankingEngine> {
        Arc::clone(&self.current.read())
    }

    /// Publish an already-built engine, returning the previous one
    pub fn replace(&self, engine: RankingEngine) -> Arc<RankingEngine> {
        let engine = Arc::new(engine);
        info!(templates = engine.len(), "catalog replaced");
        std::mem::replace(&mut *self.current.write(), engine)
    }

    /// Build an engine for `catalog` with the current engine's config and
    /// publish it. On error the current engine stays in place.
    pub fn replace_catalog(&self, catalog: Catalog) -> Result<Arc<RankingEngine>> {
        let current = self.engine();
        let vectorizer = TfIdfVectorizer::with_config(current.vectorizer_config().clone());
        let engine = RankingEngine::with_config(vectorizer, catalog, current.config().clone())?;
        Ok(self.replace(engine))
    }

    pub fn replace_records(&self, records: &[Value]) -> Result<Arc<RankingEngine>> {
        self.replace_catalog(Catalog::from_records(records)?)
    }

    pub fn replace_from_path(&self, path: impl AsRef<Path>) -> Result<Arc<RankingEngine>> {
        self.replace_catalog(Catalog::from_path(path)?)
    }
}

impl From<RankingEngine> for EngineHandle {
    fn from(engine: RankingEngine) -> Self {
        Self::new(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zapgenius_core::{Error, Template};

    fn handle() -> EngineHandle {
        let catalog = Catalog::new(vec![Template::new("Slack Alert"), Template::new("Gmail Backup")]);
        EngineHandle::new(RankingEngine::new(TfIdfVectorizer::new(), catalog).unwrap())
    }

    #[test]
    fn test_replace_records() {
        let handle = handle();
        let snapshot = handle.engine();

        let previous = handle
            .replace_records(&[json!({"title": "Jira Sync"})])
            .unwrap();

        assert!(Arc::ptr_eq(&previous, &snapshot));
        assert_eq!(handle.engine().len(), 1);
        // Old snapshot is untouched
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.recommend("slack", 1).unwrap()[0].zap, "Slack Alert");
    }

    #[test]
    fn test_failed_replace_keeps_engine() {
        let handle = handle();

        assert_eq!(handle.replace_records(&[]).unwrap_err(), Error::EmptyCatalog);
        assert!(matches!(handle.replace_records(&[json!(1)]), Err(Error::CatalogLoad(_))));
        assert_eq!(handle.engine().len(), 2);
    }

    #[test]
    fn test_clones_share_slot() {
        let handle = handle();
        let other = handle.clone();
        other.replace_records(&[json!({"title": "Jira Sync"})]).unwrap();
        assert_eq!(handle.engine().len(), 1);
    }
}
