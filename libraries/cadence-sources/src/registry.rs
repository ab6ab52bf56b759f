//! Ordered collection of music sources with an active selection

use crate::catalog::Catalog;
use crate::mock::{Latency, MockSource};
use crate::profile::SourceProfile;
use cadence_core::{CadenceError, MusicSource, Result, SearchResults};
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Source used when nothing else is selected
pub const DEFAULT_ACTIVE_SOURCE: &str = "local";

/// Registry of music sources keyed by id
///
/// Keeps registration order. Sources are shared (`Arc`) so searches can run
/// against several of them at once.
pub struct SourceRegistry {
    sources: Vec<Arc<dyn MusicSource>>,
    active: String,
}

impl SourceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            active: DEFAULT_ACTIVE_SOURCE.to_string(),
        }
    }

    /// Registry with the four simulated providers over one shared catalog
    pub fn with_builtin(catalog: Arc<Catalog>, latency: Latency) -> Self {
        let mut registry = Self::new();
        for profile in SourceProfile::builtin() {
            registry.register(Arc::new(MockSource::new(
                profile,
                Arc::clone(&catalog),
                latency,
            )));
        }
        registry
    }

    /// Add a source, replacing any source with the same id in place
    pub fn register(&mut self, source: Arc<dyn MusicSource>) {
        match self.sources.iter().position(|s| s.id() == source.id()) {
            Some(index) => {
                debug!(source = %source.id(), "Replacing registered source");
                self.sources[index] = source;
            }
            None => {
                debug!(source = %source.id(), "Registered source");
                self.sources.push(source);
            }
        }
    }

    /// Look up a source by id
    pub fn get(&self, id: &str) -> Option<&Arc<dyn MusicSource>> {
        self.sources.iter().find(|s| s.id() == id)
    }

    /// Source ids in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn MusicSource>> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Currently selected source, if it is registered
    pub fn active(&self) -> Option<&Arc<dyn MusicSource>> {
        self.get(&self.active)
    }

    /// Id of the selected source
    pub fn active_id(&self) -> &str {
        &self.active
    }

    /// Select the active source
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an id that is not registered.
    pub fn set_active_source(&mut self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            return Err(CadenceError::not_found("Source", id));
        }
        info!(source = %id, "Active source changed");
        self.active = id.to_string();
        Ok(())
    }

    /// Authenticate one source by id
    pub async fn authenticate_source(&self, id: &str) -> Result<()> {
        let source = self
            .get(id)
            .ok_or_else(|| CadenceError::not_found("Source", id))?;
        source.authenticate().await
    }

    /// Search every source concurrently
    ///
    /// Results come back in registration order. Sources whose search fails
    /// are logged and left out.
    pub async fn search_all(&self, query: &str) -> Vec<(String, SearchResults)> {
        let searches = self.sources.iter().map(|source| async move {
            (source.id().to_string(), source.search(query).await)
        });

        join_all(searches)
            .await
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(results) => Some((id, results)),
                Err(e) => {
                    warn!(source = %id, error = %e, "Search failed");
                    None
                }
            })
            .collect()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SourceRegistry {
        SourceRegistry::with_builtin(Arc::new(Catalog::demo()), Latency::none())
    }

    #[test]
    fn builtin_registration_order() {
        let registry = registry();
        assert_eq!(
            registry.ids(),
            vec!["spotify", "youtube-music", "soundcloud", "local"]
        );
        assert_eq!(registry.active_id(), "local");
        assert!(registry.active().is_some());
    }

    #[test]
    fn unknown_active_source_is_rejected() {
        let mut registry = registry();
        let err = registry.set_active_source("napster").unwrap_err();
        assert!(matches!(err, CadenceError::NotFound { .. }));
        assert_eq!(registry.active_id(), "local");

        registry.set_active_source("spotify").unwrap();
        assert_eq!(registry.active_id(), "spotify");
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = registry();
        let replacement = MockSource::new(
            SourceProfile::soundcloud(),
            Arc::new(Catalog::default()),
            Latency::none(),
        );
        registry.register(Arc::new(replacement));

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.ids()[2], "soundcloud");
    }
}
