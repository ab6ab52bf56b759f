/// Application state
use crate::config::PlayerConfig;
use crate::error::{AppError, Result};
use cadence_core::{MusicSource, SearchResults, Track};
use cadence_library::LibraryStore;
use cadence_playback::{
    BackendEvent, PlaybackController, SimulatedBackend, Transport, TransportEvent,
};
use cadence_sources::{Catalog, SourceRegistry};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

/// Owns every store the player works with
pub struct AppState {
    pub config: PlayerConfig,
    pub playback: PlaybackController<SimulatedBackend>,
    pub library: LibraryStore,
    pub sources: SourceRegistry,
    backend_events: UnboundedReceiver<BackendEvent>,
}

impl AppState {
    /// Validate `config` and build all stores over the demo catalog
    pub fn new(config: PlayerConfig) -> Result<Self> {
        config.validate()?;

        let catalog = Arc::new(Catalog::demo());
        let library = LibraryStore::from_catalog(&catalog);

        let mut sources = SourceRegistry::with_builtin(Arc::clone(&catalog), config.latency());
        sources.set_active_source(&config.sources.active_source)?;

        let (backend, backend_events) = SimulatedBackend::new();
        let transport = Transport::new(config.transport_config());
        let playback = PlaybackController::new(transport, backend)
            .with_auto_play_next(config.playback.auto_play_next);

        info!(
            active_source = %sources.active_id(),
            tracks = library.tracks().len(),
            "Application state ready"
        );

        Ok(Self {
            config,
            playback,
            library,
            sources,
            backend_events,
        })
    }

    /// Apply every pending backend notification
    ///
    /// Returns the number of notifications applied; stale ones are not counted.
    pub async fn pump_backend_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.backend_events.try_recv() {
            let before = self.playback.transport().current_track().map(|t| t.id.clone());
            if self.playback.handle_event(event).await {
                applied += 1;
            }
            self.record_if_changed(before);
        }
        applied
    }

    /// Start playing `track` and record it as recently played
    pub async fn play_track(&mut self, track: Track) {
        self.library.add_to_recently_played(track.clone());
        self.playback.set_current_track(track).await;
    }

    /// Skip forward, recording the new track
    pub async fn next(&mut self) -> bool {
        let changed = self.playback.play_next().await;
        self.record_current(changed);
        changed
    }

    /// Go back, recording the restored track
    pub async fn previous(&mut self) -> bool {
        let changed = self.playback.play_previous().await;
        self.record_current(changed);
        changed
    }

    fn record_if_changed(&mut self, before: Option<String>) {
        let after = self.playback.transport().current_track().map(|t| t.id.clone());
        self.record_current(after != before);
    }

    fn record_current(&mut self, changed: bool) {
        if !changed {
            return;
        }
        if let Some(track) = self.playback.transport().current_track().cloned() {
            debug!(track_id = %track.id, "Recording play");
            self.library.add_to_recently_played(track);
        }
    }

    /// Drain transport events into "now playing" lines for the user
    ///
    /// Events are always drained; with `interface.show_notifications` off
    /// nothing is returned.
    pub fn take_notifications(&mut self) -> Vec<String> {
        let events = self.playback.drain_events();
        if !self.config.interface.show_notifications {
            return Vec::new();
        }

        events
            .into_iter()
            .filter_map(|event| match event {
                TransportEvent::TrackChanged { track_id, .. } => Some(self.now_playing(&track_id)),
                _ => None,
            })
            .collect()
    }

    fn now_playing(&self, track_id: &str) -> String {
        let current = self
            .playback
            .transport()
            .current_track()
            .filter(|t| t.id == track_id);
        match current.or_else(|| self.library.track(track_id)) {
            Some(track) => format!("Now playing: {} - {}", track.artist, track.title),
            None => format!("Now playing: {}", track_id),
        }
    }

    /// Search one source by id, or every source when `source` is `None`
    pub async fn search(
        &self,
        query: &str,
        source: Option<&str>,
    ) -> Result<Vec<(String, SearchResults)>> {
        match source {
            Some(id) => {
                let source: &Arc<dyn MusicSource> = self
                    .sources
                    .get(id)
                    .ok_or_else(|| AppError::UnknownSource(id.to_string()))?;
                let results = source.search(query).await?;
                Ok(vec![(id.to_string(), results)])
            }
            None => Ok(self.sources.search_all(query).await),
        }
    }
}
