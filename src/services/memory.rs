use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{TrackService, TrackServiceError};
use crate::models::track::Track;

/// Process-local track store.
///
/// The whole collection lives in a `BTreeMap` behind an async `RwLock`, so
/// every operation is atomic with respect to the map and reads iterate in
/// ascending id order.
#[derive(Default)]
pub struct InMemoryTrackService {
    tracks: RwLock<BTreeMap<i32, Track>>,
}

impl InMemoryTrackService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackService for InMemoryTrackService {
    async fn save_track(&self, track: Track) -> Result<Track, TrackServiceError> {
        let mut tracks = self.tracks.write().await;
        if tracks.contains_key(&track.track_id) {
            return Err(TrackServiceError::AlreadyExists(track.track_id));
        }

        tracing::debug!(id = track.track_id, name = %track.track_name, "saving track");
        tracks.insert(track.track_id, track.clone());
        Ok(track)
    }

    async fn get_track(&self, id: i32) -> Result<Track, TrackServiceError> {
        let tracks = self.tracks.read().await;
        tracks.get(&id).cloned().ok_or(TrackServiceError::NotFound(id))
    }

    async fn get_all_tracks(&self) -> Vec<Track> {
        self.tracks.read().await.values().cloned().collect()
    }

    async fn search_track_by_name(&self, name: &str) -> Result<Vec<Track>, TrackServiceError> {
        let tracks = self.tracks.read().await;
        let matches: Vec<Track> = tracks
            .values()
            .filter(|track| track.track_name == name)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(TrackServiceError::NameNotFound(name.to_string()));
        }
        Ok(matches)
    }

    async fn delete_track_by_id(&self, id: i32) -> Result<Track, TrackServiceError> {
        let mut tracks = self.tracks.write().await;
        tracing::debug!(id, "deleting track");
        tracks.remove(&id).ok_or(TrackServiceError::NotFound(id))
    }

    async fn delete_all_tracks(&self) {
        let mut tracks = self.tracks.write().await;
        tracing::debug!(count = tracks.len(), "deleting all tracks");
        tracks.clear();
    }

    async fn update_track_by_id(
        &self,
        id: i32,
        mut track: Track,
    ) -> Result<Track, TrackServiceError> {
        let mut tracks = self.tracks.write().await;
        if !tracks.contains_key(&id) {
            return Err(TrackServiceError::NotFound(id));
        }

        // Identifier is immutable; the caller-supplied id is authoritative
        track.track_id = id;
        tracing::debug!(id, "updating track");
        tracks.insert(id, track.clone());
        Ok(track)
    }
}
