use std::sync::Arc;

use async_trait::async_trait;

use crate::models::track::Track;

pub mod memory;

#[derive(Debug, thiserror::Error)]
pub enum TrackServiceError {
    #[error("Track already exists: {0}")]
    AlreadyExists(i32),
    #[error("Track not found: {0}")]
    NotFound(i32),
    #[error("No tracks found with name: {0}")]
    NameNotFound(String),
}

/// Persistence collaborator for the track collection.
///
/// Handlers depend on this trait only; the concrete store is chosen at
/// startup and shared behind an `Arc`.
#[async_trait]
pub trait TrackService: Send + Sync {
    /// Persist a new track. Fails when the id is already taken.
    async fn save_track(&self, track: Track) -> Result<Track, TrackServiceError>;

    /// Look up a single track by id.
    async fn get_track(&self, id: i32) -> Result<Track, TrackServiceError>;

    /// Every stored track, in the store's iteration order.
    async fn get_all_tracks(&self) -> Vec<Track>;

    /// All tracks whose name matches exactly. Fails when none do.
    async fn search_track_by_name(&self, name: &str) -> Result<Vec<Track>, TrackServiceError>;

    /// Remove a track by id, returning its prior representation.
    async fn delete_track_by_id(&self, id: i32) -> Result<Track, TrackServiceError>;

    /// Remove every track.
    async fn delete_all_tracks(&self);

    /// Replace the stored attributes of the track with this id. The stored
    /// identifier is immutable: `id` wins over any id in `track`.
    async fn update_track_by_id(&self, id: i32, track: Track)
        -> Result<Track, TrackServiceError>;
}

pub type SharedTrackService = Arc<dyn TrackService>;
