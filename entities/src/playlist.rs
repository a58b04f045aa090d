use chrono::{NaiveDateTime, Utc};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::track::Track;

/// A playlist embedded in a user document. The id is minted when the
/// playlist is appended and is unique within that user's collection;
/// `track_id` is unique within `tracks` only, not across playlists.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tracks: Vec<Track>,
    pub created: NaiveDateTime,
}

impl Playlist {
    pub fn new(name: String, description: Option<String>) -> Self {
        Playlist {
            id: Uuid::new_v4(),
            name,
            description,
            tracks: Vec::new(),
            created: Utc::now().naive_utc(),
        }
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.iter().any(|t| t.track_id == track_id)
    }

    /// Appends the track unless its id is already present in this
    /// playlist. Returns false on a duplicate, leaving the list untouched.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.contains(&track.track_id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Removes every entry with the given id. Removing an absent id is a
    /// no-op.
    pub fn remove_track(&mut self, track_id: &str) {
        self.tracks.retain(|t| t.track_id != track_id);
    }
}

/// The playlists collection of a user document, looked up by playlist id.
#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Playlists(pub Vec<Playlist>);

impl Playlists {
    pub fn push(&mut self, playlist: Playlist) {
        self.0.push(playlist);
    }

    pub fn find(&self, id: Uuid) -> Option<&Playlist> {
        self.0.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Playlist> {
        self.0.iter_mut().find(|p| p.id == id)
    }

    /// Removes the playlist with the given id. Removing an absent id is a
    /// no-op.
    pub fn remove(&mut self, id: Uuid) {
        self.0.retain(|p| p.id != id);
    }
}
