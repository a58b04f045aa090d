use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A catalog track as embedded in a favorites list or a playlist. Tracks
/// have no life of their own; they are created and destroyed with the
/// list entry that holds them.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "trackId")]
    pub track_id: String,
    #[serde(rename = "trackName")]
    pub track_name: String,
    #[serde(rename = "artistName")]
    pub artist_name: String,
    #[serde(rename = "albumImage", default)]
    pub album_image: Option<String>,
    #[serde(rename = "previewUrl", default)]
    pub preview_url: Option<String>,
}

/// The favorites list of a user document. `track_id` is unique within the
/// list; insertion order is preserved.
#[derive(PartialEq, Eq, Clone, Debug, Default, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Favorites(pub Vec<Track>);

impl Favorites {
    pub fn contains(&self, track_id: &str) -> bool {
        self.0.iter().any(|t| t.track_id == track_id)
    }

    /// Appends the track unless its id is already present. Returns false
    /// on a duplicate, leaving the list untouched.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(&track.track_id) {
            return false;
        }
        self.0.push(track);
        true
    }

    /// Removes every entry with the given id. Removing an absent id is a
    /// no-op.
    pub fn remove(&mut self, track_id: &str) {
        self.0.retain(|t| t.track_id != track_id);
    }
}
