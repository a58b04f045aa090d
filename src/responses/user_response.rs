use sea_orm::prelude::Uuid;
use serde::Serialize;

use entities::playlist::Playlist;
use entities::track::Track;
use entities::user;

#[derive(Serialize, Clone)]
pub struct FavoritesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub favorites: Vec<Track>,
}

impl FavoritesResponse {
    pub fn with_message(message: &str, favorites: Vec<Track>) -> Self {
        Self {
            message: Some(message.to_string()),
            favorites,
        }
    }

    pub fn from_list(favorites: Vec<Track>) -> Self {
        Self {
            message: None,
            favorites,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct PlaylistsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub playlists: Vec<Playlist>,
}

impl PlaylistsResponse {
    pub fn with_message(message: &str, playlists: Vec<Playlist>) -> Self {
        Self {
            message: Some(message.to_string()),
            playlists,
        }
    }

    pub fn from_list(playlists: Vec<Playlist>) -> Self {
        Self {
            message: None,
            playlists,
        }
    }
}

#[derive(Serialize, Clone)]
pub struct PlaylistResponse {
    pub message: String,
    pub playlist: Playlist,
}

impl PlaylistResponse {
    pub fn with_message(message: &str, playlist: Playlist) -> Self {
        Self {
            message: message.to_string(),
            playlist,
        }
    }
}

/// Public view of a user: everything except the credential and the
/// nested collections.
#[derive(Serialize, Clone)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl From<&user::Model> for UserSummary {
    fn from(user: &user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name.to_owned(),
            email: user.email.to_owned(),
            avatar: user.avatar.to_owned(),
        }
    }
}

#[derive(Serialize, Clone)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserSummary,
}
