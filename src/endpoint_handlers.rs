use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use entities::playlist::Playlist;
use entities::track::Track;
use entities::user;

use crate::auth_middleware::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::responses::responses::{HealthResponse, IndexEndpoints, IndexResponse, MessageResponse};
use crate::responses::user_response::{
    FavoritesResponse, PlaylistResponse, PlaylistsResponse, ProfileResponse, UserSummary,
};
use crate::DatabaseState;

#[derive(Deserialize)]
pub struct TrackPayload {
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

impl From<TrackPayload> for Track {
    fn from(payload: TrackPayload) -> Self {
        Track {
            track_id: payload.track_id,
            track_name: payload.track_name,
            artist_name: payload.artist_name,
            album_image: payload.album_image,
            preview_url: payload.preview_url,
        }
    }
}

#[derive(Deserialize)]
pub struct CreatePlaylistPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdatePlaylistPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

#[derive(Deserialize)]
pub struct UpdateProfilePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub avatar: Option<Option<String>>,
}

/// Keeps absent and explicit-null fields apart: absent stays `None`, null
/// becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The authenticated id was just resolved against this store, so a missing
/// document is an anomaly, not a client error.
async fn load_user(state: &DatabaseState, id: Uuid) -> ApiResult<user::Model> {
    queries::get_user_by_id(&state.connection, id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("authenticated user {} missing from store", id)))
}

pub async fn add_favorite(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Json(payload): Json<TrackPayload>,
) -> ApiResult<Json<FavoritesResponse>> {
    let mut user = load_user(&state, auth.user_id()).await?;
    if !user.favorites.add(Track::from(payload)) {
        return Err(ApiError::BadRequest("Track already in favorites".to_string()));
    }
    let user = queries::update_user(&state.connection, user).await?;
    Ok(Json(FavoritesResponse::with_message(
        "Track added to favorites",
        user.favorites.0,
    )))
}

pub async fn remove_favorite(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Path(track_id): Path<String>,
) -> ApiResult<Json<FavoritesResponse>> {
    let mut user = load_user(&state, auth.user_id()).await?;
    user.favorites.remove(&track_id);
    let user = queries::update_user(&state.connection, user).await?;
    Ok(Json(FavoritesResponse::with_message(
        "Track removed from favorites",
        user.favorites.0,
    )))
}

pub async fn get_favorites(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
) -> ApiResult<Json<FavoritesResponse>> {
    let user = load_user(&state, auth.user_id()).await?;
    Ok(Json(FavoritesResponse::from_list(user.favorites.0)))
}

pub async fn create_playlist(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Json(payload): Json<CreatePlaylistPayload>,
) -> ApiResult<(StatusCode, Json<PlaylistsResponse>)> {
    let name = payload.name.unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Playlist name is required".to_string()));
    }
    let mut user = load_user(&state, auth.user_id()).await?;
    user.playlists.push(Playlist::new(name, payload.description));
    let user = queries::update_user(&state.connection, user).await?;
    Ok((
        StatusCode::CREATED,
        Json(PlaylistsResponse::with_message(
            "Playlist created",
            user.playlists.0,
        )),
    ))
}

pub async fn get_playlists(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
) -> ApiResult<Json<PlaylistsResponse>> {
    let user = load_user(&state, auth.user_id()).await?;
    Ok(Json(PlaylistsResponse::from_list(user.playlists.0)))
}

pub async fn update_playlist(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Path(playlist_id): Path<Uuid>,
    Json(payload): Json<UpdatePlaylistPayload>,
) -> ApiResult<Json<PlaylistResponse>> {
    let mut user = load_user(&state, auth.user_id()).await?;
    let playlist = user
        .playlists
        .find_mut(playlist_id)
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;
    if let Some(name) = payload.name.as_deref() {
        if !name.is_empty() {
            playlist.name = name.to_string();
        }
    }
    if let Some(description) = payload.description {
        playlist.description = description;
    }
    let user = queries::update_user(&state.connection, user).await?;
    let playlist = persisted_playlist(&user, playlist_id)?;
    Ok(Json(PlaylistResponse::with_message(
        "Playlist updated",
        playlist,
    )))
}

pub async fn delete_playlist(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Path(playlist_id): Path<Uuid>,
) -> ApiResult<Json<PlaylistsResponse>> {
    let mut user = load_user(&state, auth.user_id()).await?;
    user.playlists.remove(playlist_id);
    let user = queries::update_user(&state.connection, user).await?;
    Ok(Json(PlaylistsResponse::with_message(
        "Playlist deleted",
        user.playlists.0,
    )))
}

pub async fn add_playlist_track(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Path(playlist_id): Path<Uuid>,
    Json(payload): Json<TrackPayload>,
) -> ApiResult<Json<PlaylistResponse>> {
    let mut user = load_user(&state, auth.user_id()).await?;
    let playlist = user
        .playlists
        .find_mut(playlist_id)
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;
    if !playlist.add_track(Track::from(payload)) {
        return Err(ApiError::BadRequest("Track already in playlist".to_string()));
    }
    let user = queries::update_user(&state.connection, user).await?;
    let playlist = persisted_playlist(&user, playlist_id)?;
    Ok(Json(PlaylistResponse::with_message(
        "Track added to playlist",
        playlist,
    )))
}

pub async fn remove_playlist_track(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Path((playlist_id, track_id)): Path<(Uuid, String)>,
) -> ApiResult<Json<PlaylistResponse>> {
    let mut user = load_user(&state, auth.user_id()).await?;
    let playlist = user
        .playlists
        .find_mut(playlist_id)
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;
    playlist.remove_track(&track_id);
    let user = queries::update_user(&state.connection, user).await?;
    let playlist = persisted_playlist(&user, playlist_id)?;
    Ok(Json(PlaylistResponse::with_message(
        "Track removed from playlist",
        playlist,
    )))
}

pub async fn update_profile(
    State(state): State<DatabaseState>,
    auth: AuthenticatedUser,
    Json(payload): Json<UpdateProfilePayload>,
) -> ApiResult<Json<ProfileResponse>> {
    let mut user = load_user(&state, auth.user_id()).await?;
    if let Some(name) = payload.name.as_deref() {
        if !name.is_empty() {
            user.name = name.to_string();
        }
    }
    if let Some(avatar) = payload.avatar {
        user.avatar = avatar;
    }
    let user = queries::update_user(&state.connection, user).await?;
    Ok(Json(ProfileResponse {
        message: "Profile updated".to_string(),
        user: UserSummary::from(&user),
    }))
}

/// Responses always reflect what the store returned from the save.
fn persisted_playlist(user: &user::Model, playlist_id: Uuid) -> ApiResult<Playlist> {
    user.playlists
        .find(playlist_id)
        .cloned()
        .ok_or_else(|| ApiError::Internal(format!("playlist {} missing after update", playlist_id)))
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Melody Music API".to_string(),
        endpoints: IndexEndpoints {
            health: "/api/health".to_string(),
            user: "/api/user".to_string(),
        },
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Melody API is running".to_string(),
    })
}

pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Route not found".to_string(),
        }),
    )
}
