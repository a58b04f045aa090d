//! Melody — REST backend for a music app: per-user favorites, playlists
//! and profile, behind a credential-checking middleware.

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::auth_middleware::auth_middleware;
use crate::endpoint_handlers::{
    add_favorite, add_playlist_track, create_playlist, delete_playlist, get_favorites,
    get_playlists, health, index, remove_favorite, remove_playlist_track, route_not_found,
    update_playlist, update_profile,
};
use crate::error::handle_panic;

pub mod auth_middleware;
pub mod endpoint_handlers;
pub mod error;
pub mod responses;

#[derive(Clone)]
pub struct DatabaseState {
    pub connection: DatabaseConnection,
}

pub fn app(state: DatabaseState) -> Router {
    let user_routes: Router<DatabaseState> = Router::new()
        .route("/favorites", post(add_favorite).get(get_favorites))
        .route("/favorites/:track_id", delete(remove_favorite))
        .route("/playlists", post(create_playlist).get(get_playlists))
        .route(
            "/playlists/:playlist_id",
            put(update_playlist).delete(delete_playlist),
        )
        .route("/playlists/:playlist_id/tracks", post(add_playlist_track))
        .route(
            "/playlists/:playlist_id/tracks/:track_id",
            delete(remove_playlist_track),
        )
        .route("/profile", put(update_profile))
        .layer(middleware::from_fn_with_state(
            state.to_owned(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .nest("/api/user", user_routes)
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
