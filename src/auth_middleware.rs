use axum::extract::{FromRequestParts, Query, Request, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use md5::{Digest, Md5};
use sea_orm::prelude::Uuid;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Deserialize;

use entities::prelude::User;
use entities::user;

use crate::error::ApiError;
use crate::DatabaseState;

/// Credential query parameters: `u` is the account email, `t` is
/// `md5(password + s)` for a client-chosen salt `s`.
#[derive(Deserialize, Clone)]
pub struct Auth {
    u: String,
    t: String,
    s: String,
}

impl Default for Auth {
    fn default() -> Self {
        Auth {
            u: "".to_string(),
            t: "".to_string(),
            s: "".to_string(),
        }
    }
}

/// The identity resolved by `auth_middleware`, available to handlers as an
/// extractor.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Uuid);

impl AuthenticatedUser {
    pub fn user_id(&self) -> Uuid {
        self.0
    }
}

pub async fn auth_middleware(
    State(state): State<DatabaseState>,
    auth: Option<Query<Auth>>,
    mut request: Request,
    next: Next,
) -> Response {
    let owned_auth = auth.unwrap_or_default().to_owned();
    let user_result = User::find()
        .filter(user::Column::Email.eq(&owned_auth.u))
        .one(&state.connection)
        .await;
    if let Err(err) = user_result {
        error!("Error in database connection: {}", err);
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let user_option = user_result.unwrap();
    if user_option.is_none() {
        warn!("User doesn't exist: {}", &owned_auth.u);
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let user = user_option.unwrap();

    let mut hasher = Md5::new();
    hasher.update(user.password + &*owned_auth.s);
    let result = hasher.finalize();
    if !owned_auth.t.eq(&format!("{:x}", result)) {
        warn!("Wrong credential for user {}", &owned_auth.u);
        return StatusCode::UNAUTHORIZED.into_response();
    }

    request.extensions_mut().insert(AuthenticatedUser(user.id));

    // Carry on my wayward son
    next.run(request).await
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }
}
