use axum::{
    extract::{OriginalUri, State},
    http::{header, HeaderName, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::Authorized,
    body::JsonBody,
    error::ApiResult,
    state::AppState,
    users::{
        dto::{CreateUserRequest, LoginRequest, UserResponse, UsernameResponse},
        services,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/login", post(login))
        .route("/users/usernames", get(list_usernames))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    _auth: Authorized,
    OriginalUri(uri): OriginalUri,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<UserResponse>)> {
    let user = services::create_account(state.users.as_ref(), payload).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), user.user_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    _auth: Authorized,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = services::authenticate(state.users.as_ref(), payload).await?;
    Ok(Json(UserResponse::from(user)))
}

#[instrument(skip(state))]
pub async fn list_usernames(
    State(state): State<AppState>,
    _auth: Authorized,
) -> ApiResult<Json<Vec<UsernameResponse>>> {
    let names = services::list_usernames(state.users.as_ref()).await?;
    Ok(Json(
        names
            .iter()
            .map(|n| UsernameResponse::sanitized(n))
            .collect(),
    ))
}
