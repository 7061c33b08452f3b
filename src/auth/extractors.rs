use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::state::AppState;

/// Passes only when the request carries `Authorization: Bearer <API_TOKEN>`.
///
/// Place it before any body or path extractor so unauthenticated requests
/// never reach validation or storage.
#[derive(Debug)]
pub struct Authorized;

/// Auth failures use a flat `{"error": "..."}` body, unlike service errors.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized request" })),
        )
            .into_response()
    }
}

/// Compares fixed-length digests without early exit, so timing does not
/// depend on how much of the token matched.
fn tokens_match(supplied: &str, expected: &str) -> bool {
    let a = Sha256::digest(supplied.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[async_trait]
impl FromRequestParts<AppState> for Authorized {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                warn!("missing Authorization header");
                AuthRejection
            })?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or_else(|| {
                warn!("invalid auth scheme");
                AuthRejection
            })?;

        if !tokens_match(token, &state.config.api_token) {
            warn!("invalid api token");
            return Err(AuthRejection);
        }

        Ok(Authorized)
    }
}
