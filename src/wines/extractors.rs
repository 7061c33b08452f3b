use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::{error::ApiError, state::AppState, wines::repo_types::Wine, wines::services};

/// Resolves `/wines/:id` to a stored wine or rejects with 404.
///
/// Runs once ahead of GET, DELETE and PATCH, and before the PATCH body is read.
pub struct ExistingWine(pub Wine);

#[async_trait]
impl FromRequestParts<AppState> for ExistingWine {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(wine_id) = Path::<i32>::from_request_parts(parts, state).await?;
        let wine = services::fetch_existing(state.wines.as_ref(), wine_id).await?;
        Ok(ExistingWine(wine))
    }
}
