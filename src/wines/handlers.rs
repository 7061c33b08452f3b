use axum::{
    extract::{
        rejection::QueryRejection,
        OriginalUri, Query, State,
    },
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::Authorized,
    body::JsonBody,
    error::ApiResult,
    state::AppState,
    wines::{
        dto::{CreateWineRequest, UpdateWineRequest, WineQuery, WineResponse},
        extractors::ExistingWine,
        services,
    },
};

pub fn wine_routes() -> Router<AppState> {
    Router::new()
        .route("/wines", get(list_wines).post(create_wine))
        .route(
            "/wines/:id",
            get(get_wine).delete(delete_wine).patch(update_wine),
        )
}

#[instrument(skip(state, query))]
pub async fn list_wines(
    State(state): State<AppState>,
    _auth: Authorized,
    query: Result<Query<WineQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<WineResponse>>> {
    let Query(query) = query?;
    let wines = services::list_by_user(state.wines.as_ref(), query.user_id.as_deref()).await?;
    Ok(Json(wines.into_iter().map(WineResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_wine(
    State(state): State<AppState>,
    _auth: Authorized,
    OriginalUri(uri): OriginalUri,
    JsonBody(payload): JsonBody<CreateWineRequest>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<WineResponse>)> {
    let wine = services::create(state.wines.as_ref(), payload).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), wine.wine_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WineResponse::from(wine)),
    ))
}

#[instrument(skip_all)]
pub async fn get_wine(_auth: Authorized, ExistingWine(wine): ExistingWine) -> Json<WineResponse> {
    Json(WineResponse::from(wine))
}

#[instrument(skip_all)]
pub async fn delete_wine(
    State(state): State<AppState>,
    _auth: Authorized,
    ExistingWine(wine): ExistingWine,
) -> ApiResult<StatusCode> {
    services::delete(state.wines.as_ref(), &wine).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip_all)]
pub async fn update_wine(
    State(state): State<AppState>,
    _auth: Authorized,
    ExistingWine(wine): ExistingWine,
    JsonBody(payload): JsonBody<UpdateWineRequest>,
) -> ApiResult<StatusCode> {
    services::update(state.wines.as_ref(), &wine, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}
