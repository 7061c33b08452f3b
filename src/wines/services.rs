use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    validation::{is_truthy, require_any, require_fields},
    wines::{
        dto::{CreateWineRequest, UpdateWineRequest},
        repo::WineRepo,
        repo_types::{NewWine, Wine},
    },
};

const EMPTY_UPDATE: &str = "Request body must contain at least one of 'wine_name', 'winery', \
                            'varietal', 'vintage', 'rating', or 'notes'";

pub async fn list_by_user(repo: &dyn WineRepo, user_id: Option<&str>) -> ApiResult<Vec<Wine>> {
    if !is_truthy(user_id) {
        warn!("wine list without userId");
        return Err(ApiError::validation("Query must contain 'userId'"));
    }
    let user_id = user_id
        .unwrap_or_default()
        .parse::<i32>()
        .map_err(|_| ApiError::validation("Query 'userId' must be an integer"))?;
    Ok(repo.list_by_user(user_id).await?)
}

/// Existence gate for the single-wine routes.
pub async fn fetch_existing(repo: &dyn WineRepo, wine_id: i32) -> ApiResult<Wine> {
    match repo.find_by_id(wine_id).await? {
        Some(wine) => Ok(wine),
        None => {
            warn!(wine_id, "wine not found");
            Err(ApiError::not_found("Wine doesn't exist"))
        }
    }
}

pub async fn create(repo: &dyn WineRepo, req: CreateWineRequest) -> ApiResult<Wine> {
    require_fields([
        ("wine_name", req.wine_name.is_some()),
        ("winery", req.winery.is_some()),
        ("varietal", req.varietal.is_some()),
        ("rating", req.rating.is_some()),
        ("user_id", req.user_id.is_some()),
    ])?;

    let wine = repo
        .insert(NewWine {
            wine_name: req.wine_name.unwrap_or_default(),
            winery: req.winery.unwrap_or_default(),
            varietal: req.varietal.unwrap_or_default(),
            vintage: req.vintage,
            rating: req.rating.unwrap_or_default(),
            notes: req.notes,
            user_id: req.user_id.unwrap_or_default(),
        })
        .await?;
    info!(wine_id = wine.wine_id, user_id = wine.user_id, "wine created");
    Ok(wine)
}

/// `wine` must come from [`fetch_existing`].
pub async fn delete(repo: &dyn WineRepo, wine: &Wine) -> ApiResult<()> {
    repo.delete(wine.wine_id).await?;
    info!(wine_id = wine.wine_id, "wine deleted");
    Ok(())
}

/// Applies only the supplied fields. `wine` must come from [`fetch_existing`].
pub async fn update(repo: &dyn WineRepo, wine: &Wine, req: UpdateWineRequest) -> ApiResult<()> {
    require_any(req.values(), EMPTY_UPDATE)?;
    let rows = repo.update(wine.wine_id, req.into()).await?;
    info!(wine_id = wine.wine_id, rows, "wine updated");
    Ok(())
}
