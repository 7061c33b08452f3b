use serde::{Deserialize, Serialize};

use crate::sanitize::{escape_html, escape_opt};
use crate::wines::repo_types::{Wine, WineChanges};

#[derive(Debug, Default, Deserialize)]
pub struct CreateWineRequest {
    pub wine_name: Option<String>,
    pub winery: Option<String>,
    pub varietal: Option<String>,
    pub vintage: Option<String>,
    pub rating: Option<String>,
    pub notes: Option<String>,
    pub user_id: Option<i32>,
}

/// PATCH body; `wine_id` and `user_id` are not updatable and are ignored.
///
/// An explicit `null` reads the same as an omitted field and leaves the
/// stored value unchanged, so `vintage` and `notes` cannot be cleared here.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateWineRequest {
    pub wine_name: Option<String>,
    pub winery: Option<String>,
    pub varietal: Option<String>,
    pub vintage: Option<String>,
    pub rating: Option<String>,
    pub notes: Option<String>,
}

impl UpdateWineRequest {
    pub fn values(&self) -> [Option<&str>; 6] {
        [
            self.wine_name.as_deref(),
            self.winery.as_deref(),
            self.varietal.as_deref(),
            self.vintage.as_deref(),
            self.rating.as_deref(),
            self.notes.as_deref(),
        ]
    }
}

impl From<UpdateWineRequest> for WineChanges {
    fn from(r: UpdateWineRequest) -> Self {
        Self {
            wine_name: r.wine_name,
            winery: r.winery,
            varietal: r.varietal,
            vintage: r.vintage,
            rating: r.rating,
            notes: r.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WineQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Sanitized wine as returned to clients.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WineResponse {
    pub wine_id: i32,
    pub wine_name: String,
    pub winery: String,
    pub varietal: String,
    pub vintage: Option<String>,
    pub rating: String,
    pub notes: Option<String>,
    pub user_id: i32,
}

impl From<Wine> for WineResponse {
    fn from(w: Wine) -> Self {
        Self {
            wine_id: w.wine_id,
            wine_name: escape_html(&w.wine_name),
            winery: escape_html(&w.winery),
            varietal: escape_html(&w.varietal),
            vintage: escape_opt(w.vintage.as_deref()),
            rating: escape_html(&w.rating),
            notes: escape_opt(w.notes.as_deref()),
            user_id: w.user_id,
        }
    }
}
