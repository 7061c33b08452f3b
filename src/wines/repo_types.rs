use sqlx::FromRow;

/// Wine record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Wine {
    pub wine_id: i32,
    pub wine_name: String,
    pub winery: String,
    pub varietal: String,
    pub vintage: Option<String>,
    pub rating: String,
    pub notes: Option<String>,
    pub user_id: i32, // owner
}

#[derive(Debug, Clone)]
pub struct NewWine {
    pub wine_name: String,
    pub winery: String,
    pub varietal: String,
    pub vintage: Option<String>,
    pub rating: String,
    pub notes: Option<String>,
    pub user_id: i32,
}

/// Partial update: `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WineChanges {
    pub wine_name: Option<String>,
    pub winery: Option<String>,
    pub varietal: Option<String>,
    pub vintage: Option<String>,
    pub rating: Option<String>,
    pub notes: Option<String>,
}
