use async_trait::async_trait;
use sqlx::PgPool;

use crate::wines::repo_types::{NewWine, Wine, WineChanges};

#[async_trait]
pub trait WineRepo: Send + Sync {
    async fn list_by_user(&self, user_id: i32) -> anyhow::Result<Vec<Wine>>;
    async fn insert(&self, wine: NewWine) -> anyhow::Result<Wine>;
    async fn find_by_id(&self, wine_id: i32) -> anyhow::Result<Option<Wine>>;
    /// Returns the number of rows touched.
    async fn update(&self, wine_id: i32, changes: WineChanges) -> anyhow::Result<u64>;
    /// Returns the number of rows removed.
    async fn delete(&self, wine_id: i32) -> anyhow::Result<u64>;
}

#[derive(Clone)]
pub struct PgWineRepo {
    db: PgPool,
}

impl PgWineRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WineRepo for PgWineRepo {
    async fn list_by_user(&self, user_id: i32) -> anyhow::Result<Vec<Wine>> {
        let rows = sqlx::query_as::<_, Wine>(
            r#"
            SELECT wine_id, wine_name, winery, varietal, vintage, rating, notes, user_id
            FROM wines
            WHERE user_id = $1
            ORDER BY wine_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, wine: NewWine) -> anyhow::Result<Wine> {
        let wine = sqlx::query_as::<_, Wine>(
            r#"
            INSERT INTO wines (wine_name, winery, varietal, vintage, rating, notes, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING wine_id, wine_name, winery, varietal, vintage, rating, notes, user_id
            "#,
        )
        .bind(&wine.wine_name)
        .bind(&wine.winery)
        .bind(&wine.varietal)
        .bind(&wine.vintage)
        .bind(&wine.rating)
        .bind(&wine.notes)
        .bind(wine.user_id)
        .fetch_one(&self.db)
        .await?;
        Ok(wine)
    }

    async fn find_by_id(&self, wine_id: i32) -> anyhow::Result<Option<Wine>> {
        let wine = sqlx::query_as::<_, Wine>(
            r#"
            SELECT wine_id, wine_name, winery, varietal, vintage, rating, notes, user_id
            FROM wines
            WHERE wine_id = $1
            "#,
        )
        .bind(wine_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(wine)
    }

    async fn update(&self, wine_id: i32, changes: WineChanges) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE wines
            SET wine_name = COALESCE($2, wine_name),
                winery    = COALESCE($3, winery),
                varietal  = COALESCE($4, varietal),
                vintage   = COALESCE($5, vintage),
                rating    = COALESCE($6, rating),
                notes     = COALESCE($7, notes)
            WHERE wine_id = $1
            "#,
        )
        .bind(wine_id)
        .bind(changes.wine_name)
        .bind(changes.winery)
        .bind(changes.varietal)
        .bind(changes.vintage)
        .bind(changes.rating)
        .bind(changes.notes)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, wine_id: i32) -> anyhow::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM wines WHERE wine_id = $1"#)
            .bind(wine_id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected())
    }
}
