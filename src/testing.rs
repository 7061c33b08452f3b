//! In-memory repositories and request helpers shared by the test modules.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::{
    users::{
        repo::UserRepo,
        repo_types::{NewUser, User},
    },
    wines::{
        repo::WineRepo,
        repo_types::{NewWine, Wine, WineChanges},
    },
};

pub const TEST_TOKEN: &str = "test-api-token";

/// Rows kept in insertion order, ids handed out from 1 like an identity column.
#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepo for MemoryUsers {
    async fn insert(&self, user: NewUser) -> anyhow::Result<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.username == user.username) {
            anyhow::bail!("duplicate key value violates unique constraint \"users_username_key\"");
        }
        let user = User {
            user_id: rows.iter().map(|u| u.user_id).max().unwrap_or(0) + 1,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            password: user.password,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }

    async fn list_usernames(&self) -> anyhow::Result<Vec<String>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().map(|u| u.username.clone()).collect())
    }
}

impl WineChanges {
    fn apply_to(self, wine: &mut Wine) {
        if let Some(v) = self.wine_name {
            wine.wine_name = v;
        }
        if let Some(v) = self.winery {
            wine.winery = v;
        }
        if let Some(v) = self.varietal {
            wine.varietal = v;
        }
        if let Some(v) = self.vintage {
            wine.vintage = Some(v);
        }
        if let Some(v) = self.rating {
            wine.rating = v;
        }
        if let Some(v) = self.notes {
            wine.notes = Some(v);
        }
    }
}

#[derive(Default)]
pub struct MemoryWines {
    rows: Mutex<Vec<Wine>>,
}

#[async_trait]
impl WineRepo for MemoryWines {
    async fn list_by_user(&self, user_id: i32) -> anyhow::Result<Vec<Wine>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|w| w.user_id == user_id).cloned().collect())
    }

    async fn insert(&self, wine: NewWine) -> anyhow::Result<Wine> {
        let mut rows = self.rows.lock().unwrap();
        let wine = Wine {
            wine_id: rows.iter().map(|w| w.wine_id).max().unwrap_or(0) + 1,
            wine_name: wine.wine_name,
            winery: wine.winery,
            varietal: wine.varietal,
            vintage: wine.vintage,
            rating: wine.rating,
            notes: wine.notes,
            user_id: wine.user_id,
        };
        rows.push(wine.clone());
        Ok(wine)
    }

    async fn find_by_id(&self, wine_id: i32) -> anyhow::Result<Option<Wine>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|w| w.wine_id == wine_id).cloned())
    }

    async fn update(&self, wine_id: i32, changes: WineChanges) -> anyhow::Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|w| w.wine_id == wine_id) {
            Some(wine) => {
                changes.apply_to(wine);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, wine_id: i32) -> anyhow::Result<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|w| w.wine_id != wine_id);
        Ok((before - rows.len()) as u64)
    }
}

/// Repository whose every call fails, for exercising the 500 path.
pub struct BrokenStorage;

#[async_trait]
impl UserRepo for BrokenStorage {
    async fn insert(&self, _user: NewUser) -> anyhow::Result<User> {
        anyhow::bail!("connection reset by peer")
    }
    async fn find_by_username(&self, _username: &str) -> anyhow::Result<Option<User>> {
        anyhow::bail!("connection reset by peer")
    }
    async fn list_usernames(&self) -> anyhow::Result<Vec<String>> {
        anyhow::bail!("connection reset by peer")
    }
}

#[async_trait]
impl WineRepo for BrokenStorage {
    async fn list_by_user(&self, _user_id: i32) -> anyhow::Result<Vec<Wine>> {
        anyhow::bail!("connection reset by peer")
    }
    async fn insert(&self, _wine: NewWine) -> anyhow::Result<Wine> {
        anyhow::bail!("connection reset by peer")
    }
    async fn find_by_id(&self, _wine_id: i32) -> anyhow::Result<Option<Wine>> {
        anyhow::bail!("connection reset by peer")
    }
    async fn update(&self, _wine_id: i32, _changes: WineChanges) -> anyhow::Result<u64> {
        anyhow::bail!("connection reset by peer")
    }
    async fn delete(&self, _wine_id: i32) -> anyhow::Result<u64> {
        anyhow::bail!("connection reset by peer")
    }
}

/// Wine repository whose reads succeed but every write fails, so the
/// existence gate passes and the failure comes from the write itself.
#[derive(Default)]
pub struct FailingWrites {
    pub inner: MemoryWines,
}

#[async_trait]
impl WineRepo for FailingWrites {
    async fn list_by_user(&self, user_id: i32) -> anyhow::Result<Vec<Wine>> {
        self.inner.list_by_user(user_id).await
    }
    async fn insert(&self, _wine: NewWine) -> anyhow::Result<Wine> {
        anyhow::bail!("cannot execute INSERT in a read-only transaction")
    }
    async fn find_by_id(&self, wine_id: i32) -> anyhow::Result<Option<Wine>> {
        self.inner.find_by_id(wine_id).await
    }
    async fn update(&self, _wine_id: i32, _changes: WineChanges) -> anyhow::Result<u64> {
        anyhow::bail!("cannot execute UPDATE in a read-only transaction")
    }
    async fn delete(&self, _wine_id: i32) -> anyhow::Result<u64> {
        anyhow::bail!("cannot execute DELETE in a read-only transaction")
    }
}

/// Sends one request through the router. `body` is sent as JSON when present.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, Option<String>, serde_json::Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        req = req.header("authorization", format!("Bearer {t}"));
    }
    let req = match body {
        Some(b) => req
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let location = res
        .headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, location, json)
}

mod tests {
    use super::*;

    #[test]
    fn apply_to_only_touches_supplied_fields() {
        let mut wine = Wine {
            wine_id: 1,
            wine_name: "Test Wine".into(),
            winery: "Test Winery".into(),
            varietal: "Chardonnay".into(),
            vintage: None,
            rating: "3".into(),
            notes: Some("Test test test".into()),
            user_id: 1,
        };
        WineChanges {
            vintage: Some("2013".into()),
            rating: Some("5".into()),
            ..Default::default()
        }
        .apply_to(&mut wine);

        assert_eq!(wine.vintage.as_deref(), Some("2013"));
        assert_eq!(wine.rating, "5");
        assert_eq!(wine.wine_name, "Test Wine");
        assert_eq!(wine.notes.as_deref(), Some("Test test test"));
    }
}
