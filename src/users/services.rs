use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    users::{
        dto::{CreateUserRequest, LoginRequest},
        repo::UserRepo,
        repo_types::{NewUser, User},
    },
    validation::require_fields,
};

pub async fn create_account(repo: &dyn UserRepo, req: CreateUserRequest) -> ApiResult<User> {
    require_fields([
        ("first_name", req.first_name.is_some()),
        ("last_name", req.last_name.is_some()),
        ("username", req.username.is_some()),
        ("password", req.password.is_some()),
    ])?;

    let user = repo
        .insert(NewUser {
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            username: req.username.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
        })
        .await?;
    info!(user_id = user.user_id, "user created");
    Ok(user)
}

/// Looks the user up by exact username and compares the raw stored password.
pub async fn authenticate(repo: &dyn UserRepo, req: LoginRequest) -> ApiResult<User> {
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            warn!("login without username or password");
            return Err(ApiError::validation(
                "Request body must contain 'username' and 'password'",
            ));
        }
    };

    let Some(user) = repo.find_by_username(&username).await? else {
        warn!(%username, "login unknown username");
        return Err(ApiError::not_found("User doesn't exist"));
    };

    if user.password != password {
        warn!(user_id = user.user_id, "login incorrect password");
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    info!(user_id = user.user_id, "user logged in");
    Ok(user)
}

pub async fn list_usernames(repo: &dyn UserRepo) -> ApiResult<Vec<String>> {
    Ok(repo.list_usernames().await?)
}
