use serde::{Deserialize, Serialize};

use crate::sanitize::escape_html;
use crate::users::repo_types::User;

/// Request body for account creation. Fields are optional so that a missing
/// one surfaces as a validation error rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sanitized user as returned to clients.
///
/// NOTE: `password` is echoed back raw for compatibility with existing
/// clients. This leaks the credential and should be dropped once they stop
/// reading it.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            user_id: u.user_id,
            first_name: escape_html(&u.first_name),
            last_name: escape_html(&u.last_name),
            username: escape_html(&u.username),
            password: u.password,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UsernameResponse {
    pub username: String,
}

impl UsernameResponse {
    pub fn sanitized(username: &str) -> Self {
        Self {
            username: escape_html(username),
        }
    }
}
