use axum::{Extension, Json, extract::Path};
use serde::Serialize;

use crate::models::CurrentUser;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

pub async fn read_root() -> Json<MessageResponse> {
    MessageResponse::new("Welcome to the RBAC Demo API!")
}

/// Caller's identity with expanded permissions.
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<CurrentUser> {
    Json(user)
}

pub async fn admin_dashboard(Extension(user): Extension<CurrentUser>) -> Json<MessageResponse> {
    MessageResponse::new(format!(
        "Hello, Admin {}! Welcome to the admin dashboard.",
        user.identity.username
    ))
}

pub async fn user_profile(Extension(user): Extension<CurrentUser>) -> Json<MessageResponse> {
    MessageResponse::new(format!(
        "Hello, {}! This is your profile.",
        user.identity.username
    ))
}

pub async fn list_products(Extension(user): Extension<CurrentUser>) -> Json<MessageResponse> {
    MessageResponse::new(format!(
        "Hello, {}! Here are the products.",
        user.identity.username
    ))
}

pub async fn create_product(Extension(user): Extension<CurrentUser>) -> Json<MessageResponse> {
    MessageResponse::new(format!(
        "Hello, {}! You can create products.",
        user.identity.username
    ))
}

pub async fn dev_tools(Extension(user): Extension<CurrentUser>) -> Json<MessageResponse> {
    MessageResponse::new(format!(
        "Hello, {}! Accessing developer tools.",
        user.identity.username
    ))
}

pub async fn system_logs(Extension(user): Extension<CurrentUser>) -> Json<MessageResponse> {
    MessageResponse::new(format!(
        "Hello, {}! Viewing system logs.",
        user.identity.username
    ))
}

pub async fn delete_user(
    Extension(user): Extension<CurrentUser>,
    Path(username): Path<String>,
) -> Json<MessageResponse> {
    MessageResponse::new(format!(
        "Hello, {}! Deleting user {}.",
        user.identity.username, username
    ))
}
