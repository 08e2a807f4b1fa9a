use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::models::Role;
use crate::rbac::DenyReason;

/// Caller could not be identified. Never says which half of a credential
/// pair was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthenticationError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid or unknown token")]
    InvalidToken,
}

/// Startup/programming defect in the role or account tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("role '{0}' has no registry entry")]
    UnknownRole(Role),
    #[error("registry is missing entries for roles: {}", join_roles(.0))]
    IncompleteRegistry(Vec<Role>),
    #[error("account '{0}' holds no role")]
    AccountWithoutRole(String),
    #[error("duplicate account '{0}'")]
    DuplicateAccount(String),
    #[error("failed to read policy file: {0}")]
    Io(String),
    #[error("invalid policy file: {0}")]
    Parse(String),
}

fn join_roles(roles: &[Role]) -> String {
    roles.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Unauthenticated(#[from] AuthenticationError),
    #[error("{0}")]
    Forbidden(DenyReason),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("{detail}")]
    InvalidRequest { status: StatusCode, detail: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthenticated(err) => {
                let detail = match err {
                    AuthenticationError::InvalidCredentials => "Incorrect username or password",
                    AuthenticationError::InvalidToken => "Invalid authentication credentials",
                };
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorBody {
                        detail: detail.to_string(),
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
            AppError::Forbidden(reason) => (
                StatusCode::FORBIDDEN,
                Json(ErrorBody {
                    detail: reason.to_string(),
                }),
            )
                .into_response(),
            AppError::Configuration(err) => {
                tracing::error!("Configuration error while serving request: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        detail: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::InvalidRequest { status, detail } => {
                (status, Json(ErrorBody { detail })).into_response()
            }
        }
    }
}
