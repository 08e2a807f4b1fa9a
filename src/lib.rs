//! Role-based access control for HTTP APIs.
//!
//! The decision core lives in [`rbac`] (role table and `authorize`) and
//! [`auth`] (mock identity provider and the token resolver seam). The
//! [`middleware`] and [`handlers`] modules are the axum collaborator that
//! extracts bearer tokens and maps outcomes to status codes.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod rbac;
pub mod state;
pub mod util;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Full application router with tracing and CORS layers.
pub fn app(state: AppState) -> Router {
    handlers::router(state.clone())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
