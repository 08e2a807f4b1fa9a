mod auth;
mod protected;

pub use auth::*;
pub use protected::*;

use axum::{
    Json, Router, middleware,
    routing::{delete, get, post},
};
use serde::Serialize;

use crate::middleware::{RouteGuard, enforce};
use crate::models::{AccessRequirement, Permission, Role};
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Wrap every route in `routes` with the same access requirement.
fn protect(
    state: &AppState,
    requirement: AccessRequirement,
    routes: Router<AppState>,
) -> Router<AppState> {
    routes.route_layer(middleware::from_fn_with_state(
        RouteGuard::new(state, requirement),
        enforce,
    ))
}

pub fn router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(read_root))
        .route("/health", get(health))
        .route("/token", post(login));

    public
        // Any authenticated caller
        .merge(protect(
            &state,
            AccessRequirement::authenticated(),
            Router::new().route("/me", get(me)),
        ))
        // Role-gated
        .merge(protect(
            &state,
            AccessRequirement::roles([Role::Admin]),
            Router::new().route("/admin_dashboard", get(admin_dashboard)),
        ))
        .merge(protect(
            &state,
            AccessRequirement::roles([Role::User, Role::Admin]),
            Router::new().route("/user_profile", get(user_profile)),
        ))
        .merge(protect(
            &state,
            AccessRequirement::roles([Role::Admin, Role::User, Role::Guest, Role::Developer]),
            Router::new().route("/products", get(list_products)),
        ))
        // Permission-gated
        .merge(protect(
            &state,
            AccessRequirement::permissions([Permission::WriteProducts]),
            Router::new().route("/products", post(create_product)),
        ))
        .merge(protect(
            &state,
            AccessRequirement::permissions([Permission::AccessDevTools]),
            Router::new().route("/dev_tools", get(dev_tools)),
        ))
        .merge(protect(
            &state,
            AccessRequirement::permissions([Permission::ViewLogs]),
            Router::new().route("/system_logs", get(system_logs)),
        ))
        .merge(protect(
            &state,
            AccessRequirement::permissions([Permission::DeleteUsers]),
            Router::new().route("/delete_user/{username}", delete(delete_user)),
        ))
}
