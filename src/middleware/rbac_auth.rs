use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::Result;
use crate::models::AccessRequirement;
use crate::rbac::AuthorizationGuard;
use crate::state::AppState;
use crate::util::extract_bearer_token;

/// Middleware state pairing the shared guard with one operation's
/// requirement. Build with `RouteGuard::new` and attach via
/// `middleware::from_fn_with_state(route_guard, enforce)`.
#[derive(Clone)]
pub struct RouteGuard {
    guard: AuthorizationGuard,
    requirement: Arc<AccessRequirement>,
}

impl RouteGuard {
    pub fn new(state: &AppState, requirement: AccessRequirement) -> Self {
        Self {
            guard: state.guard.clone(),
            requirement: Arc::new(requirement),
        }
    }

    pub fn requirement(&self) -> &AccessRequirement {
        &self.requirement
    }
}

/// Resolve the bearer token, authorize it, and hand `CurrentUser` to the
/// handler through request extensions.
pub async fn enforce(
    State(route): State<RouteGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let token = extract_bearer_token(request.headers());
    let current = route.guard.check(token, route.requirement())?;
    request.extensions_mut().insert(current);
    Ok(next.run(request).await)
}
