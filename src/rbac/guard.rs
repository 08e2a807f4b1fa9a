use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::auth::TokenResolver;
use crate::error::{AppError, AuthenticationError, ConfigurationError};
use crate::models::{AccessRequirement, CurrentUser, Identity, Permission, Role};

use super::RolePermissionMap;

/// Why an authenticated caller was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// None of the caller's roles is in the allowed set.
    RoleDenied { allowed: BTreeSet<Role> },
    /// The caller's roles don't grant every required permission.
    PermissionDenied { missing: BTreeSet<Permission> },
}

impl DenyReason {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RoleDenied { .. } => "role_denied",
            Self::PermissionDenied { .. } => "permission_denied",
        }
    }
}

fn join<T: fmt::Display>(items: &BTreeSet<T>) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoleDenied { allowed } => {
                write!(f, "Permission denied. Required roles: [{}]", join(allowed))
            }
            Self::PermissionDenied { missing } => {
                write!(
                    f,
                    "Permission denied. Required permissions: [{}]",
                    join(missing)
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// Decide whether `identity` satisfies `requirement`.
///
/// Role check runs first (any-of), then the permission check (all-of). The
/// registry is only consulted when permissions are required.
pub fn authorize(
    registry: &RolePermissionMap,
    identity: &Identity,
    requirement: &AccessRequirement,
) -> Result<Decision, ConfigurationError> {
    if !requirement.allowed_roles.is_empty()
        && requirement.allowed_roles.is_disjoint(&identity.roles)
    {
        return Ok(Decision::Denied(DenyReason::RoleDenied {
            allowed: requirement.allowed_roles.clone(),
        }));
    }

    if !requirement.required_permissions.is_empty() {
        let held = registry.permissions_for_roles(&identity.roles)?;
        let missing: BTreeSet<Permission> = requirement
            .required_permissions
            .difference(&held)
            .copied()
            .collect();
        if !missing.is_empty() {
            return Ok(Decision::Denied(DenyReason::PermissionDenied { missing }));
        }
    }

    Ok(Decision::Allowed)
}

/// Token resolution plus authorization, with the registry and resolver
/// injected at construction.
///
/// The registry must cover every role, so expanding a resolved identity's
/// permissions cannot fail once the guard exists.
#[derive(Clone)]
pub struct AuthorizationGuard {
    registry: Arc<RolePermissionMap>,
    resolver: Arc<dyn TokenResolver>,
}

impl AuthorizationGuard {
    pub fn new(
        registry: Arc<RolePermissionMap>,
        resolver: Arc<dyn TokenResolver>,
    ) -> Result<Self, ConfigurationError> {
        registry.validate()?;
        Ok(Self { registry, resolver })
    }

    /// Resolve `token` and evaluate it against `requirement`.
    ///
    /// Authentication failures surface as `AppError::Unauthenticated`,
    /// denials as `AppError::Forbidden`.
    pub fn check(
        &self,
        token: Option<&str>,
        requirement: &AccessRequirement,
    ) -> Result<CurrentUser, AppError> {
        let identity = match token {
            Some(token) => self
                .resolver
                .resolve(token)
                .inspect_err(|e| tracing::warn!("Rejected bearer token: {}", e))?,
            None => {
                tracing::debug!("Request without bearer token");
                return Err(AuthenticationError::InvalidToken.into());
            }
        };

        match authorize(&self.registry, &identity, requirement)? {
            Decision::Allowed => {
                let permissions = self.registry.permissions_for_roles(&identity.roles)?;
                Ok(CurrentUser {
                    identity,
                    permissions,
                })
            }
            Decision::Denied(reason) => {
                tracing::warn!(
                    "Denied {} ({}): {}",
                    identity.username,
                    reason.kind(),
                    reason
                );
                Err(AppError::Forbidden(reason))
            }
        }
    }
}
