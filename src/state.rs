use std::sync::Arc;

use crate::auth::CredentialStore;
use crate::error::ConfigurationError;
use crate::policy::Policy;
use crate::rbac::{AuthorizationGuard, RolePermissionMap};

#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialStore>,
    pub guard: AuthorizationGuard,
}

impl AppState {
    /// Fails when the registry does not cover every role.
    pub fn new(
        registry: RolePermissionMap,
        credentials: CredentialStore,
    ) -> Result<Self, ConfigurationError> {
        let credentials = Arc::new(credentials);
        let guard = AuthorizationGuard::new(Arc::new(registry), credentials.clone())?;
        Ok(Self { credentials, guard })
    }

    pub fn from_policy(policy: Policy) -> Result<Self, ConfigurationError> {
        policy.validate()?;
        Self::new(policy.roles, CredentialStore::new(policy.users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Permission, Role, UserAccount};

    #[test]
    fn incomplete_registry_fails_at_construction() {
        let registry = RolePermissionMap::default().grant(Role::Admin, [Permission::ReadUsers]);
        let credentials = CredentialStore::new([UserAccount::new(
            "developer_user",
            "dev_password",
            [Role::Developer],
        )]);

        assert!(matches!(
            AppState::new(registry, credentials),
            Err(ConfigurationError::IncompleteRegistry(_))
        ));
    }

    #[test]
    fn builtin_policy_builds_state() {
        assert!(AppState::from_policy(Policy::builtin()).is_ok());
    }
}
