use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Permission, Role};

/// Declared access rule for a protected operation.
///
/// An empty set means no restriction on that axis. `allowed_roles` is an
/// any-of check, `required_permissions` is an all-of check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequirement {
    #[serde(default)]
    pub allowed_roles: BTreeSet<Role>,
    #[serde(default)]
    pub required_permissions: BTreeSet<Permission>,
}

impl AccessRequirement {
    /// Any authenticated identity passes.
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::default().with_roles(roles)
    }

    pub fn permissions(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self::default().with_permissions(permissions)
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles.extend(roles);
        self
    }

    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.required_permissions.extend(permissions);
        self
    }
}
