use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::ConfigurationError;
use crate::models::{Permission, Role};

/// Static role → permission table.
///
/// A role mapped to an empty set grants nothing; a role with no entry at all
/// is a configuration defect and lookups for it fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolePermissionMap {
    entries: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionMap {
    /// Register (or replace) the permissions granted by `role`.
    pub fn grant(mut self, role: Role, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.entries.insert(role, permissions.into_iter().collect());
        self
    }

    /// The built-in table used when no policy file is configured.
    pub fn builtin() -> Self {
        use Permission::*;

        Self::default()
            .grant(Role::Admin, Permission::iter())
            .grant(Role::User, [ReadProducts, WriteProducts])
            .grant(Role::Guest, [ReadProducts])
            .grant(
                Role::Developer,
                [ReadUsers, ReadProducts, AccessDevTools, ViewLogs],
            )
    }

    pub fn permissions_for(
        &self,
        role: Role,
    ) -> Result<&BTreeSet<Permission>, ConfigurationError> {
        self.entries
            .get(&role)
            .ok_or(ConfigurationError::UnknownRole(role))
    }

    /// Union of the permissions granted by each role in `roles`.
    pub fn permissions_for_roles<'a>(
        &self,
        roles: impl IntoIterator<Item = &'a Role>,
    ) -> Result<BTreeSet<Permission>, ConfigurationError> {
        let mut held = BTreeSet::new();
        for role in roles {
            held.extend(self.permissions_for(*role)?.iter().copied());
        }
        Ok(held)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.entries.contains_key(&role)
    }

    /// Fails unless every `Role` variant has an entry.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let missing: Vec<Role> = Role::iter().filter(|r| !self.contains(*r)).collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigurationError::IncompleteRegistry(missing))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Role, &BTreeSet<Permission>)> {
        self.entries.iter()
    }
}
