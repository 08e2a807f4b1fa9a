//! Declarative role table and account list loaded at startup.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::models::{Role, UserAccount};
use crate::rbac::RolePermissionMap;

#[derive(Debug, Clone, Deserialize)]
pub struct Policy {
    pub roles: RolePermissionMap,
    #[serde(default)]
    pub users: Vec<UserAccount>,
}

impl Policy {
    /// Built-in role table and demo accounts.
    pub fn builtin() -> Self {
        Self {
            roles: RolePermissionMap::builtin(),
            users: vec![
                UserAccount::new("admin_user", "admin_password", [Role::Admin]),
                UserAccount::new("normal_user", "user_password", [Role::User]),
                UserAccount::new("guest_user", "guest_password", [Role::Guest]),
                UserAccount::new("developer_user", "dev_password", [Role::Developer]),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigurationError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load from `path` when given, otherwise fall back to the built-in policy.
    /// The result is always validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let policy = match path {
            Some(path) => {
                tracing::info!("Loading policy from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::builtin(),
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Every role has a registry entry and every account is usable.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.roles.validate()?;

        let mut seen = HashSet::new();
        for user in &self.users {
            if !seen.insert(user.username.as_str()) {
                return Err(ConfigurationError::DuplicateAccount(user.username.clone()));
            }
            if user.roles.is_empty() {
                return Err(ConfigurationError::AccountWithoutRole(user.username.clone()));
            }
            if let Some(role) = user.roles.iter().find(|r| !self.roles.contains(**r)) {
                return Err(ConfigurationError::UnknownRole(*role));
            }
        }
        Ok(())
    }
}
