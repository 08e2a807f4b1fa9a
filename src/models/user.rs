use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Identity, Role};

/// Account known to the mock identity provider.
///
/// Passwords are kept in plaintext here; a real deployment replaces the
/// credential store with an identity provider and never stores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub roles: BTreeSet<Role>,
}

impl UserAccount {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            username: self.username.clone(),
            roles: self.roles.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
