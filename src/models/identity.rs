use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Permission, Role};

/// An authenticated caller: username plus every role the account holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub roles: BTreeSet<Role>,
}

impl Identity {
    pub fn new(username: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            username: username.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Identity plus its expanded permission set, handed to protected handlers.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    #[serde(flatten)]
    pub identity: Identity,
    pub permissions: BTreeSet<Permission>,
}
