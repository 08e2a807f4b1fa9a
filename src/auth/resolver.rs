use crate::error::AuthenticationError;
use crate::models::Identity;

use super::CredentialStore;

/// Seam between the guard and whatever issues tokens.
pub trait TokenResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<Identity, AuthenticationError>;
}

impl TokenResolver for CredentialStore {
    fn resolve(&self, token: &str) -> Result<Identity, AuthenticationError> {
        self.identity_for(token)
    }
}
