use std::collections::HashMap;
use std::collections::hash_map::Entry;

use parking_lot::RwLock;
use rand::RngCore;
use subtle::ConstantTimeEq;

use crate::error::AuthenticationError;
use crate::models::{Identity, UserAccount};

const TOKEN_PREFIX: &str = "rbac_";
const TOKEN_BYTES: usize = 32;

/// Compared against when the username is unknown, so both failure kinds
/// take the same path.
const DUMMY_PASSWORD: &[u8] = b"warden-dummy-password-for-unknown-users";

/// Generate an opaque session token with rbac_ prefix
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{}{}", TOKEN_PREFIX, hex::encode(bytes))
}

/// In-memory stand-in for an identity provider.
///
/// Accounts are fixed at construction; the session table only grows.
pub struct CredentialStore {
    accounts: HashMap<String, UserAccount>,
    sessions: RwLock<HashMap<String, Identity>>,
}

impl CredentialStore {
    pub fn new(accounts: impl IntoIterator<Item = UserAccount>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|a| (a.username.clone(), a))
                .collect(),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Exchange a username/password pair for a fresh session token.
    ///
    /// Earlier tokens for the same account stay valid.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, AuthenticationError> {
        let account = self.accounts.get(username);
        let expected = account.map_or(DUMMY_PASSWORD, |a| a.password.as_bytes());
        let password_ok: bool = expected.ct_eq(password.as_bytes()).into();

        let account = match account {
            Some(account) if password_ok => account,
            _ => return Err(AuthenticationError::InvalidCredentials),
        };

        let identity = account.identity();
        let mut sessions = self.sessions.write();
        loop {
            let token = generate_token();
            if let Entry::Vacant(slot) = sessions.entry(token.clone()) {
                slot.insert(identity);
                return Ok(token);
            }
        }
    }

    pub fn identity_for(&self, token: &str) -> Result<Identity, AuthenticationError> {
        self.sessions
            .read()
            .get(token)
            .cloned()
            .ok_or(AuthenticationError::InvalidToken)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
