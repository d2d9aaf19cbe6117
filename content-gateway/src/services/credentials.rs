use std::collections::HashMap;

use crate::models::User;

/// Read-only lookup of user records by username.
///
/// A trait so the fixed in-memory table can later move to a real
/// datastore without touching the authenticator.
pub trait CredentialStore: Send + Sync {
    fn lookup(&self, username: &str) -> Option<User>;
}

/// In-memory store seeded once at startup. No mutation occurs after
/// construction, so it is shared freely across requests.
pub struct StaticCredentialStore {
    users: HashMap<String, User>,
}

impl StaticCredentialStore {
    pub fn new(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|u| (u.username.clone(), u))
            .collect();
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn lookup(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}
