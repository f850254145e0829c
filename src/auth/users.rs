use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{hash_password, verify_password, AuthError};

const MAX_USERNAME_LEN: usize = 64;

/// Registered users, username -> password hash. Lives as long as the process.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, String>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = normalize_username(username)?;
        if password.is_empty() {
            return Err(AuthError::InvalidPassword("password cannot be empty"));
        }

        // Skip the hashing cost for an obvious duplicate; the write below re-checks.
        if self.users.read().await.contains_key(&username) {
            return Err(AuthError::UserExists);
        }

        let password = password.to_owned();
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        match self.users.write().await.entry(username) {
            Entry::Occupied(_) => Err(AuthError::UserExists),
            Entry::Vacant(slot) => {
                tracing::info!("Registered user '{}'", slot.key());
                slot.insert(hash);
                Ok(())
            }
        }
    }

    /// Returns the normalized username when the password matches.
    /// Unknown users and wrong passwords are indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username = username.trim().to_string();
        let hash = self
            .users
            .read()
            .await
            .get(&username)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        let password = password.to_owned();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))??;

        if matches {
            Ok(username)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    pub async fn contains(&self, username: &str) -> bool {
        self.users.read().await.contains_key(username.trim())
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

fn normalize_username(username: &str) -> Result<String, AuthError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AuthError::InvalidUsername("username cannot be empty"));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AuthError::InvalidUsername("username cannot exceed 64 characters"));
    }
    Ok(username.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_then_authenticate() {
        let store = UserStore::new();
        store.register("testuser", "testpass").await.unwrap();
        assert!(store.contains("testuser").await);

        let user = store.authenticate("testuser", "testpass").await.unwrap();
        assert_eq!(user, "testuser");
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let store = UserStore::new();
        store.register("bob", "pw").await.unwrap();
        assert!(matches!(store.register("bob", "other").await, Err(AuthError::UserExists)));
        assert!(matches!(store.register("  bob ", "other").await, Err(AuthError::UserExists)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let store = UserStore::new();
        store.register("carol", "right").await.unwrap();
        assert!(matches!(
            store.authenticate("carol", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            store.authenticate("nobody", "right").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn blank_credentials_are_rejected() {
        let store = UserStore::new();
        assert!(matches!(store.register("   ", "pw").await, Err(AuthError::InvalidUsername(_))));
        assert!(matches!(store.register("dave", "").await, Err(AuthError::InvalidPassword(_))));
        assert_eq!(store.len().await, 0);
    }
}
