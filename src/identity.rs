//! Identity provider collaborator: registration and authentication.
//!
//! Secrets are hashed with Argon2id and compared here; strength gating is
//! the caller's job (run [`crate::is_acceptable_for_registration`] before
//! registering). The scoring engine never sees account passwords.

use std::collections::HashMap;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::types::UserId;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("username already registered: {0}")]
    DuplicateUsername(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

#[derive(Debug)]
struct UserRecord {
    id: UserId,
    secret_hash: String,
    hint: Option<String>,
}

/// In-process user directory.
///
/// Stores only the Argon2id hash of each account password, plus an
/// optional user-supplied hint.
#[derive(Debug, Default)]
pub struct UserDirectory {
    next_id: UserId,
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user and returns the assigned id.
    ///
    /// # Errors
    /// [`IdentityError::DuplicateUsername`] if the name is taken.
    pub fn register(
        &mut self,
        username: &str,
        secret: &SecretString,
        hint: Option<&str>,
    ) -> Result<UserId, IdentityError> {
        if self.users.contains_key(username) {
            return Err(IdentityError::DuplicateUsername(username.to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let secret_hash = Argon2::default()
            .hash_password(secret.expose_secret().as_bytes(), &salt)
            .map_err(|e| IdentityError::Hash(e.to_string()))?
            .to_string();

        self.next_id += 1;
        let id = self.next_id;
        self.users.insert(
            username.to_string(),
            UserRecord {
                id,
                secret_hash,
                hint: hint.map(str::to_string),
            },
        );

        #[cfg(feature = "tracing")]
        tracing::info!(user = username, id, "user registered");

        Ok(id)
    }

    /// Verifies the password and returns the user's id.
    ///
    /// # Errors
    /// [`IdentityError::UserNotFound`] for unknown names,
    /// [`IdentityError::IncorrectPassword`] when verification fails.
    pub fn authenticate(
        &self,
        username: &str,
        secret: &SecretString,
    ) -> Result<UserId, IdentityError> {
        let record = self
            .users
            .get(username)
            .ok_or_else(|| IdentityError::UserNotFound(username.to_string()))?;

        let parsed = PasswordHash::new(&record.secret_hash)
            .map_err(|e| IdentityError::Hash(e.to_string()))?;
        Argon2::default()
            .verify_password(secret.expose_secret().as_bytes(), &parsed)
            .map_err(|_| IdentityError::IncorrectPassword)?;

        Ok(record.id)
    }

    /// The hint stored at registration, if any.
    ///
    /// # Errors
    /// [`IdentityError::UserNotFound`] for unknown names.
    pub fn hint(&self, username: &str) -> Result<Option<&str>, IdentityError> {
        self.users
            .get(username)
            .map(|r| r.hint.as_deref())
            .ok_or_else(|| IdentityError::UserNotFound(username.to_string()))
    }
}
