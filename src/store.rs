//! Credential store collaborators.
//!
//! The scoring engine never touches storage; the application creates,
//! lists and deletes credentials here and feeds the results to the
//! report functions.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Category, Credential, CredentialId, UserId};

const STORE_FORMAT_VERSION: &str = "1.0";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("credential not found: {0}")]
    NotFound(CredentialId),
    #[error("failed to access store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("store file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Create/list/delete interface for per-user credentials.
///
/// Ids are assigned by the store and unique across all owners.
pub trait CredentialStore {
    fn create(
        &mut self,
        owner: UserId,
        site: &str,
        username: &str,
        secret: SecretString,
        category: Category,
    ) -> Result<Credential, StoreError>;

    /// Credentials belonging to `owner`, in insertion order.
    fn list(&self, owner: UserId) -> Result<Vec<Credential>, StoreError>;

    fn delete(&mut self, id: CredentialId) -> Result<(), StoreError>;
}

/// Purely in-process store. The unit-test and demo backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: CredentialId,
    records: Vec<Credential>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialStore for MemoryStore {
    fn create(
        &mut self,
        owner: UserId,
        site: &str,
        username: &str,
        secret: SecretString,
        category: Category,
    ) -> Result<Credential, StoreError> {
        self.next_id += 1;
        let credential = Credential {
            id: self.next_id,
            owner,
            site: site.to_string(),
            username: username.to_string(),
            secret,
            category,
        };
        self.records.push(credential.clone());
        Ok(credential)
    }

    fn list(&self, owner: UserId) -> Result<Vec<Credential>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|c| c.owner == owner)
            .cloned()
            .collect())
    }

    fn delete(&mut self, id: CredentialId) -> Result<(), StoreError> {
        let before = self.records.len();
        self.records.retain(|c| c.id != id);
        if self.records.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

/// On-disk record. Secrets leave their wrapper only here, at the
/// persistence boundary.
#[derive(Serialize, Deserialize)]
struct StoredCredential {
    id: CredentialId,
    owner: UserId,
    site: String,
    username: String,
    secret: String,
    category: Category,
}

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: String,
    credentials: Vec<StoredCredential>,
}

/// File-backed store persisting a versioned JSON envelope after every
/// mutation.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

/// Returns the store file path.
///
/// Priority:
/// 1. Environment variable `VAULT_STORE_PATH`
/// 2. Default path `./vault.json`
pub fn default_store_path() -> PathBuf {
    std::env::var("VAULT_STORE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./vault.json"))
}

impl JsonStore {
    /// Opens the store at `path`, loading existing records. A missing file
    /// starts an empty store; it is created on first mutation.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&content)?;
            let next_id = file.credentials.iter().map(|c| c.id).max().unwrap_or(0);
            let records = file
                .credentials
                .into_iter()
                .map(|c| Credential {
                    id: c.id,
                    owner: c.owner,
                    site: c.site,
                    username: c.username,
                    secret: SecretString::new(c.secret.into()),
                    category: c.category,
                })
                .collect();
            MemoryStore { next_id, records }
        } else {
            MemoryStore::new()
        };

        #[cfg(feature = "tracing")]
        tracing::info!(entries = inner.len(), path = %path.display(), "store opened");

        Ok(JsonStore { path, inner })
    }

    /// Opens the store at [`default_store_path`].
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(default_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let file = StoreFile {
            version: STORE_FORMAT_VERSION.to_string(),
            credentials: self
                .inner
                .records
                .iter()
                .map(|c| StoredCredential {
                    id: c.id,
                    owner: c.owner,
                    site: c.site.clone(),
                    username: c.username.clone(),
                    secret: c.secret.expose_secret().to_string(),
                    category: c.category,
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Atomic write: temp file in the same directory, then rename
        let tmp = self.path.with_extension("tmp");
        let mut f = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp)?;
        f.write_all(json.as_bytes())?;
        f.flush()?;
        drop(f);
        fs::rename(&tmp, &self.path)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(entries = self.inner.len(), "store persisted");

        Ok(())
    }
}

impl CredentialStore for JsonStore {
    fn create(
        &mut self,
        owner: UserId,
        site: &str,
        username: &str,
        secret: SecretString,
        category: Category,
    ) -> Result<Credential, StoreError> {
        let credential = self.inner.create(owner, site, username, secret, category)?;
        self.persist()?;
        Ok(credential)
    }

    fn list(&self, owner: UserId) -> Result<Vec<Credential>, StoreError> {
        self.inner.list(owner)
    }

    fn delete(&mut self, id: CredentialId) -> Result<(), StoreError> {
        self.inner.delete(id)?;
        self.persist()
    }
}
