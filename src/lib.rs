//! Credential strength scoring and security reporting for a personal
//! password vault.
//!
//! The core is a pure scoring engine: an additive 0-9 strength score for a
//! single secret, an aggregate 0-10 security score over a whole vault, and
//! reporting helpers (category distribution, strength breakdown,
//! recommendations). Around it the crate ships the collaborators a vault
//! application needs: a credential store with optional JSON persistence,
//! an Argon2id-backed user directory, a random secret generator and a
//! dashboard presenter.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `VAULT_STORE_PATH`: Custom path for the JSON credential store
//!   (default: `./vault.json`)
//!
//! # Example
//!
//! ```rust
//! use secrecy::SecretString;
//! use vault_score::{
//!     Category, CredentialStore, MemoryStore, is_acceptable_for_registration,
//!     score_secret, security_score,
//! };
//!
//! let candidate = SecretString::new("Aa1!aaaaaaaaaaaa".to_string().into());
//! assert_eq!(score_secret(&candidate).score, 9);
//! assert!(is_acceptable_for_registration(&candidate));
//!
//! let mut store = MemoryStore::new();
//! store
//!     .create(1, "mail.example", "alice", candidate, Category::Trabajo)
//!     .unwrap();
//! let vault = store.list(1).unwrap();
//! assert_eq!(security_score(&vault), 9);
//! ```

// Internal modules
mod dashboard;
mod generator;
mod identity;
mod report;
mod scorer;
mod sections;
mod store;
mod types;

// Public API
pub use dashboard::{Dashboard, Overview, Theme};
pub use generator::{DEFAULT_SECRET_LENGTH, SECRET_ALPHABET, generate_default_secret, generate_secret};
pub use identity::{IdentityError, UserDirectory};
pub use report::{
    Recommendation, SecurityBand, Share, StrengthBreakdown, category_distribution,
    has_duplicate_secrets, recommendations, security_score, strength_distribution,
};
pub use scorer::{MAX_SCORE, REGISTRATION_THRESHOLD, is_acceptable_for_registration, score_secret};
pub use store::{CredentialStore, JsonStore, MemoryStore, StoreError, default_store_path};
pub use types::{
    Category, Credential, CredentialId, StrengthLevel, StrengthResult, UnknownCategory, UserId,
};
