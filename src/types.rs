//! Core domain types: credentials, categories, strength results.

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Numeric user id, assigned by the identity directory.
pub type UserId = i64;

/// Numeric credential id, assigned by the credential store.
pub type CredentialId = i64;

/// Fixed grouping categories for stored credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Social,
    Trabajo,
    Bancario,
    Entretenimiento,
    Otros,
}

impl Category {
    /// All categories, in their canonical reporting order.
    pub const ALL: [Category; 5] = [
        Category::Social,
        Category::Trabajo,
        Category::Bancario,
        Category::Entretenimiento,
        Category::Otros,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "Social",
            Category::Trabajo => "Trabajo",
            Category::Bancario => "Bancario",
            Category::Entretenimiento => "Entretenimiento",
            Category::Otros => "Otros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Social" => Ok(Category::Social),
            "Trabajo" => Ok(Category::Trabajo),
            "Bancario" => Ok(Category::Bancario),
            "Entretenimiento" => Ok(Category::Entretenimiento),
            "Otros" => Ok(Category::Otros),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A stored site credential owned by one user.
///
/// The secret is wrapped in [`SecretString`] so `Debug` output never leaks
/// it; scoring and persistence expose it explicitly at their boundaries.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: CredentialId,
    pub owner: UserId,
    pub site: String,
    pub username: String,
    pub secret: SecretString,
    pub category: Category,
}

/// Three-way strength classification of a single secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Display color for this level, as used by the dashboard.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "#dc3545",
            StrengthLevel::Medium => "#ffc107",
            StrengthLevel::Strong => "#28a745",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
        };
        f.write_str(s)
    }
}

/// Result of scoring a single secret. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub level: StrengthLevel,
}

impl StrengthResult {
    /// Classifies a raw score: 0-3 weak, 4-6 medium, 7+ strong.
    pub fn from_score(score: u8) -> Self {
        let level = if score <= 3 {
            StrengthLevel::Weak
        } else if score <= 6 {
            StrengthLevel::Medium
        } else {
            StrengthLevel::Strong
        };
        StrengthResult { score, level }
    }

    /// Display color, delegated to the level.
    pub fn color(&self) -> &'static str {
        self.level.color()
    }
}
