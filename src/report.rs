//! Vault-wide reporting: aggregate security score, distributions and
//! recommendations.
//!
//! Everything here is a pure function over a credential slice; callers fetch
//! the credentials from the store and hand them in.

use std::collections::HashSet;
use std::fmt;

use secrecy::ExposeSecret;

use crate::scorer::score_secret;
use crate::types::{Category, Credential, StrengthLevel};

/// A vault is considered sparsely stocked below this many entries.
const WELL_STOCKED: usize = 5;

/// Points subtracted from the average when any secret is reused.
const DUPLICATE_PENALTY: f64 = 2.0;

/// True iff at least two credentials share the same secret value.
///
/// This is a coarse global flag: one reused pair and ten reused pairs
/// are reported identically.
pub fn has_duplicate_secrets(credentials: &[Credential]) -> bool {
    let distinct: HashSet<&str> = credentials
        .iter()
        .map(|c| c.secret.expose_secret())
        .collect();
    distinct.len() < credentials.len()
}

/// Aggregate security score for a whole vault.
///
/// Empty input scores 0. Otherwise the per-secret scores are averaged,
/// a flat penalty of 2 (floored at 1) is applied when any secret is
/// reused, and the result is rounded half-up and clamped to `1..=10`.
pub fn security_score(credentials: &[Credential]) -> u8 {
    if credentials.is_empty() {
        return 0;
    }

    let total: u32 = credentials
        .iter()
        .map(|c| u32::from(score_secret(&c.secret).score))
        .sum();
    let average = f64::from(total) / credentials.len() as f64;

    let adjusted = if has_duplicate_secrets(credentials) {
        (average - DUPLICATE_PENALTY).max(1.0)
    } else {
        average
    };

    let score = (adjusted.round() as u8).clamp(1, 10);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, entries = credentials.len(), "security score computed");

    score
}

/// Display classification of the aggregate security score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityBand {
    Weak,
    Medium,
    Good,
}

impl SecurityBand {
    /// Classifies a security score: 7+ good, 4-6 medium, below 4 weak.
    pub fn from_score(score: u8) -> Self {
        if score >= 7 {
            SecurityBand::Good
        } else if score >= 4 {
            SecurityBand::Medium
        } else {
            SecurityBand::Weak
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SecurityBand::Good => "#28a745",
            SecurityBand::Medium => "#ffc107",
            SecurityBand::Weak => "#dc3545",
        }
    }
}

/// Count plus rounded percentage of the vault total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    pub count: usize,
    pub percentage: u8,
}

fn share(count: usize, total: usize) -> Share {
    let percentage = if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u8
    };
    Share { count, percentage }
}

/// Credential counts per category, in [`Category::ALL`] order.
///
/// Every category is returned even at zero count; a renderer may omit the
/// empty ones. Percentages are 0 when the vault is empty.
pub fn category_distribution(credentials: &[Credential]) -> Vec<(Category, Share)> {
    let total = credentials.len();
    Category::ALL
        .iter()
        .map(|&category| {
            let count = credentials.iter().filter(|c| c.category == category).count();
            (category, share(count, total))
        })
        .collect()
}

/// Weak/medium/strong partition of a vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthBreakdown {
    pub weak: Share,
    pub medium: Share,
    pub strong: Share,
}

/// Partitions credentials by strength level, with percentages computed the
/// same way as [`category_distribution`].
pub fn strength_distribution(credentials: &[Credential]) -> StrengthBreakdown {
    let total = credentials.len();
    let mut weak = 0;
    let mut medium = 0;
    let mut strong = 0;
    for credential in credentials {
        match score_secret(&credential.secret).level {
            StrengthLevel::Weak => weak += 1,
            StrengthLevel::Medium => medium += 1,
            StrengthLevel::Strong => strong += 1,
        }
    }
    StrengthBreakdown {
        weak: share(weak, total),
        medium: share(medium, total),
        strong: share(strong, total),
    }
}

/// An advisory produced by [`recommendations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// `count` credentials score Weak.
    ChangeWeakSecrets { count: usize },
    /// At least one secret is reused across entries.
    DeduplicateSecrets,
    /// The vault holds fewer than five entries.
    AddMoreCredentials,
    /// Nothing else fired.
    WellManaged,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::ChangeWeakSecrets { count } => {
                write!(f, "You have {count} weak password(s). Consider changing them.")
            }
            Recommendation::DeduplicateSecrets => {
                f.write_str("You have duplicate passwords. Use a unique password for each site.")
            }
            Recommendation::AddMoreCredentials => {
                f.write_str("Add more passwords to improve your security coverage.")
            }
            Recommendation::WellManaged => {
                f.write_str("Excellent! Your passwords are well managed.")
            }
        }
    }
}

/// Advisory list for a vault, in fixed rule order: weak entries, reused
/// secrets, sparse vault, then a single positive message iff nothing else
/// fired. Never empty.
pub fn recommendations(credentials: &[Credential]) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let weak = credentials
        .iter()
        .filter(|c| score_secret(&c.secret).level == StrengthLevel::Weak)
        .count();
    if weak > 0 {
        out.push(Recommendation::ChangeWeakSecrets { count: weak });
    }
    if has_duplicate_secrets(credentials) {
        out.push(Recommendation::DeduplicateSecrets);
    }
    if credentials.len() < WELL_STOCKED {
        out.push(Recommendation::AddMoreCredentials);
    }
    if out.is_empty() {
        out.push(Recommendation::WellManaged);
    }
    out
}
