//! Secret strength scorer - main scoring entry points.

use secrecy::SecretString;

use crate::sections::{charset_points, length_points};
use crate::types::StrengthResult;

/// Maximum attainable strength score.
pub const MAX_SCORE: u8 = 9;

/// Registration accepts only secrets scoring above this value.
pub const REGISTRATION_THRESHOLD: u8 = 6;

/// Scores a secret on the additive 0-9 scale and classifies it.
///
/// Total over every input, including the empty string. Pure and
/// deterministic: the result depends only on the secret's characters.
///
/// # Arguments
/// * `secret` - The secret to score
///
/// # Returns
/// A [`StrengthResult`] with the raw score and its level.
pub fn score_secret(secret: &SecretString) -> StrengthResult {
    let score = length_points(secret) + charset_points(secret);
    let result = StrengthResult::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = result.score, level = %result.level, "secret scored");

    result
}

/// Registration-time gate: true iff the secret scores Strong.
///
/// Stricter than what the vault accepts for already stored entries;
/// a Medium secret is rejected here.
pub fn is_acceptable_for_registration(secret: &SecretString) -> bool {
    score_secret(secret).score > REGISTRATION_THRESHOLD
}
