//! Length section - awards points for secret length milestones.

use secrecy::{ExposeSecret, SecretString};

const BASE_LENGTH: usize = 8;
const GOOD_LENGTH: usize = 12;
const LONG_LENGTH: usize = 16;

/// Scores the secret's length: +2 at 8 characters, +1 more at 12,
/// +1 more at 16. Milestones are cumulative.
///
/// # Returns
/// Points in `0..=4`. Length is counted in characters, not bytes.
pub fn length_points(secret: &SecretString) -> u8 {
    let len = secret.expose_secret().chars().count();
    let mut points = 0;
    if len >= BASE_LENGTH {
        points += 2;
    }
    if len >= GOOD_LENGTH {
        points += 1;
    }
    if len >= LONG_LENGTH {
        points += 1;
    }
    points
}
