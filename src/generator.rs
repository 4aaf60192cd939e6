//! Random secret suggestion.

use rand::Rng;

/// Alphabet for generated secrets: letters, digits and the symbols the
/// charset section rewards.
pub const SECRET_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Default generated secret length. Long enough to hit every length
/// milestone of the scorer.
pub const DEFAULT_SECRET_LENGTH: usize = 16;

/// Generates a random secret of exactly `length` characters, each drawn
/// independently and uniformly from [`SECRET_ALPHABET`].
///
/// Uses the thread-local CSPRNG; there is no guarantee the result scores
/// Strong, only that every position is uniform over the alphabet.
pub fn generate_secret(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..SECRET_ALPHABET.len());
            SECRET_ALPHABET[idx] as char
        })
        .collect()
}

/// [`generate_secret`] at the default length.
pub fn generate_default_secret() -> String {
    generate_secret(DEFAULT_SECRET_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secret_exact_length() {
        for length in [0, 1, 16, 64] {
            assert_eq!(generate_secret(length).chars().count(), length);
        }
    }

    #[test]
    fn test_generate_secret_stays_in_alphabet() {
        let secret = generate_secret(256);
        for c in secret.bytes() {
            assert!(
                SECRET_ALPHABET.contains(&c),
                "generated character {:?} outside alphabet",
                c as char
            );
        }
    }

    #[test]
    fn test_generate_default_secret_length() {
        assert_eq!(generate_default_secret().len(), DEFAULT_SECRET_LENGTH);
    }

    #[test]
    fn test_generate_secret_varies() {
        // Two 16-char draws colliding is vanishingly unlikely
        assert_ne!(generate_default_secret(), generate_default_secret());
    }
}
