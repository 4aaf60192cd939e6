//! Charset section - awards points for character class coverage.

use secrecy::{ExposeSecret, SecretString};

/// Symbols that count toward the symbol bonus. Anything outside this set,
/// including space and non-Latin punctuation, earns nothing.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Scores character class coverage: +1 each for an ASCII lowercase letter,
/// uppercase letter and digit, +2 for a symbol from [`SYMBOLS`].
///
/// # Returns
/// Points in `0..=5`. Only Latin letter and digit ranges count; accented
/// letters do not satisfy the letter checks.
pub fn charset_points(secret: &SecretString) -> u8 {
    let s = secret.expose_secret();
    let mut points = 0;
    if s.chars().any(|c| c.is_ascii_lowercase()) {
        points += 1;
    }
    if s.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    }
    if s.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    }
    if s.chars().any(|c| SYMBOLS.contains(c)) {
        points += 2;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_points_empty() {
        let secret = SecretString::new("".to_string().into());
        assert_eq!(charset_points(&secret), 0);
    }

    #[test]
    fn test_charset_points_lowercase_only() {
        let secret = SecretString::new("abc".to_string().into());
        assert_eq!(charset_points(&secret), 1);
    }

    #[test]
    fn test_charset_points_upper_and_digit() {
        let secret = SecretString::new("A1".to_string().into());
        assert_eq!(charset_points(&secret), 2);
    }

    #[test]
    fn test_charset_points_symbol_alone() {
        let secret = SecretString::new("!".to_string().into());
        assert_eq!(charset_points(&secret), 2);
    }

    #[test]
    fn test_charset_points_all_classes() {
        let secret = SecretString::new("Aa1!".to_string().into());
        assert_eq!(charset_points(&secret), 5);
    }

    #[test]
    fn test_charset_points_non_latin_letters_ignored() {
        // Cyrillic letters are alphabetic but outside the Latin ranges
        let secret = SecretString::new("Пароль".to_string().into());
        assert_eq!(charset_points(&secret), 0);
    }

    #[test]
    fn test_charset_points_symbol_outside_set_ignored() {
        // Hyphen and underscore are not in the symbol set
        let secret = SecretString::new("-_".to_string().into());
        assert_eq!(charset_points(&secret), 0);
    }
}
