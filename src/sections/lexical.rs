//! Lexical section - character class, length and entropy.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;

/// Returns `true` if the password is non-empty and made only of letters and digits.
pub fn is_alphanumeric(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    !pwd.is_empty() && pwd.chars().all(char::is_alphanumeric)
}

/// Length in characters, not bytes.
pub fn length(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Entropy estimate in bits: `log2(distinct characters) * length`.
///
/// A password made of one repeated character scores zero.
pub fn entropy(password: &SecretString) -> f64 {
    let pwd = password.expose_secret();
    let unique: HashSet<char> = pwd.chars().collect();
    if unique.len() <= 1 {
        return 0.0;
    }
    (unique.len() as f64).log2() * pwd.chars().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_alphanumeric_true() {
        assert!(is_alphanumeric(&secret("Passw0rd")));
    }

    #[test]
    fn test_alphanumeric_false_with_symbol() {
        assert!(!is_alphanumeric(&secret("Passw0rd!")));
        assert!(!is_alphanumeric(&secret("two words")));
    }

    #[test]
    fn test_alphanumeric_empty() {
        assert!(!is_alphanumeric(&secret("")));
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(length(&secret("abc")), 3);
        assert_eq!(length(&secret("héllo")), 5);
        assert_eq!(length(&secret("日本語")), 3);
    }

    #[test]
    fn test_entropy_repeated_char_is_zero() {
        assert_eq!(entropy(&secret("a")), 0.0);
        assert_eq!(entropy(&secret("aaaaaaaaaaaa")), 0.0);
    }

    #[test]
    fn test_entropy_values() {
        // 2 distinct, 4 chars -> 1 bit * 4
        assert_eq!(entropy(&secret("abab")), 4.0);
        // 8 distinct, 8 chars -> 3 bits * 8
        assert_eq!(entropy(&secret("abcdefgh")), 24.0);
    }

    #[test]
    fn test_entropy_zero_iff_uniform() {
        for pwd in ["x", "zz", "ab", "Passw0rd", "!!!!?", "ñññ"] {
            let value = entropy(&secret(pwd));
            assert!(value >= 0.0);
            let uniform = pwd.chars().all(|c| Some(c) == pwd.chars().next());
            assert_eq!(value == 0.0, uniform, "password {:?}", pwd);
        }
    }
}
