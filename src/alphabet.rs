//! Character-set estimation and base entropy.
//!
//! The alphabet size is a categorical approximation: each of five character
//! classes contributes a fixed amount when at least one of its characters is
//! present, regardless of how many distinct characters are actually used.

/// Contribution of ASCII lowercase letters.
pub const LOWERCASE_SIZE: u32 = 26;
/// Contribution of ASCII uppercase letters.
pub const UPPERCASE_SIZE: u32 = 26;
/// Contribution of ASCII digits.
pub const DIGIT_SIZE: u32 = 10;
/// Contribution of the common special characters.
pub const COMMON_SPECIAL_SIZE: u32 = 10;
/// Contribution of everything outside the other four classes.
pub const OTHER_SYMBOL_SIZE: u32 = 22;

// The ten most common special characters in leaked-password corpora.
const COMMON_SPECIALS: [char; 10] = ['.', '_', '!', '-', ' ', '@', '*', '#', '/', '&'];

fn is_common_special(c: char) -> bool {
    COMMON_SPECIALS.contains(&c)
}

/// Estimates the alphabet size available per character position.
///
/// Each class is tested for presence of at least one matching character;
/// classes are additive and non-exclusive. An empty password yields 0, a
/// password drawing on all five classes yields 94.
pub fn character_set_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += LOWERCASE_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += UPPERCASE_SIZE;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += DIGIT_SIZE;
    }
    if password.chars().any(is_common_special) {
        size += COMMON_SPECIAL_SIZE;
    }
    if password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !is_common_special(c))
    {
        size += OTHER_SYMBOL_SIZE;
    }
    size
}

/// Raw entropy in bits for a password of `length` characters drawn from an
/// alphabet of `set_size` symbols: `log2(set_size ^ length)`.
///
/// A zero-length password has exactly one possibility (the empty string) and
/// therefore 0 bits; the early return also keeps `0 * log2(0)` from producing
/// NaN. The result is monotonically non-decreasing in both arguments.
pub fn base_entropy(set_size: u32, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    length as f64 * f64::from(set_size).log2()
}
