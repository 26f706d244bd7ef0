//! Structural weak-pattern penalty.
//!
//! Penalizes the shapes people fall back on when a form demands "letters and
//! a number" or "a capital letter": a word with a short digit suffix, a
//! single leading capital, or a word with one trailing special character.

use once_cell::sync::Lazy;
use regex::Regex;

/// Flat deduction applied when any weak-structure predicate matches.
pub const STRUCTURE_PENALTY_BITS: f64 = 8.0;

// Letters followed by one to three digits and nothing else ("monkey99").
static LETTERS_THEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+[0-9]{1,3}$").unwrap());

// A single leading capital over a lowercase run ("Monkey").
static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());

// Letters followed by exactly one trailing special character ("monkey!").
static LETTERS_THEN_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+[^a-zA-Z0-9]$").unwrap());

/// True when the whole password matches one of the three weak shapes.
pub fn has_weak_structure(password: &str) -> bool {
    LETTERS_THEN_DIGITS.is_match(password)
        || CAPITALIZED_WORD.is_match(password)
        || LETTERS_THEN_SPECIAL.is_match(password)
}

/// Subtracts [`STRUCTURE_PENALTY_BITS`] when the password has a weak
/// structure, otherwise passes the estimate through.
///
/// The predicates are alternatives for a single penalty: a match deducts the
/// 8 bits exactly once, never once per predicate.
pub fn weak_structure_penalty(entropy: f64, password: &str) -> f64 {
    if has_weak_structure(password) {
        entropy - STRUCTURE_PENALTY_BITS
    } else {
        entropy
    }
}
