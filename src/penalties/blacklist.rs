//! Blacklist replacement penalty.

use crate::blacklist::Blacklist;

/// Caps the entropy of a blacklisted password at the cost of searching the
/// store.
///
/// A hit *replaces* the incoming estimate with `log2(store length)`: the
/// password falls to one of N known guesses, so its theoretical strength no
/// longer matters. The replacement applies even when it is higher than the
/// incoming value. An empty store or a miss passes the estimate through
/// unchanged.
pub fn blacklist_penalty(entropy: f64, password: &str, store: &Blacklist) -> f64 {
    if store.is_empty() || !store.contains(password) {
        return entropy;
    }
    (store.len() as f64).log2()
}
