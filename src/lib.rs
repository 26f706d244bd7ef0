//! Password entropy estimation library
//!
//! This library estimates the guessing difficulty of a password in bits: a
//! theoretical character-set/length calculation, adjusted by heuristic
//! penalties for the weak patterns humans favor and by a blacklist of
//! known-weak passwords, then mapped to one of six strength tiers.
//!
//! Some of the patterns used for the estimates are based on data collected in
//! the paper "Testing Metrics for Password Creation Policies by Attacking
//! Large Sets of Revealed Passwords" by Weir et al.
//!
//! # Features
//!
//! - `async` (default): Enables a channel-based evaluation wrapper with
//!   cancellation support for event-driven hosts
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_ENTROPY_BLACKLIST_PATH`: Optional path to an extra blacklist corpus
//!   file; see [`env_corpus_path`]. Nothing is loaded automatically; the
//!   default corpus is embedded in the library.
//!
//! # Example
//!
//! ```rust
//! use pwd_entropy::{Evaluator, EvaluatorConfig, StrengthTier};
//! use secrecy::SecretString;
//!
//! // Configure once; the engine is immutable afterwards.
//! let evaluator = Evaluator::new(
//!     EvaluatorConfig::new()
//!         .blacklist(["hunter2"])
//!         .penalty(|bits, password| {
//!             // Host rule: anything under six characters loses 10 bits.
//!             if password.chars().count() < 6 { bits - 10.0 } else { bits }
//!         }),
//! );
//!
//! let password = SecretString::new("K#9zQ!2vL".to_string().into());
//! let evaluation = evaluator.evaluate(&password);
//!
//! assert_eq!(evaluation.tier, StrengthTier::Pass);
//! println!("{:.1} bits: {}", evaluation.bits, evaluation.label);
//! ```

// Internal modules
mod alphabet;
mod blacklist;
mod config;
mod evaluator;
mod penalties;
mod types;

// Public API
pub use alphabet::{base_entropy, character_set_size};
pub use blacklist::{BLACKLIST_PATH_ENV, Blacklist, BlacklistError, env_corpus_path, read_corpus};
pub use config::EvaluatorConfig;
pub use evaluator::{Evaluator, evaluate_password_entropy};
pub use penalties::{
    PenaltyFn, STRUCTURE_PENALTY_BITS, blacklist_penalty, has_weak_structure,
    weak_structure_penalty,
};
pub use types::{DEFAULT_LABELS, DEFAULT_STYLE_CLASSES, EntropyEvaluation, StrengthTier};
