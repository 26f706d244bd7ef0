//! Password entropy evaluator - main evaluation logic.

use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::alphabet::{base_entropy, character_set_size};
use crate::blacklist::Blacklist;
use crate::config::EvaluatorConfig;
use crate::penalties::{PenaltyFn, blacklist_penalty, weak_structure_penalty};
use crate::types::{EntropyEvaluation, StrengthTier};

/// The scoring engine.
///
/// Everything is fixed at construction and evaluation never mutates the
/// engine, so one instance can be shared across threads without locking.
pub struct Evaluator {
    labels: [String; 6],
    style_classes: [String; 6],
    penalties: Vec<PenaltyFn>,
    blacklist: Arc<Blacklist>,
    display: Option<String>,
}

impl Evaluator {
    /// Builds the engine from a configuration.
    ///
    /// The blacklist store is the default corpus followed by the configured
    /// extras; the penalty pipeline is the two built-ins (weak structure,
    /// then blacklist) followed by the configured functions, in order.
    pub fn new(config: EvaluatorConfig) -> Self {
        let EvaluatorConfig {
            labels,
            style_classes,
            functions,
            blacklist,
            display,
        } = config;

        let store = Arc::new(Blacklist::with_extra(blacklist));

        let mut penalties: Vec<PenaltyFn> = Vec::with_capacity(2 + functions.len());
        penalties.push(Box::new(weak_structure_penalty));
        let lookup = Arc::clone(&store);
        penalties.push(Box::new(move |entropy, password: &str| {
            blacklist_penalty(entropy, password, &lookup)
        }));
        penalties.extend(functions);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "evaluator configured: {} blacklist entries, {} penalty functions",
            store.len(),
            penalties.len()
        );

        Self {
            labels,
            style_classes,
            penalties,
            blacklist: store,
            display,
        }
    }

    /// Estimates the guessing difficulty of `password` in bits and classifies
    /// it into a tier.
    ///
    /// Synchronous and pure: character-set estimate, base entropy, the
    /// penalty pipeline in order, then classification. Defined for every
    /// input, the empty password included.
    pub fn evaluate(&self, password: &SecretString) -> EntropyEvaluation {
        let pwd = password.expose_secret();

        let set_size = character_set_size(pwd);
        let mut bits = base_entropy(set_size, pwd.chars().count());

        for penalty in &self.penalties {
            bits = penalty(bits, pwd);
        }

        let tier = StrengthTier::from_bits(bits);
        EntropyEvaluation {
            bits,
            tier,
            label: self.labels[tier.index()].clone(),
            style_class: self.style_classes[tier.index()].clone(),
        }
    }

    /// Async wrapper for event-driven hosts: waits out a short debounce
    /// window, then evaluates and sends the result over `tx`.
    ///
    /// A token cancelled before the window elapses aborts the call without
    /// sending anything, so rapid keystrokes can cancel stale evaluations and
    /// let only the latest one report.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<EntropyEvaluation>,
    ) {
        use std::time::Duration;

        #[cfg(feature = "tracing")]
        tracing::info!("evaluation is about to start...");

        tokio::time::sleep(Duration::from_millis(300)).await;
        if token.is_cancelled() {
            return;
        }

        let evaluation = self.evaluate(password);
        if tx.send(evaluation).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password evaluation result: receiver dropped");
        }
    }

    /// The blacklist store the engine consults.
    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Opaque display target from the configuration, for the render layer.
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluatorConfig::default())
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("labels", &self.labels)
            .field("style_classes", &self.style_classes)
            .field("penalties", &self.penalties.len())
            .field("blacklist_entries", &self.blacklist.len())
            .field("display", &self.display)
            .finish()
    }
}

/// Evaluates a password with the default configuration.
///
/// Convenience for one-off checks. It builds a fresh default engine per call,
/// so hosts on a keystroke path should construct an [`Evaluator`] once and
/// reuse it.
pub fn evaluate_password_entropy(password: &SecretString) -> EntropyEvaluation {
    Evaluator::default().evaluate(password)
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(password: &str) -> SecretString {
        SecretString::new(password.to_string().into())
    }

    #[tokio::test]
    async fn test_evaluate_tx_sends_result() {
        let evaluator = Evaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluator.evaluate_tx(&secret("K#9zQ!2vL"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.tier, StrengthTier::Pass);
    }

    #[tokio::test]
    async fn test_evaluate_tx_cancelled_sends_nothing() {
        let evaluator = Evaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluator.evaluate_tx(&secret("TestPass123!"), token, tx).await;

        // The sender was dropped without a send.
        assert!(rx.recv().await.is_none());
    }
}
