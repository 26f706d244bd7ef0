//! Evaluator configuration.
//!
//! [`EvaluatorConfig`] is assembled once and consumed by
//! [`Evaluator::new`](crate::Evaluator::new); after that the engine never
//! changes. Labels and style classes replace the defaults wholesale, while
//! penalty functions and blacklist entries append after the built-in ones.

use std::path::Path;

use crate::blacklist::{BlacklistError, read_corpus};
use crate::penalties::PenaltyFn;
use crate::types::{DEFAULT_LABELS, DEFAULT_STYLE_CLASSES};

/// Configuration for an [`Evaluator`](crate::Evaluator).
pub struct EvaluatorConfig {
    pub(crate) labels: [String; 6],
    pub(crate) style_classes: [String; 6],
    pub(crate) functions: Vec<PenaltyFn>,
    pub(crate) blacklist: Vec<String>,
    pub(crate) display: Option<String>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.map(String::from),
            style_classes: DEFAULT_STYLE_CLASSES.map(String::from),
            functions: Vec::new(),
            blacklist: Vec::new(),
            display: None,
        }
    }
}

impl EvaluatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the six tier labels, weakest first.
    pub fn labels<S: Into<String>>(mut self, labels: [S; 6]) -> Self {
        self.labels = labels.map(Into::into);
        self
    }

    /// Replaces the six tier style identifiers, weakest first.
    pub fn style_classes<S: Into<String>>(mut self, classes: [S; 6]) -> Self {
        self.style_classes = classes.map(Into::into);
        self
    }

    /// Appends a penalty function to run after the built-ins and after any
    /// function appended before it.
    ///
    /// The function receives the entropy as adjusted by everything before it
    /// and must be pure and terminating; the pipeline applies whatever it
    /// returns without validation.
    pub fn penalty<F>(mut self, function: F) -> Self
    where
        F: Fn(f64, &str) -> f64 + Send + Sync + 'static,
    {
        self.functions.push(Box::new(function));
        self
    }

    /// Appends known-weak passwords after the default corpus.
    ///
    /// Entries are matched verbatim against lowercased candidates, so they
    /// should be lowercase themselves.
    pub fn blacklist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Loads a corpus file with [`read_corpus`] and appends its entries after
    /// the default corpus and anything added so far.
    ///
    /// # Errors
    ///
    /// Propagates the loader's errors; the configuration built so far is
    /// consumed either way.
    pub fn blacklist_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, BlacklistError> {
        self.blacklist.extend(read_corpus(path)?);
        Ok(self)
    }

    /// Names an opaque display target for the embedding render layer.
    ///
    /// The engine stores the value untouched and hands it back via
    /// [`Evaluator::display`](crate::Evaluator::display); nothing in the
    /// scoring path reads it.
    pub fn display<S: Into<String>>(mut self, target: S) -> Self {
        self.display = Some(target.into());
        self
    }
}
