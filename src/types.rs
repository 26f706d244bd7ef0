//! Strength tiers and evaluation results.

/// Default human-readable labels for the six tiers, indexed by tier.
pub const DEFAULT_LABELS: [&str; 6] = [
    "Very weak",
    "Weak",
    "Pass",
    "Strong",
    "Very strong",
    "Super strong",
];

/// Default style identifiers for the six tiers, indexed by tier.
pub const DEFAULT_STYLE_CLASSES: [&str; 6] = [
    "very-weak",
    "weak",
    "pass",
    "strong",
    "very-strong",
    "super-strong",
];

/// One of six ordered strength tiers, assigned from final entropy via fixed
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak = 0,
    Weak = 1,
    Pass = 2,
    Strong = 3,
    VeryStrong = 4,
    SuperStrong = 5,
}

impl StrengthTier {
    /// Classifies a final entropy value into a tier.
    ///
    /// The thresholds are 78, 66, 56, 48 and 40 bits for the top five tiers;
    /// anything below 40 bits (including negative values after penalties) is
    /// `VeryWeak`. This is a pure step function, defined for every input.
    pub fn from_bits(bits: f64) -> Self {
        if bits >= 78.0 {
            Self::SuperStrong
        } else if bits >= 66.0 {
            Self::VeryStrong
        } else if bits >= 56.0 {
            Self::Strong
        } else if bits >= 48.0 {
            Self::Pass
        } else if bits >= 40.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    /// Zero-based index of this tier, 0 (weakest) through 5 (strongest).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Default label for this tier.
    pub fn label(self) -> &'static str {
        DEFAULT_LABELS[self.index()]
    }

    /// Default style identifier for this tier.
    pub fn style_class(self) -> &'static str {
        DEFAULT_STYLE_CLASSES[self.index()]
    }
}

/// Result of evaluating a single password.
///
/// `label` and `style_class` are resolved from the evaluator configuration,
/// so a render layer can display them without any table lookup of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyEvaluation {
    /// Final entropy in bits. May be negative after penalties.
    pub bits: f64,
    /// Tier classified from `bits`.
    pub tier: StrengthTier,
    /// Label for the tier.
    pub label: String,
    /// Style identifier for the tier.
    pub style_class: String,
}

impl EntropyEvaluation {
    /// Zero-based index of the assigned tier.
    pub fn tier_index(&self) -> usize {
        self.tier.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_threshold_boundaries() {
        assert_eq!(StrengthTier::from_bits(78.0), StrengthTier::SuperStrong);
        assert_eq!(StrengthTier::from_bits(77.999), StrengthTier::VeryStrong);
        assert_eq!(StrengthTier::from_bits(66.0), StrengthTier::VeryStrong);
        assert_eq!(StrengthTier::from_bits(65.999), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_bits(56.0), StrengthTier::Strong);
        assert_eq!(StrengthTier::from_bits(55.999), StrengthTier::Pass);
        assert_eq!(StrengthTier::from_bits(48.0), StrengthTier::Pass);
        assert_eq!(StrengthTier::from_bits(47.999), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_bits(40.0), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_bits(39.999), StrengthTier::VeryWeak);
    }

    #[test]
    fn test_from_bits_low_end_is_total() {
        assert_eq!(StrengthTier::from_bits(0.0), StrengthTier::VeryWeak);
        assert_eq!(StrengthTier::from_bits(-12.5), StrengthTier::VeryWeak);
    }

    #[test]
    fn test_tier_ordering_and_indices() {
        assert!(StrengthTier::VeryWeak < StrengthTier::Weak);
        assert!(StrengthTier::VeryStrong < StrengthTier::SuperStrong);
        assert_eq!(StrengthTier::VeryWeak.index(), 0);
        assert_eq!(StrengthTier::SuperStrong.index(), 5);
    }

    #[test]
    fn test_default_labels_line_up_with_tiers() {
        assert_eq!(StrengthTier::VeryWeak.label(), "Very weak");
        assert_eq!(StrengthTier::Pass.label(), "Pass");
        assert_eq!(StrengthTier::SuperStrong.label(), "Super strong");
        assert_eq!(StrengthTier::VeryWeak.style_class(), "very-weak");
        assert_eq!(StrengthTier::SuperStrong.style_class(), "super-strong");
    }
}
