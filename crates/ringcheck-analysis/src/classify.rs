//! # Classification Ladder
//!
//! Maps the distilled axiom facts of a structure to its most specific
//! ring-theoretic class. The ladder is a flat, ordered chain of named rules
//! over a shared [`AxiomFacts`] record — most specific first, first match
//! wins — so the decision table stays auditable rule by rule instead of
//! being scattered across nested branches.

use serde::{Deserialize, Serialize};

/// The final label assigned to a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// At least one ring axiom fails.
    NotARing,
    /// All ring axioms hold, no further structure.
    Ring,
    /// Ring with commutative multiplication.
    CommutativeRing,
    /// Ring with a multiplicative identity.
    RingWithUnity,
    /// Both of the above.
    CommutativeRingWithUnity,
    /// Commutative ring with unity, no zero divisors, unity ≠ zero.
    IntegralDomain,
    /// Ring with unity ≠ zero where every nonzero element is invertible.
    DivisionRing,
    /// Commutative division ring.
    Field,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NotARing => "Not a Ring",
            Self::Ring => "Ring",
            Self::CommutativeRing => "Commutative Ring",
            Self::RingWithUnity => "Ring with Unity",
            Self::CommutativeRingWithUnity => "Commutative Ring with Unity",
            Self::IntegralDomain => "Integral Domain",
            Self::DivisionRing => "Division Ring",
            Self::Field => "Field",
        };
        write!(f, "{label}")
    }
}

/// Boolean facts distilled from the axiom checks, shared by every ladder
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxiomFacts {
    /// Addition forms an abelian group, multiplication is associative, and
    /// both distributive laws hold.
    pub is_ring: bool,
    /// Multiplication is commutative.
    pub mul_commutative: bool,
    /// A unique multiplicative identity exists.
    pub has_unity: bool,
    /// The multiplicative identity coincides with the additive identity
    /// (only possible in the one-element structure for a genuine ring).
    pub unity_is_zero: bool,
    /// Every element other than the additive identity has a two-sided
    /// multiplicative inverse.
    pub all_nonzero_invertible: bool,
    /// Some ordered pair of nonzero elements multiplies to zero.
    pub has_zero_divisors: bool,
}

impl AxiomFacts {
    fn has_proper_unity(&self) -> bool {
        self.has_unity && !self.unity_is_zero
    }
}

/// The ladder itself. Order is the decision order; the final `Ring` rule is
/// total over ring-satisfying facts, and `NotARing` catches the rest.
const LADDER: &[(Classification, fn(&AxiomFacts) -> bool)] = &[
    (Classification::Field, |f| {
        f.is_ring && f.has_proper_unity() && f.all_nonzero_invertible && f.mul_commutative
    }),
    (Classification::DivisionRing, |f| {
        f.is_ring && f.has_proper_unity() && f.all_nonzero_invertible
    }),
    (Classification::IntegralDomain, |f| {
        f.is_ring && f.mul_commutative && f.has_proper_unity() && !f.has_zero_divisors
    }),
    (Classification::CommutativeRingWithUnity, |f| {
        f.is_ring && f.mul_commutative && f.has_unity
    }),
    (Classification::CommutativeRing, |f| f.is_ring && f.mul_commutative),
    (Classification::RingWithUnity, |f| f.is_ring && f.has_unity),
    (Classification::Ring, |f| f.is_ring),
];

/// Walk the ladder; the first applicable rule names the structure.
pub(crate) fn classify(facts: &AxiomFacts) -> Classification {
    LADDER
        .iter()
        .find(|(_, applies)| applies(facts))
        .map(|(label, _)| *label)
        .unwrap_or(Classification::NotARing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_facts() -> AxiomFacts {
        AxiomFacts {
            is_ring: true,
            mul_commutative: false,
            has_unity: false,
            unity_is_zero: false,
            all_nonzero_invertible: false,
            has_zero_divisors: false,
        }
    }

    #[test]
    fn non_ring_facts_fall_through() {
        let facts = AxiomFacts {
            is_ring: false,
            mul_commutative: true,
            has_unity: true,
            unity_is_zero: false,
            all_nonzero_invertible: true,
            has_zero_divisors: false,
        };
        assert_eq!(classify(&facts), Classification::NotARing);
    }

    #[test]
    fn bare_ring() {
        assert_eq!(classify(&ring_facts()), Classification::Ring);
    }

    #[test]
    fn commutative_and_unity_tiers() {
        let mut facts = ring_facts();
        facts.mul_commutative = true;
        assert_eq!(classify(&facts), Classification::CommutativeRing);

        let mut facts = ring_facts();
        facts.has_unity = true;
        assert_eq!(classify(&facts), Classification::RingWithUnity);

        let mut facts = ring_facts();
        facts.mul_commutative = true;
        facts.has_unity = true;
        facts.has_zero_divisors = true;
        assert_eq!(classify(&facts), Classification::CommutativeRingWithUnity);
    }

    #[test]
    fn integral_domain_needs_proper_unity_and_no_zero_divisors() {
        let mut facts = ring_facts();
        facts.mul_commutative = true;
        facts.has_unity = true;
        assert_eq!(classify(&facts), Classification::IntegralDomain);

        facts.unity_is_zero = true;
        assert_eq!(classify(&facts), Classification::CommutativeRingWithUnity);
    }

    #[test]
    fn division_ring_and_field() {
        let mut facts = ring_facts();
        facts.has_unity = true;
        facts.all_nonzero_invertible = true;
        assert_eq!(classify(&facts), Classification::DivisionRing);

        facts.mul_commutative = true;
        assert_eq!(classify(&facts), Classification::Field);
    }

    #[test]
    fn trivial_ring_is_not_a_field() {
        // One-element structure: unity exists but equals zero.
        let facts = AxiomFacts {
            is_ring: true,
            mul_commutative: true,
            has_unity: true,
            unity_is_zero: true,
            all_nonzero_invertible: true,
            has_zero_divisors: false,
        };
        assert_eq!(classify(&facts), Classification::CommutativeRingWithUnity);
    }

    #[test]
    fn display_labels() {
        assert_eq!(Classification::NotARing.to_string(), "Not a Ring");
        assert_eq!(
            Classification::CommutativeRingWithUnity.to_string(),
            "Commutative Ring with Unity"
        );
        assert_eq!(Classification::Field.to_string(), "Field");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_value(Classification::IntegralDomain).unwrap();
        assert_eq!(json, "integral_domain");
    }
}
