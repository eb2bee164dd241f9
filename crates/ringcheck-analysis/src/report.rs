//! # The Analysis Result Record
//!
//! [`RingAnalysis`] is the immutable record an analysis run produces: every
//! axiom verdict, both identity search outcomes, inverse coverage, the
//! zero-divisor set, and the final classification. It is plain owned data —
//! `Send + Sync`, no interior mutability — so it crosses thread boundaries
//! as-is, and serde gives it a stable serialized shape for callers that
//! persist or export it.
//!
//! Wall-clock timing deliberately does not live here: the record is a pure
//! function of the input tables, byte-identical across repeated runs.

use serde::{Deserialize, Serialize};

use crate::axioms::{
    AssociativityCheck, CommutativityCheck, DistributivityCheck, IdentitySearch, InverseCoverage,
    ZeroDivisorScan,
};
use crate::classify::Classification;

/// Complete verdict set for one analyzed structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingAnalysis {
    /// Element count n of the analyzed structure.
    pub size: usize,
    /// Associativity of addition.
    pub addition_associative: AssociativityCheck,
    /// Commutativity of addition.
    pub addition_commutative: CommutativityCheck,
    /// Additive identity ("zero") search outcome.
    pub additive_identity: IdentitySearch,
    /// Additive inverse coverage over all elements.
    pub additive_inverses: InverseCoverage,
    /// Associativity of multiplication.
    pub multiplication_associative: AssociativityCheck,
    /// Commutativity of multiplication.
    pub multiplication_commutative: CommutativityCheck,
    /// Multiplicative identity ("unity") search outcome.
    pub unity: IdentitySearch,
    /// Two-sided multiplicative inverse coverage over nonzero elements;
    /// `Incomplete` lists exactly the elements with no inverse.
    pub multiplicative_inverses: InverseCoverage,
    /// Both distributive laws, checked per side.
    pub distributivity: DistributivityCheck,
    /// Ordered nonzero pairs multiplying to zero.
    pub zero_divisors: ZeroDivisorScan,
    /// Whether every ring axiom holds.
    pub is_ring: bool,
    /// Final ladder verdict.
    pub classification: Classification,
}

impl RingAnalysis {
    /// Whether addition forms an abelian group.
    pub fn additive_group_holds(&self) -> bool {
        self.addition_associative.holds
            && self.addition_commutative.holds
            && self.additive_identity.is_found()
            && self.additive_inverses.is_complete()
    }

    /// Whether the scan ran and found at least one zero-divisor pair.
    pub fn has_zero_divisors(&self) -> bool {
        self.zero_divisors.found_any()
    }

    /// Human-readable names of the ring axioms that failed, in check order.
    /// Empty exactly when [`RingAnalysis::is_ring`] is true.
    pub fn failed_ring_axioms(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.addition_associative.holds {
            failed.push("associativity of addition");
        }
        if !self.addition_commutative.holds {
            failed.push("commutativity of addition");
        }
        if !self.additive_identity.is_found() {
            failed.push("existence of an additive identity");
        }
        if !self.additive_inverses.is_complete() {
            failed.push("additive inverses for every element");
        }
        if !self.multiplication_associative.holds {
            failed.push("associativity of multiplication");
        }
        if !self.distributivity.holds() {
            failed.push("distributivity of multiplication over addition");
        }
        failed
    }
}
