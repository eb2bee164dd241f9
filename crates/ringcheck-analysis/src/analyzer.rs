//! # The Analyzer
//!
//! [`analyze`] runs every axiom check over a [`TableModel`] and assembles
//! the immutable [`RingAnalysis`] record. It is a pure function: no state
//! between calls, no I/O, no failure modes once the model exists — identical
//! input produces an identical record, wherever and whenever it runs.

use ringcheck_core::{OperationKind, TableModel};

use crate::axioms::{
    check_associativity, check_commutativity, check_distributivity, check_inverses, find_identity,
    scan_zero_divisors, InverseCoverage, ZeroDivisorScan,
};
use crate::classify::{classify, AxiomFacts};
use crate::report::RingAnalysis;

/// Analyze a table model: verify each ring axiom, enumerate zero divisors,
/// and classify the structure.
///
/// Every check runs over the full element set; "not applicable" outcomes
/// (inverses without an identity, zero divisors without a zero) are recorded
/// as such rather than guessed at. Bounded by the O(n³) associativity and
/// distributivity scans.
pub fn analyze(model: &TableModel) -> RingAnalysis {
    let n = model.size();
    tracing::debug!(size = n, "analyzing operation tables");

    let addition_associative = check_associativity(model, OperationKind::Addition);
    let addition_commutative = check_commutativity(model, OperationKind::Addition);
    let additive_identity = find_identity(model, OperationKind::Addition);
    let zero = additive_identity
        .unique()
        .and_then(|label| model.elements().index_of(label));

    let additive_inverses = match zero {
        Some(zero) => check_inverses(model, OperationKind::Addition, zero, None),
        None => InverseCoverage::NotApplicable,
    };

    let multiplication_associative = check_associativity(model, OperationKind::Multiplication);
    let multiplication_commutative = check_commutativity(model, OperationKind::Multiplication);
    let unity = find_identity(model, OperationKind::Multiplication);
    let unity_index = unity
        .unique()
        .and_then(|label| model.elements().index_of(label));

    // Inverses are sought for every element except the additive identity;
    // without a unique zero the exclusion is empty rather than guessed.
    let multiplicative_inverses = match unity_index {
        Some(one) => check_inverses(model, OperationKind::Multiplication, one, zero),
        None => InverseCoverage::NotApplicable,
    };

    let distributivity = check_distributivity(model);

    let zero_divisors = match zero {
        Some(zero) => ZeroDivisorScan::Checked {
            pairs: scan_zero_divisors(model, zero),
        },
        None => ZeroDivisorScan::NotApplicable,
    };

    let is_ring = addition_associative.holds
        && addition_commutative.holds
        && additive_identity.is_found()
        && additive_inverses.is_complete()
        && multiplication_associative.holds
        && distributivity.holds();

    let facts = AxiomFacts {
        is_ring,
        mul_commutative: multiplication_commutative.holds,
        has_unity: unity.is_found(),
        unity_is_zero: match (unity_index, zero) {
            (Some(one), Some(zero)) => one == zero,
            _ => false,
        },
        all_nonzero_invertible: multiplicative_inverses.is_complete(),
        has_zero_divisors: zero_divisors.found_any(),
    };
    let classification = classify(&facts);
    tracing::debug!(%classification, is_ring, "analysis complete");

    RingAnalysis {
        size: n,
        addition_associative,
        addition_commutative,
        additive_identity,
        additive_inverses,
        multiplication_associative,
        multiplication_commutative,
        unity,
        multiplicative_inverses,
        distributivity,
        zero_divisors,
        is_ring,
        classification,
    }
}
