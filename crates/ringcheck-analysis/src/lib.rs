//! # ringcheck-analysis — Ring Analyzer
//!
//! Consumes a validated [`TableModel`](ringcheck_core::TableModel) and
//! determines which ring-like axioms the structure satisfies, then
//! classifies it:
//!
//! - **Axiom checks** ([`axioms`]): associativity, commutativity, identity
//!   searches, inverse coverage, per-side distributivity, and the
//!   zero-divisor scan — each a pure function producing a typed verdict
//!   record with retained counterexamples.
//!
//! - **Classification** ([`classify`]): the ordered rule ladder from
//!   Not a Ring up through Field, evaluated most-specific-first over the
//!   distilled axiom facts.
//!
//! - **Result record** ([`report`]): the immutable [`RingAnalysis`] a run
//!   returns — every intermediate verdict, not just the final label, so a
//!   caller can explain *why* a classification was reached.
//!
//! - **Worker invocation** ([`worker`]): run the analysis off the caller's
//!   thread with one-shot result delivery and discard-if-superseded
//!   generations.
//!
//! The analyzer holds no state between calls and cannot fail on a valid
//! model: all checks are total over a finite domain and always terminate,
//! bounded by the O(n³) table scans.

pub mod analyzer;
pub mod axioms;
pub mod classify;
pub mod report;
pub mod worker;

// Re-export primary types.
pub use analyzer::analyze;
pub use axioms::{
    check_associativity, check_commutativity, check_distributivity, check_inverses, find_identity,
    scan_zero_divisors, AssociativityCheck, CommutativityCheck, DistributiveLaw, DistributiveSide,
    DistributivityCheck, IdentitySearch, InverseCoverage, PairCounterexample, TripleCounterexample,
    ZeroDivisorPair, ZeroDivisorScan,
};
pub use classify::Classification;
pub use report::RingAnalysis;
pub use worker::{AnalysisJob, AnalysisSession};
