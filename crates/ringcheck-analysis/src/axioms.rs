//! # Axiom Checks
//!
//! Each ring axiom as a pure function of a [`TableModel`], producing a typed
//! verdict record. Verdicts are global — a single counterexample settles the
//! property — but the first few witnesses are retained so a caller can show
//! *why* a law failed, not just that it did.
//!
//! All scans are total over the finite element set: O(n²) for the pairwise
//! laws, O(n³) for associativity and distributivity. Nothing here can fail
//! on a constructed model; the closure invariant keeps every intermediate
//! lookup in range.

use serde::{Deserialize, Serialize};

use ringcheck_core::{OperationKind, TableModel};

/// Witnesses retained per failed law. The verdict itself is global; more
/// counterexamples add noise, not information.
pub(crate) const MAX_COUNTEREXAMPLES: usize = 3;

fn label_of(model: &TableModel, index: usize) -> String {
    model.label(index).as_str().to_string()
}

// ---------------------------------------------------------------------------
// Counterexample records
// ---------------------------------------------------------------------------

/// A pair (a, b) with `a ∘ b ≠ b ∘ a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCounterexample {
    pub a: String,
    pub b: String,
    /// `a ∘ b`.
    pub ab: String,
    /// `b ∘ a`.
    pub ba: String,
}

/// A triple (a, b, c) where the two sides of a three-element law disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleCounterexample {
    pub a: String,
    pub b: String,
    pub c: String,
    /// The left-hand evaluation, e.g. `(a ∘ b) ∘ c`.
    pub left: String,
    /// The right-hand evaluation, e.g. `a ∘ (b ∘ c)`.
    pub right: String,
}

// ---------------------------------------------------------------------------
// Verdict records
// ---------------------------------------------------------------------------

/// Global associativity verdict for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociativityCheck {
    pub holds: bool,
    pub counterexamples: Vec<TripleCounterexample>,
}

/// Global commutativity verdict for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommutativityCheck {
    pub holds: bool,
    pub counterexamples: Vec<PairCounterexample>,
}

/// Outcome of a two-sided identity search over one operation.
///
/// `Ambiguous` is surfaced rather than silently resolved: two distinct
/// two-sided identities cannot coexist in a well-formed operation (e₁ ∘ e₂
/// would have to equal both), so more than one candidate is a
/// malformed-table signal worth reporting. Downstream checks treat it like
/// `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IdentitySearch {
    /// No element satisfies `e ∘ x = x ∘ e = x` for all x.
    Absent,
    /// Exactly one element does.
    Found { element: String },
    /// More than one candidate satisfied the condition.
    Ambiguous { candidates: Vec<String> },
}

impl IdentitySearch {
    /// The identity element, when exactly one was found.
    pub fn unique(&self) -> Option<&str> {
        match self {
            Self::Found { element } => Some(element),
            Self::Absent | Self::Ambiguous { .. } => None,
        }
    }

    /// Whether a unique identity was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Inverse coverage for one operation against its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InverseCoverage {
    /// No unique identity to invert against; the check was skipped.
    NotApplicable,
    /// Every required element has a two-sided inverse.
    Complete,
    /// The listed elements have no two-sided inverse.
    Incomplete { missing: Vec<String> },
}

impl InverseCoverage {
    /// Whether every required element has an inverse.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Elements lacking an inverse. Empty unless `Incomplete`.
    pub fn missing(&self) -> &[String] {
        match self {
            Self::Incomplete { missing } => missing,
            Self::NotApplicable | Self::Complete => &[],
        }
    }
}

/// Which distributive side(s) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributiveSide {
    Left,
    Right,
    Both,
}

impl std::fmt::Display for DistributiveSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// One distributive law (left or right), checked independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributiveLaw {
    pub holds: bool,
    pub counterexamples: Vec<TripleCounterexample>,
}

/// Both distributive laws. A structure satisfying only one side is not
/// distributive, but the failing side is retained for explanation rather
/// than merged away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributivityCheck {
    pub left: DistributiveLaw,
    pub right: DistributiveLaw,
}

impl DistributivityCheck {
    /// Whether multiplication distributes over addition on both sides.
    pub fn holds(&self) -> bool {
        self.left.holds && self.right.holds
    }

    /// Which side failed, if any.
    pub fn failed_side(&self) -> Option<DistributiveSide> {
        match (self.left.holds, self.right.holds) {
            (true, true) => None,
            (false, true) => Some(DistributiveSide::Left),
            (true, false) => Some(DistributiveSide::Right),
            (false, false) => Some(DistributiveSide::Both),
        }
    }
}

/// An ordered pair (x, y) of nonzero elements with `x · y = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroDivisorPair {
    pub left: String,
    pub right: String,
}

/// Zero-divisor scan outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ZeroDivisorScan {
    /// No unique additive identity; there is no zero to divide.
    NotApplicable,
    /// All ordered nonzero pairs whose product is the additive identity.
    Checked { pairs: Vec<ZeroDivisorPair> },
}

impl ZeroDivisorScan {
    /// Whether the scan ran and found at least one pair.
    pub fn found_any(&self) -> bool {
        matches!(self, Self::Checked { pairs } if !pairs.is_empty())
    }

    /// The recorded pairs. Empty unless `Checked` with findings.
    pub fn pairs(&self) -> &[ZeroDivisorPair] {
        match self {
            Self::Checked { pairs } => pairs,
            Self::NotApplicable => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Check `(a ∘ b) ∘ c = a ∘ (b ∘ c)` over the full element set. O(n³).
///
/// Scanning stops once enough counterexamples are retained — the verdict is
/// already settled by the first.
pub fn check_associativity(model: &TableModel, op: OperationKind) -> AssociativityCheck {
    let n = model.size();
    let mut counterexamples = Vec::new();
    for a in 0..n {
        for b in 0..n {
            for c in 0..n {
                let left = model.apply_idx(op, model.apply_idx(op, a, b), c);
                let right = model.apply_idx(op, a, model.apply_idx(op, b, c));
                if left != right {
                    tracing::trace!(%op, a, b, c, "associativity counterexample");
                    counterexamples.push(TripleCounterexample {
                        a: label_of(model, a),
                        b: label_of(model, b),
                        c: label_of(model, c),
                        left: label_of(model, left),
                        right: label_of(model, right),
                    });
                    if counterexamples.len() == MAX_COUNTEREXAMPLES {
                        return AssociativityCheck {
                            holds: false,
                            counterexamples,
                        };
                    }
                }
            }
        }
    }
    AssociativityCheck {
        holds: counterexamples.is_empty(),
        counterexamples,
    }
}

/// Check `a ∘ b = b ∘ a` over the full element set. O(n²).
pub fn check_commutativity(model: &TableModel, op: OperationKind) -> CommutativityCheck {
    let n = model.size();
    let mut counterexamples = Vec::new();
    for a in 0..n {
        for b in 0..n {
            let ab = model.apply_idx(op, a, b);
            let ba = model.apply_idx(op, b, a);
            if ab != ba {
                tracing::trace!(%op, a, b, "commutativity counterexample");
                counterexamples.push(PairCounterexample {
                    a: label_of(model, a),
                    b: label_of(model, b),
                    ab: label_of(model, ab),
                    ba: label_of(model, ba),
                });
                if counterexamples.len() == MAX_COUNTEREXAMPLES {
                    return CommutativityCheck {
                        holds: false,
                        counterexamples,
                    };
                }
            }
        }
    }
    CommutativityCheck {
        holds: counterexamples.is_empty(),
        counterexamples,
    }
}

/// Search for a two-sided identity of `op`: an element e with
/// `e ∘ x = x ∘ e = x` for all x. All elements are scanned; uniqueness is
/// reported, not assumed.
pub fn find_identity(model: &TableModel, op: OperationKind) -> IdentitySearch {
    let n = model.size();
    let mut candidates: Vec<usize> = Vec::new();
    for e in 0..n {
        let two_sided =
            (0..n).all(|x| model.apply_idx(op, e, x) == x && model.apply_idx(op, x, e) == x);
        if two_sided {
            candidates.push(e);
        }
    }
    match candidates.as_slice() {
        [] => IdentitySearch::Absent,
        [e] => IdentitySearch::Found {
            element: label_of(model, *e),
        },
        many => IdentitySearch::Ambiguous {
            candidates: many.iter().map(|&e| label_of(model, e)).collect(),
        },
    }
}

/// Check that every element (optionally excluding one, e.g. the additive
/// identity when inverting under multiplication) has a two-sided inverse:
/// some y with `x ∘ y = y ∘ x = identity`.
pub fn check_inverses(
    model: &TableModel,
    op: OperationKind,
    identity: usize,
    excluded: Option<usize>,
) -> InverseCoverage {
    let n = model.size();
    let mut missing = Vec::new();
    for x in 0..n {
        if excluded == Some(x) {
            continue;
        }
        let has_inverse = (0..n)
            .any(|y| model.apply_idx(op, x, y) == identity && model.apply_idx(op, y, x) == identity);
        if !has_inverse {
            missing.push(label_of(model, x));
        }
    }
    if missing.is_empty() {
        InverseCoverage::Complete
    } else {
        InverseCoverage::Incomplete { missing }
    }
}

/// Check both distributive laws independently. O(n³) each.
///
/// Left: `a · (b + c) = a·b + a·c`. Right: `(b + c) · a = b·a + c·a`.
pub fn check_distributivity(model: &TableModel) -> DistributivityCheck {
    let n = model.size();
    let add = OperationKind::Addition;
    let mul = OperationKind::Multiplication;

    let check_side = |left_side: bool| {
        let mut counterexamples = Vec::new();
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    let sum = model.apply_idx(add, b, c);
                    let (combined, distributed) = if left_side {
                        (
                            model.apply_idx(mul, a, sum),
                            model.apply_idx(
                                add,
                                model.apply_idx(mul, a, b),
                                model.apply_idx(mul, a, c),
                            ),
                        )
                    } else {
                        (
                            model.apply_idx(mul, sum, a),
                            model.apply_idx(
                                add,
                                model.apply_idx(mul, b, a),
                                model.apply_idx(mul, c, a),
                            ),
                        )
                    };
                    if combined != distributed {
                        tracing::trace!(a, b, c, left_side, "distributivity counterexample");
                        counterexamples.push(TripleCounterexample {
                            a: label_of(model, a),
                            b: label_of(model, b),
                            c: label_of(model, c),
                            left: label_of(model, combined),
                            right: label_of(model, distributed),
                        });
                        if counterexamples.len() == MAX_COUNTEREXAMPLES {
                            return DistributiveLaw {
                                holds: false,
                                counterexamples,
                            };
                        }
                    }
                }
            }
        }
        DistributiveLaw {
            holds: counterexamples.is_empty(),
            counterexamples,
        }
    };

    DistributivityCheck {
        left: check_side(true),
        right: check_side(false),
    }
}

/// Enumerate all ordered pairs (x, y), both distinct from the additive
/// identity, with `x · y = 0`. The full set is recorded — callers surface
/// it to explain why a structure is not an integral domain.
pub fn scan_zero_divisors(model: &TableModel, zero: usize) -> Vec<ZeroDivisorPair> {
    let n = model.size();
    let mul = OperationKind::Multiplication;
    let mut pairs = Vec::new();
    for x in 0..n {
        if x == zero {
            continue;
        }
        for y in 0..n {
            if y == zero {
                continue;
            }
            if model.apply_idx(mul, x, y) == zero {
                pairs.push(ZeroDivisorPair {
                    left: label_of(model, x),
                    right: label_of(model, y),
                });
            }
        }
    }
    pairs
}
