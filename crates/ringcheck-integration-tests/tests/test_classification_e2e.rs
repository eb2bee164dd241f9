//! # Classification End-to-End Tests
//!
//! Known structures through the full document → model → analysis pipeline:
//!
//! 1. Z3 (mod-3 arithmetic) is a Field: no zero divisors, every nonzero
//!    element invertible
//! 2. Z4 (mod-4 arithmetic) is a Commutative Ring with Unity and no more,
//!    because (C, C) is a zero-divisor pair
//! 3. The two-element Boolean ring (XOR/AND) coincides with the Z2 field —
//!    the structures are isomorphic and classify identically
//! 4. A crafted associativity violation yields Not a Ring with every
//!    downstream flag false
//! 5. The Klein-group sample is a genuine non-commutative ring without unity

use ringcheck_analysis::{analyze, Classification, IdentitySearch, ZeroDivisorPair};
use ringcheck_core::TableModel;
use ringcheck_schema::{find_preset, StructureDocument};

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn preset_model(name: &str) -> TableModel {
    find_preset(name)
        .unwrap_or_else(|| panic!("preset {name} missing"))
        .document()
        .to_model()
        .unwrap_or_else(|e| panic!("preset {name} invalid: {e}"))
}

#[test]
fn z3_is_a_field() {
    let analysis = analyze(&preset_model("field-z3"));
    assert_eq!(analysis.classification, Classification::Field);
    assert!(analysis.is_ring);
    assert!(!analysis.has_zero_divisors());
    assert!(analysis.multiplicative_inverses.is_complete());
    assert_eq!(
        analysis.additive_identity,
        IdentitySearch::Found {
            element: "A".to_string()
        }
    );
    assert_eq!(
        analysis.unity,
        IdentitySearch::Found {
            element: "B".to_string()
        }
    );
}

#[test]
fn z4_is_a_commutative_ring_with_unity_only() {
    let analysis = analyze(&preset_model("mod4"));
    assert_eq!(
        analysis.classification,
        Classification::CommutativeRingWithUnity
    );
    // (C, C) — that is, (2, 2) — multiplies to zero, blocking Integral
    // Domain and everything above it.
    assert_eq!(
        analysis.zero_divisors.pairs(),
        [ZeroDivisorPair {
            left: "C".to_string(),
            right: "C".to_string()
        }]
    );
    assert_eq!(analysis.multiplicative_inverses.missing(), ["C".to_string()]);
}

#[test]
fn boolean_ring_and_z2_coincide() {
    // XOR/AND over {A, B} and mod-2 arithmetic over {A, B} are the same
    // structure element-for-element.
    let boolean = preset_model("boolean");
    let z2 = TableModel::build(
        ["A", "B"],
        &grid(&[&["A", "B"], &["B", "A"]]),
        &grid(&[&["A", "A"], &["A", "B"]]),
    )
    .unwrap();
    assert_eq!(boolean, z2);

    let analysis = analyze(&boolean);
    assert_eq!(analysis.classification, Classification::Field);
    // Every element is its own additive inverse under XOR.
    assert!(analysis.additive_inverses.is_complete());
    for label in ["A", "B"] {
        let doubled = boolean
            .apply(ringcheck_core::OperationKind::Addition, label, label)
            .unwrap();
        assert_eq!(doubled, "A");
    }
}

#[test]
fn associativity_violation_is_not_a_ring() {
    let document = StructureDocument {
        name: Some("broken-addition".to_string()),
        size: None,
        elements: Some(vec!["A".to_string(), "B".to_string()]),
        addition_table: grid(&[&["A", "B"], &["A", "A"]]),
        multiplication_table: grid(&[&["A", "A"], &["A", "B"]]),
    };
    let analysis = analyze(&document.to_model().unwrap());

    assert!(!analysis.addition_associative.holds);
    assert!(!analysis.is_ring);
    assert_eq!(analysis.classification, Classification::NotARing);
    // Downstream classifications must all be unreachable.
    assert_ne!(analysis.classification, Classification::CommutativeRing);
    assert_ne!(analysis.classification, Classification::Field);
    assert!(!analysis.additive_group_holds());
    assert!(analysis
        .failed_ring_axioms()
        .contains(&"associativity of addition"));
}

#[test]
fn klein_sample_is_a_noncommutative_ring() {
    let analysis = analyze(&preset_model("klein-zero-divisors"));
    assert!(analysis.is_ring);
    assert!(!analysis.multiplication_commutative.holds);
    assert_eq!(analysis.unity, IdentitySearch::Absent);
    assert_eq!(analysis.classification, Classification::Ring);
    assert!(analysis.has_zero_divisors());
}

#[test]
fn zero_multiplication_preset_is_a_commutative_ring() {
    let analysis = analyze(&preset_model("zero"));
    assert_eq!(analysis.classification, Classification::CommutativeRing);
    assert_eq!(analysis.unity, IdentitySearch::Absent);
    // Every nonzero pair multiplies to zero: 2 × 2 ordered pairs.
    assert_eq!(analysis.zero_divisors.pairs().len(), 4);
}
