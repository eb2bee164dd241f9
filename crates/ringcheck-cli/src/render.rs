//! # Text Report Rendering
//!
//! Turns a [`ReportDocument`] into the human-readable summary `ringcheck
//! analyze` prints: one line per checked property, witnesses for failed
//! laws, and the final classification.

use std::fmt::Write;

use ringcheck_analysis::{
    DistributiveSide, IdentitySearch, InverseCoverage, TripleCounterexample, ZeroDivisorScan,
};
use ringcheck_core::OperationKind;
use ringcheck_schema::ReportDocument;

fn yes_no(holds: bool) -> &'static str {
    if holds {
        "yes"
    } else {
        "NO"
    }
}

fn identity_line(search: &IdentitySearch) -> String {
    match search {
        IdentitySearch::Found { element } => element.clone(),
        IdentitySearch::Absent => "none found".to_string(),
        IdentitySearch::Ambiguous { candidates } => {
            format!("ambiguous: {} (malformed table)", candidates.join(", "))
        }
    }
}

fn inverses_line(coverage: &InverseCoverage, scope: &str) -> String {
    match coverage {
        InverseCoverage::NotApplicable => "not applicable (no identity)".to_string(),
        InverseCoverage::Complete => format!("all {scope}"),
        InverseCoverage::Incomplete { missing } => {
            format!("missing for {}", missing.join(", "))
        }
    }
}

fn associativity_witness(ce: &TripleCounterexample, symbol: &str) -> String {
    format!(
        "({a}{op}{b}){op}{c} = {left} but {a}{op}({b}{op}{c}) = {right}",
        a = ce.a,
        b = ce.b,
        c = ce.c,
        op = symbol,
        left = ce.left,
        right = ce.right,
    )
}

fn distributivity_witness(ce: &TripleCounterexample, left_side: bool) -> String {
    if left_side {
        format!(
            "{a}·({b}+{c}) = {lhs} but {a}·{b}+{a}·{c} = {rhs}",
            a = ce.a,
            b = ce.b,
            c = ce.c,
            lhs = ce.left,
            rhs = ce.right,
        )
    } else {
        format!(
            "({b}+{c})·{a} = {lhs} but {b}·{a}+{c}·{a} = {rhs}",
            a = ce.a,
            b = ce.b,
            c = ce.c,
            lhs = ce.left,
            rhs = ce.right,
        )
    }
}

/// Render the full text report.
pub fn render_report(report: &ReportDocument) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();
    let title = report.name.as_deref().unwrap_or("structure");
    let _ = writeln!(
        out,
        "{title}: {n} elements ({elements})",
        n = report.size,
        elements = report.elements.join(", "),
    );
    let _ = writeln!(out);

    let rows: Vec<(&str, String)> = vec![
        (
            "associativity (addition)",
            yes_no(analysis.addition_associative.holds).to_string(),
        ),
        (
            "commutativity (addition)",
            yes_no(analysis.addition_commutative.holds).to_string(),
        ),
        (
            "additive identity",
            identity_line(&analysis.additive_identity),
        ),
        (
            "additive inverses",
            inverses_line(&analysis.additive_inverses, "elements"),
        ),
        (
            "associativity (multiplication)",
            yes_no(analysis.multiplication_associative.holds).to_string(),
        ),
        (
            "commutativity (multiplication)",
            yes_no(analysis.multiplication_commutative.holds).to_string(),
        ),
        ("unity", identity_line(&analysis.unity)),
        (
            "multiplicative inverses",
            inverses_line(&analysis.multiplicative_inverses, "nonzero elements"),
        ),
        (
            "distributivity",
            match analysis.distributivity.failed_side() {
                None => "yes".to_string(),
                Some(DistributiveSide::Both) => "NO (both sides fail)".to_string(),
                Some(side) => format!("NO ({side} side fails)"),
            },
        ),
        (
            "zero divisors",
            match &analysis.zero_divisors {
                ZeroDivisorScan::NotApplicable => {
                    "not applicable (no additive identity)".to_string()
                }
                ZeroDivisorScan::Checked { pairs } if pairs.is_empty() => "none".to_string(),
                ZeroDivisorScan::Checked { pairs } => pairs
                    .iter()
                    .map(|pair| format!("({}, {})", pair.left, pair.right))
                    .collect::<Vec<_>>()
                    .join(", "),
            },
        ),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<32} {value}");
    }

    for ce in &analysis.addition_associative.counterexamples {
        let symbol = OperationKind::Addition.symbol();
        let _ = writeln!(out, "    e.g. {}", associativity_witness(ce, symbol));
    }
    for ce in &analysis.multiplication_associative.counterexamples {
        let symbol = OperationKind::Multiplication.symbol();
        let _ = writeln!(out, "    e.g. {}", associativity_witness(ce, symbol));
    }
    for ce in &analysis.distributivity.left.counterexamples {
        let _ = writeln!(out, "    e.g. {}", distributivity_witness(ce, true));
    }
    for ce in &analysis.distributivity.right.counterexamples {
        let _ = writeln!(out, "    e.g. {}", distributivity_witness(ce, false));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Classification: {}", analysis.classification);
    if !analysis.is_ring {
        let _ = writeln!(
            out,
            "Failed axioms: {}",
            analysis.failed_ring_axioms().join("; ")
        );
    }
    out
}
