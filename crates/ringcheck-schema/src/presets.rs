//! # Built-in Sample Structures
//!
//! A small gallery of named structures covering the interesting rungs of
//! the classification ladder, from fields down to a non-commutative ring
//! riddled with zero divisors. Useful as documentation, as CLI demo input,
//! and as known-answer fixtures.

use crate::document::StructureDocument;

/// A named, statically defined sample structure.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Stable lookup name (lower-kebab).
    pub name: &'static str,
    /// One-line description shown in listings.
    pub summary: &'static str,
    elements: &'static [&'static str],
    addition: &'static [&'static [&'static str]],
    multiplication: &'static [&'static [&'static str]],
}

impl Preset {
    /// Materialize the preset as a structure document.
    pub fn document(&self) -> StructureDocument {
        StructureDocument {
            name: Some(self.name.to_string()),
            size: Some(self.elements.len()),
            elements: Some(self.elements.iter().map(|s| s.to_string()).collect()),
            addition_table: to_grid(self.addition),
            multiplication_table: to_grid(self.multiplication),
        }
    }
}

fn to_grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

/// The gallery, in rough order of structure strength.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "field-z3",
        summary: "The field Z3: addition and multiplication mod 3",
        elements: &["A", "B", "C"],
        addition: &[&["A", "B", "C"], &["B", "C", "A"], &["C", "A", "B"]],
        multiplication: &[&["A", "A", "A"], &["A", "B", "C"], &["A", "C", "B"]],
    },
    Preset {
        name: "boolean",
        summary: "Two-element Boolean ring: XOR addition, AND multiplication (a field, isomorphic to Z2)",
        elements: &["A", "B"],
        addition: &[&["A", "B"], &["B", "A"]],
        multiplication: &[&["A", "A"], &["A", "B"]],
    },
    Preset {
        name: "mod4",
        summary: "Z4: mod-4 arithmetic; commutative ring with unity, zero divisor C*C = A",
        elements: &["A", "B", "C", "D"],
        addition: &[
            &["A", "B", "C", "D"],
            &["B", "C", "D", "A"],
            &["C", "D", "A", "B"],
            &["D", "A", "B", "C"],
        ],
        multiplication: &[
            &["A", "A", "A", "A"],
            &["A", "B", "C", "D"],
            &["A", "C", "A", "C"],
            &["A", "D", "C", "B"],
        ],
    },
    Preset {
        name: "zero",
        summary: "Zero-multiplication ring over the cyclic group Z3: every product is the additive identity",
        elements: &["A", "B", "C"],
        addition: &[&["A", "B", "C"], &["B", "C", "A"], &["C", "A", "B"]],
        multiplication: &[&["A", "A", "A"], &["A", "A", "A"], &["A", "A", "A"]],
    },
    Preset {
        name: "klein-zero-divisors",
        summary: "Non-commutative ring over the Klein four-group; element C multiplies everything to zero",
        elements: &["A", "B", "C", "D"],
        addition: &[
            &["A", "B", "C", "D"],
            &["B", "A", "D", "C"],
            &["C", "D", "A", "B"],
            &["D", "C", "B", "A"],
        ],
        multiplication: &[
            &["A", "A", "A", "A"],
            &["A", "B", "C", "D"],
            &["A", "A", "A", "A"],
            &["A", "B", "C", "D"],
        ],
    },
];

/// Look up a preset by name, case-insensitively.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
