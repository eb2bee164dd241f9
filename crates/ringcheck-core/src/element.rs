//! # Element Labels & Element Sets
//!
//! Newtypes for the members of a finite algebraic structure. An element is
//! an opaque label; identity is label equality, and the set of elements is
//! fixed once chosen — nothing here mutates after construction.
//!
//! ## Validation
//!
//! [`ElementLabel`] is validated at construction time: non-empty after
//! trimming, no interior whitespace. [`ElementSet`] additionally rejects
//! duplicates and emptiness, and owns the label→index mapping every table
//! lookup goes through.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InvalidTableError;

// -- Validating Deserialize for ElementLabel ----------------------------------

impl<'de> Deserialize<'de> for ElementLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A single element label, e.g. `"A"` or `"e1"`.
///
/// # Validation
///
/// Must be non-empty after trimming and must not contain interior
/// whitespace. No further format restrictions are imposed because labels are
/// opaque to the analysis — only equality matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ElementLabel(String);

impl ElementLabel {
    /// Create an element label from a string, validating its shape.
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTableError::InvalidLabel`] if the trimmed string is
    /// empty or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidTableError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(InvalidTableError::InvalidLabel { label: raw });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the label string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for ElementLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ElementLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Spreadsheet-style label for an element ordinal: `A`, `B`, …, `Z`, `AA`,
/// `AB`, … Used when a structure definition supplies grids without naming
/// its elements.
pub fn ordinal_label(ordinal: usize) -> String {
    let mut n = ordinal;
    let mut out = String::new();
    loop {
        out.insert(0, char::from(b'A' + (n % 26) as u8));
        match (n / 26).checked_sub(1) {
            Some(next) => n = next,
            None => break,
        }
    }
    out
}

// ---------------------------------------------------------------------------
// ElementSet
// ---------------------------------------------------------------------------

/// The ordered, duplicate-free set of elements a structure is defined over.
///
/// Order is significant: operation tables are indexed by the position of an
/// element in this set. The set is fixed at construction and never grows or
/// shrinks afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSet {
    labels: Vec<ElementLabel>,
    index: HashMap<String, usize>,
}

impl ElementSet {
    /// Build a set from validated labels, rejecting emptiness and duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTableError::EmptyElementSet`] for zero labels and
    /// [`InvalidTableError::DuplicateElement`] (naming the label and its
    /// position) when the same label appears twice.
    pub fn new(labels: Vec<ElementLabel>) -> Result<Self, InvalidTableError> {
        if labels.is_empty() {
            return Err(InvalidTableError::EmptyElementSet);
        }
        let mut index = HashMap::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            if index.insert(label.as_str().to_string(), position).is_some() {
                return Err(InvalidTableError::DuplicateElement {
                    label: label.as_str().to_string(),
                    position,
                });
            }
        }
        Ok(Self { labels, index })
    }

    /// Build a set from raw strings, validating each label on the way in.
    ///
    /// # Errors
    ///
    /// Propagates label validation failures plus the emptiness/duplicate
    /// checks of [`ElementSet::new`].
    pub fn from_labels<I, S>(labels: I) -> Result<Self, InvalidTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels
            .into_iter()
            .map(ElementLabel::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(labels)
    }

    /// Build a set of `n` alphabetically generated labels: `A`, `B`, …
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTableError::EmptyElementSet`] when `n` is zero.
    pub fn alphabetic(n: usize) -> Result<Self, InvalidTableError> {
        Self::from_labels((0..n).map(ordinal_label))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty. Always false for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The label at a given position, if in range.
    pub fn get(&self, position: usize) -> Option<&ElementLabel> {
        self.labels.get(position)
    }

    /// Position of a label in the set, if it is a member.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Whether a label is a member of the set.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Iterate over the labels in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ElementLabel> {
        self.labels.iter()
    }

    /// The labels in order.
    pub fn labels(&self) -> &[ElementLabel] {
        &self.labels
    }
}

impl Serialize for ElementSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.labels.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ElementSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let labels = Vec::<ElementLabel>::deserialize(deserializer)?;
        Self::new(labels).map_err(serde::de::Error::custom)
    }
}
