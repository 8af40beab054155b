//! Registry of hand-authored number sequences.
//!
//! Entries keep registration order so a seeded draw is reproducible.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rule::{Rule, Sequence};
use crate::core::config::MIN_SEQUENCE_LEN;

/// Catalogue entry identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogueId(pub u16);

impl CatalogueId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CatalogueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// One authored sequence with its blank position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    pub id: CatalogueId,
    /// Short name such as `A1` or `G3`.
    pub label: String,
    pub values: Sequence,
    pub blank_index: usize,
}

impl CatalogueEntry {
    pub fn new(id: CatalogueId, label: impl Into<String>, values: &[i64], blank_index: usize) -> Self {
        Self {
            id,
            label: label.into(),
            values: Sequence::from_slice(values),
            blank_index,
        }
    }

    /// The rule this entry presents.
    #[must_use]
    pub fn rule(&self) -> Rule {
        Rule::FixedSequence {
            id: self.id,
            values: self.values.clone(),
            blank_index: self.blank_index,
        }
    }
}

/// Ordered collection of catalogue entries.
///
/// ## Example
///
/// ```
/// use pattern_quiz::puzzles::{Catalogue, CatalogueEntry, CatalogueId};
///
/// let mut catalogue = Catalogue::new();
/// catalogue.register(CatalogueEntry::new(CatalogueId::new(0), "A1", &[10, 11, 12, 13, 14], 2));
///
/// let entry = catalogue.get(CatalogueId::new(0)).unwrap();
/// assert_eq!(entry.values[entry.blank_index], 12);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    index: FxHashMap<CatalogueId, usize>,
}

impl Catalogue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry.
    ///
    /// Panics on a duplicate id, a sequence shorter than four values, or a
    /// blank outside `[2, len - 2]`.
    pub fn register(&mut self, entry: CatalogueEntry) {
        if self.index.contains_key(&entry.id) {
            panic!("Catalogue entry {} already registered", entry.id);
        }
        let len = entry.values.len();
        assert!(
            len as i64 >= MIN_SEQUENCE_LEN,
            "Catalogue entry {} has only {} values",
            entry.label,
            len
        );
        assert!(
            (2..=len - 2).contains(&entry.blank_index),
            "Catalogue entry {} hides position {}, outside 2..={}",
            entry.label,
            entry.blank_index,
            len - 2
        );
        self.index.insert(entry.id, self.entries.len());
        self.entries.push(entry);
    }

    /// Builder-style [`Catalogue::register`].
    #[must_use]
    pub fn with_entry(mut self, entry: CatalogueEntry) -> Self {
        self.register(entry);
        self
    }

    #[must_use]
    pub fn get(&self, id: CatalogueId) -> Option<&CatalogueEntry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, id: CatalogueId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.iter()
    }

    /// The ten sequences of the fixed number-pattern quiz.
    ///
    /// Five add a constant (+1, +5, +10, +2, +10) and five multiply
    /// (x2, x5, x4, x2, x5).
    #[must_use]
    pub fn standard() -> Self {
        let specs: [(&str, &[i64], usize); 10] = [
            ("A1", &[10, 11, 12, 13, 14, 15], 3),
            ("A2", &[5, 10, 15, 20, 25, 30], 2),
            ("A3", &[100, 110, 120, 130, 140, 150], 4),
            ("A4", &[23, 25, 27, 29, 31], 2),
            ("A5", &[7, 17, 27, 37, 47, 57], 3),
            ("G1", &[2, 4, 8, 16, 32], 3),
            ("G2", &[3, 15, 75, 375, 1875], 2),
            ("G3", &[1, 4, 16, 64, 256], 3),
            ("G4", &[5, 10, 20, 40, 80], 3),
            ("G5", &[4, 20, 100, 500, 2500], 3),
        ];

        let mut catalogue = Self::new();
        for (i, (label, values, blank)) in specs.into_iter().enumerate() {
            catalogue.register(CatalogueEntry::new(CatalogueId::new(i as u16), label, values, blank));
        }
        catalogue
    }
}
