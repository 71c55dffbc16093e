//! Ordered selection of quadrant lines.

use serde::{Deserialize, Serialize};

use super::QuadrantLine;
use crate::error::QuadrantError;

/// Set of selected quadrant lines that remembers insertion order.
///
/// Iteration yields lines in the order they were selected. The toolpath
/// generator relies on this to order the two-line quadrant cut, so this is a
/// small vector rather than a hash set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct SelectionSet {
    lines: Vec<QuadrantLine>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from raw ids. Duplicates keep their first position.
    pub fn from_ids(ids: &[u8]) -> Result<Self, QuadrantError> {
        let mut set = Self::new();
        for &id in ids {
            set.insert(QuadrantLine::try_from(id)?);
        }
        Ok(set)
    }

    /// Flip membership of `line`. Returns true if the line is now selected.
    pub fn toggle(&mut self, line: QuadrantLine) -> bool {
        if self.remove(line) {
            false
        } else {
            self.lines.push(line);
            true
        }
    }

    /// Add `line` at the end if not already present. Returns true if added.
    pub fn insert(&mut self, line: QuadrantLine) -> bool {
        if self.contains(line) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Remove `line`. Returns true if it was present.
    pub fn remove(&mut self, line: QuadrantLine) -> bool {
        match self.lines.iter().position(|l| *l == line) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `line` is selected
    pub fn contains(&self, line: QuadrantLine) -> bool {
        self.lines.contains(&line)
    }

    /// Whether both `line` and its opposite are selected
    pub fn contains_pair(&self, line: QuadrantLine) -> bool {
        self.contains(line) && self.contains(line.opposite())
    }

    /// Number of selected lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate in selection order
    pub fn iter(&self) -> impl Iterator<Item = QuadrantLine> + '_ {
        self.lines.iter().copied()
    }

    /// Selected lines in selection order
    pub fn as_slice(&self) -> &[QuadrantLine] {
        &self.lines
    }

    /// Numeric ids in selection order
    pub fn ids(&self) -> Vec<u8> {
        self.lines.iter().map(|l| l.id()).collect()
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl FromIterator<QuadrantLine> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = QuadrantLine>>(iter: I) -> Self {
        let mut set = Self::new();
        for line in iter {
            set.insert(line);
        }
        set
    }
}

impl TryFrom<Vec<u8>> for SelectionSet {
    type Error = QuadrantError;

    fn try_from(ids: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_ids(&ids)
    }
}

impl From<SelectionSet> for Vec<u8> {
    fn from(set: SelectionSet) -> Self {
        set.ids()
    }
}
