//! Split identifiers and analysis/assessment partitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a split within a repeated k-fold run (zero-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SplitId {
    pub repeat: usize,
    pub fold: usize,
}

impl SplitId {
    pub fn new(repeat: usize, fold: usize) -> Self {
        Self { repeat, fold }
    }

    /// `Repeat01`-style label (one-based)
    pub fn repeat_label(&self) -> String {
        format!("Repeat{:02}", self.repeat + 1)
    }

    /// `Fold01`-style label (one-based)
    pub fn fold_label(&self) -> String {
        format!("Fold{:02}", self.fold + 1)
    }
}

impl fmt::Display for SplitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.repeat_label(), self.fold_label())
    }
}

/// One resample: rows used for fitting and rows held out for scoring
///
/// Both index lists are sorted ascending and never overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    pub id: SplitId,
    pub analysis: Vec<usize>,
    pub assessment: Vec<usize>,
}

impl Split {
    /// Build a split from the fold assignment of every row in one repeat
    pub(crate) fn from_assignment(id: SplitId, assignment: &[usize]) -> Self {
        let (assessment, analysis): (Vec<usize>, Vec<usize>) =
            (0..assignment.len()).partition(|&row| assignment[row] == id.fold);
        Self {
            id,
            analysis,
            assessment,
        }
    }

    /// Total number of rows covered by the split
    pub fn len(&self) -> usize {
        self.analysis.len() + self.assessment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
