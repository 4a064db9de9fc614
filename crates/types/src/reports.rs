//! Validation report types

use crate::records::NodeRef;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification of a single content record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// File exists with the recorded size
    Matched,
    /// File exists but its size differs
    SizeMismatch(SizeMismatch),
    /// File is missing from the content store
    Orphan(Orphan),
}

/// A file whose on-disk size differs from the recorded size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeMismatch {
    pub path: PathBuf,
    pub expected: i64,
    pub actual: u64,
}

/// A content record without a backing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orphan {
    pub path: PathBuf,
    pub reference: NodeRef,
}

/// Result of validating every content record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of content records examined
    pub total: usize,
    /// Records whose file exists with the expected size
    pub validated: usize,
    pub mismatches: Vec<SizeMismatch>,
    pub orphans: Vec<Orphan>,
}

impl ValidationReport {
    /// Fold one outcome into the report
    pub fn record(&mut self, outcome: ValidationOutcome) {
        self.total += 1;
        match outcome {
            ValidationOutcome::Matched => self.validated += 1,
            ValidationOutcome::SizeMismatch(mismatch) => self.mismatches.push(mismatch),
            ValidationOutcome::Orphan(orphan) => self.orphans.push(orphan),
        }
    }

    /// True when no mismatch or orphan was found
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.orphans.is_empty()
    }
}
