//! Insertion-ordered set of candidate tables.
//!
//! The selector breaks score ties by iteration order, so the set keeps
//! candidates in the order they were inserted.

use crate::error::{RemediationError, Result};
use polars::prelude::*;

/// Candidate tables keyed by strategy name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    entries: Vec<(String, DataFrame)>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate. Names are unique; a repeated name is rejected.
    pub fn insert(&mut self, name: impl Into<String>, table: DataFrame) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RemediationError::DuplicateCandidate(name));
        }
        self.entries.push((name, table));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&DataFrame> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, table)| table)
    }

    /// Move a candidate's table out of the set.
    pub fn take(&mut self, name: &str) -> Result<DataFrame> {
        let idx = self
            .entries
            .iter()
            .position(|(n, _)| n == name)
            .ok_or_else(|| RemediationError::UnknownCandidate(name.to_string()))?;
        Ok(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataFrame)> {
        self.entries.iter().map(|(n, table)| (n.as_str(), table))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
