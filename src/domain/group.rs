use std::collections::HashMap;

use super::commit::CommitType;

/// Commit display strings grouped by type, preserving first-seen type order.
///
/// Buckets are created the first time a type appears; iteration replays the
/// types in that order, so the rendered changelog mirrors the order the
/// commit log introduced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedCommits {
    order: Vec<CommitType>,
    buckets: HashMap<CommitType, Vec<String>>,
}

impl GroupedCommits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a display string to its type bucket
    pub fn push(&mut self, commit_type: CommitType, display: String) {
        if !self.buckets.contains_key(&commit_type) {
            self.order.push(commit_type);
        }
        self.buckets.entry(commit_type).or_default().push(display);
    }

    /// Iterate buckets in first-seen type order
    pub fn iter(&self) -> impl Iterator<Item = (CommitType, &[String])> + '_ {
        self.order
            .iter()
            .map(|commit_type| (*commit_type, self.buckets[commit_type].as_slice()))
    }

    /// Total number of grouped commit lines across all buckets
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
