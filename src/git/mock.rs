use std::collections::HashMap;

use crate::domain::tag::{Tag, TagRange};
use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<Tag>,
    logs: HashMap<(String, String), Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            logs: HashMap::new(),
        }
    }

    /// Append a tag; callers add tags in the newest-first order `list_tags`
    /// is expected to return
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(Tag::new(name));
    }

    /// Register raw log lines for a from..to range
    pub fn add_log(&mut self, from: &str, to: &str, lines: &[&str]) {
        self.logs.insert(
            (from.to_string(), to.to_string()),
            lines.iter().map(|line| line.to_string()).collect(),
        );
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self, pattern: &str) -> Result<Vec<Tag>> {
        // Simplified glob: honor a trailing '*' as a prefix match
        let prefix = pattern.trim_end_matches('*');

        Ok(self
            .tags
            .iter()
            .filter(|tag| tag.name.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn log_range(&self, range: &TagRange) -> Result<Vec<String>> {
        let key = (range.from.name.clone(), range.to.name.clone());

        Ok(self.logs.get(&key).cloned().unwrap_or_default())
    }
}
