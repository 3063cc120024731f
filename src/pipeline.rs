//! Changelog pipeline orchestration
//!
//! Wires the tag selector, commit classifier and renderer together on top
//! of an injected [Repository] implementation. The whole run is a single
//! synchronous pass: any boundary failure aborts before output exists, so
//! a partial changelog is never produced.

use crate::config::Config;
use crate::domain::commit::{self, ClassifiedCommit};
use crate::domain::group::GroupedCommits;
use crate::domain::tag::TagRange;
use crate::error::Result;
use crate::git::Repository;
use crate::render;
use crate::ui;

/// Result of grouping a batch of raw commit lines
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedBatch {
    pub groups: GroupedCommits,
    /// Lines that lacked the `"<author>: <subject>"` separator
    pub skipped: Vec<String>,
}

/// Group raw `"<author>: <subject>"` lines by commit type.
///
/// Malformed lines are collected in [ClassifiedBatch::skipped] instead of
/// aborting the batch; every well-formed line ends up in exactly one bucket.
pub fn classify_lines(lines: &[String], host: &str, slug: &str) -> ClassifiedBatch {
    let mut groups = GroupedCommits::new();
    let mut skipped = Vec::new();

    for line in lines {
        match commit::classify_line(line, host, slug) {
            Ok(ClassifiedCommit {
                commit_type,
                display,
            }) => groups.push(commit_type, display),
            Err(_) => skipped.push(line.clone()),
        }
    }

    ClassifiedBatch { groups, skipped }
}

/// Run the changelog pipeline and return the rendered markdown
pub fn generate<R: Repository>(repo: &R, config: &Config, prerelease_run: bool) -> Result<String> {
    let tags = repo.list_tags(&config.tags.pattern)?;
    let range = TagRange::select(&tags, prerelease_run)?;
    let lines = repo.log_range(&range)?;

    let batch = classify_lines(&lines, &config.repository.host, &config.repository.slug);
    for line in &batch.skipped {
        ui::display_warning(&format!("skipping malformed commit line: {:?}", line));
    }

    Ok(render::render(&batch.groups))
}
