use std::path::Path;

use git2::Repository as Git2Repo;

use crate::domain::tag::{Tag, TagRange};
use crate::error::{ChangelogError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Creation timestamp used for newest-first ordering.
    ///
    /// Annotated tags carry their own tagger timestamp; lightweight tags
    /// fall back to the committer timestamp of the tagged commit.
    fn tag_creation_time(&self, name: &str) -> Result<i64> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", name))
            .map_err(|e| {
                ChangelogError::tag_list(format!("cannot resolve tag '{}': {}", name, e))
            })?;

        if let Ok(tag_object) = reference.peel(git2::ObjectType::Tag) {
            if let Some(tag) = tag_object.as_tag() {
                if let Some(tagger) = tag.tagger() {
                    return Ok(tagger.when().seconds());
                }
            }
        }

        let commit = reference.peel_to_commit().map_err(|e| {
            ChangelogError::tag_list(format!("cannot peel tag '{}' to a commit: {}", name, e))
        })?;

        Ok(commit.time().seconds())
    }

    fn tag_commit_oid(&self, tag: &Tag) -> Result<git2::Oid> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag.name))
            .map_err(|e| {
                ChangelogError::range_fetch(format!("cannot find tag '{}': {}", tag, e))
            })?;

        let object = reference.peel(git2::ObjectType::Commit).map_err(|e| {
            ChangelogError::range_fetch(format!("cannot peel tag '{}' to a commit: {}", tag, e))
        })?;

        Ok(object.id())
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self, pattern: &str) -> Result<Vec<Tag>> {
        let names = self
            .repo
            .tag_names(Some(pattern))
            .map_err(|e| ChangelogError::tag_list(format!("cannot enumerate tags: {}", e)))?;

        let mut dated: Vec<(i64, Tag)> = Vec::new();

        for name in names.iter().flatten() {
            let created = self.tag_creation_time(name)?;
            dated.push((created, Tag::new(name)));
        }

        // Newest first, matching `for-each-ref --sort=-creatordate`.
        // Stable sort keeps git2's alphabetical order for equal timestamps.
        dated.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(dated.into_iter().map(|(_, tag)| tag).collect())
    }

    fn log_range(&self, range: &TagRange) -> Result<Vec<String>> {
        let from = self.tag_commit_oid(&range.from)?;
        let to = self.tag_commit_oid(&range.to)?;

        let mut revwalk = self
            .repo
            .revwalk()
            .map_err(|e| ChangelogError::range_fetch(format!("cannot start revwalk: {}", e)))?;

        revwalk.push(to).map_err(|e| {
            ChangelogError::range_fetch(format!("cannot push '{}': {}", range.to, e))
        })?;
        revwalk.hide(from).map_err(|e| {
            ChangelogError::range_fetch(format!("cannot hide '{}': {}", range.from, e))
        })?;

        let mut lines = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result
                .map_err(|e| ChangelogError::range_fetch(format!("revwalk failed: {}", e)))?;

            let commit = self.repo.find_commit(oid).map_err(|e| {
                ChangelogError::range_fetch(format!("cannot load commit {}: {}", oid, e))
            })?;

            let author = commit.author().name().unwrap_or("unknown").to_string();
            let subject = commit.summary().unwrap_or("(empty message)").to_string();

            lines.push(format!("{}: {}", author, subject));
        }

        Ok(lines)
    }
}

// SAFETY: Git2Repository only performs read operations (tag enumeration,
// revwalks) through libgit2, which is thread-safe for reads.
unsafe impl Sync for Git2Repository {}
