use std::fmt;

use crate::error::{ChangelogError, Result};

/// Marker substring identifying release-candidate tags
const PRERELEASE_MARKER: &str = "-rc.";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Whether this tag names a release candidate (contains `-rc.`)
    pub fn is_prerelease(&self) -> bool {
        self.name.contains(PRERELEASE_MARKER)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The tag pair whose commit range is summarized.
///
/// `from` is the older side: the range covers commits reachable from `to`
/// but not from `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRange {
    pub from: Tag,
    pub to: Tag,
}

impl TagRange {
    /// Select the tag pair to summarize from a newest-first tag list.
    ///
    /// Prerelease runs:
    /// - newest tag is itself a release candidate: summarize what the
    ///   candidate adds over the immediately preceding tag;
    /// - newest tag is stable: summarize from that stable tag to the most
    ///   recent release candidate in the list. No candidate at all is an
    ///   error, never a guessed range.
    ///
    /// Release runs ignore release-candidate tags entirely and use the two
    /// most recent stable tags.
    pub fn select(tags: &[Tag], prerelease_run: bool) -> Result<TagRange> {
        if prerelease_run {
            Self::select_prerelease(tags)
        } else {
            Self::select_release(tags)
        }
    }

    fn select_prerelease(tags: &[Tag]) -> Result<TagRange> {
        let newest = tags.first().ok_or(ChangelogError::InsufficientTags {
            needed: 2,
            found: 0,
        })?;

        if newest.is_prerelease() {
            let previous = tags.get(1).ok_or(ChangelogError::InsufficientTags {
                needed: 2,
                found: 1,
            })?;
            return Ok(TagRange {
                from: previous.clone(),
                to: newest.clone(),
            });
        }

        let candidate = tags
            .iter()
            .find(|tag| tag.is_prerelease())
            .ok_or(ChangelogError::NoPrereleaseTag)?;

        Ok(TagRange {
            from: newest.clone(),
            to: candidate.clone(),
        })
    }

    fn select_release(tags: &[Tag]) -> Result<TagRange> {
        let stable: Vec<&Tag> = tags.iter().filter(|tag| !tag.is_prerelease()).collect();

        if stable.len() < 2 {
            return Err(ChangelogError::InsufficientStableTags {
                found: stable.len(),
            });
        }

        Ok(TagRange {
            from: stable[1].clone(),
            to: stable[0].clone(),
        })
    }
}
