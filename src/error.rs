use thiserror::Error;

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Tag listing failed: {0}")]
    TagList(String),

    #[error("Commit range query failed: {0}")]
    RangeFetch(String),

    #[error("Malformed commit line, expected '<author>: <subject>': {0}")]
    MalformedCommitLine(String),

    #[error("Prerelease run requested but no tag contains the '-rc.' marker")]
    NoPrereleaseTag,

    #[error("Found {found} tag(s), need at least {needed} to determine a range")]
    InsufficientTags { needed: usize, found: usize },

    #[error("Found {found} stable tag(s), need at least two to build a release range")]
    InsufficientStableTags { found: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output write failed: {0}")]
    OutputWrite(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a tag listing error with context
    pub fn tag_list(msg: impl Into<String>) -> Self {
        ChangelogError::TagList(msg.into())
    }

    /// Create a range fetch error with context
    pub fn range_fetch(msg: impl Into<String>) -> Self {
        ChangelogError::RangeFetch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create an output write error with context
    pub fn output_write(msg: impl Into<String>) -> Self {
        ChangelogError::OutputWrite(msg.into())
    }
}
