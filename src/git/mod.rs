//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two git
//! capabilities the changelog pipeline needs, allowing for multiple
//! implementations including real Git repositories and mock
//! implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use git_changelog::git::Repository;
//! # use git_changelog::domain::tag::TagRange;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_tags("v*")?;
//! let range = TagRange::select(&tags, false)?;
//! let lines = repo.log_range(&range)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::tag::{Tag, TagRange};
use crate::error::Result;

/// Common git operation trait for abstraction
///
/// This trait abstracts the version-control boundary to allow for multiple
/// implementations including real Git repositories and mock implementations
/// for testing.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::ChangelogError] variants: tag enumeration failures to
/// `TagList`, range queries to `RangeFetch`.
pub trait Repository: Send + Sync {
    /// List tags matching a glob pattern, newest first
    ///
    /// Ordering follows tag creation date descending, so the first element
    /// is always the most recent tag.
    ///
    /// # Arguments
    /// * `pattern` - Glob restricting the tag namespace (e.g., "v*")
    ///
    /// # Returns
    /// * `Ok(Vec<Tag>)` - Matching tags, newest first
    /// * `Err` - If tag enumeration fails
    fn list_tags(&self, pattern: &str) -> Result<Vec<Tag>>;

    /// Raw log lines for the commits in a tag range
    ///
    /// Returns one `"<author>: <subject>"` line per commit reachable from
    /// `range.to` but not from `range.from`, in natural log order
    /// (most recent first). An empty range yields an empty vector.
    ///
    /// # Arguments
    /// * `range` - The tag pair delimiting the commit range
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Formatted commit lines, newest first
    /// * `Err` - If either tag cannot be resolved or the walk fails
    fn log_range(&self, range: &TagRange) -> Result<Vec<String>>;
}
