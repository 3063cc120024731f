use regex::Regex;

use crate::error::{ChangelogError, Result};

/// Conventional commit type bucket, including the catch-all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Docs,
    Chore,
    Fix,
    Feat,
    Others,
}

impl CommitType {
    /// Classify a cleaned subject line by its conventional-commit prefix.
    /// Anything outside the known set lands in [CommitType::Others].
    pub fn classify(subject: &str) -> Self {
        let captures = Regex::new(r"^(docs|chore|fix|feat)(?:\([\w]+\))?:\s.+$")
            .ok()
            .and_then(|re| re.captures(subject));

        match captures.and_then(|c| c.get(1)).map(|m| m.as_str()) {
            Some("docs") => CommitType::Docs,
            Some("chore") => CommitType::Chore,
            Some("fix") => CommitType::Fix,
            Some("feat") => CommitType::Feat,
            _ => CommitType::Others,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Docs => "docs",
            CommitType::Chore => "chore",
            CommitType::Fix => "fix",
            CommitType::Feat => "feat",
            CommitType::Others => "others",
        }
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parsed representation of a raw `"<author>: <subject>"` log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub author: String,
    pub message: String,
}

impl ParsedCommit {
    /// Parse a raw log line of the form `"<author>: <subject>"`.
    ///
    /// Splits on the first colon only; subjects may contain further colons.
    /// The first parenthetical scope token in the subject is removed and the
    /// remainder trimmed. A line without a colon is a typed
    /// [ChangelogError::MalformedCommitLine], never an index panic.
    pub fn parse(line: &str) -> Result<Self> {
        let (author, subject) = line
            .split_once(':')
            .ok_or_else(|| ChangelogError::MalformedCommitLine(line.to_string()))?;

        let message = strip_scope_token(subject).trim().to_string();

        Ok(ParsedCommit {
            author: author.to_string(),
            message,
        })
    }
}

/// One commit line routed into its display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    pub commit_type: CommitType,
    pub display: String,
}

/// Run the full per-line classification: parse, classify, link the pull
/// request reference, and append the author credit.
pub fn classify_line(line: &str, host: &str, slug: &str) -> Result<ClassifiedCommit> {
    let parsed = ParsedCommit::parse(line)?;
    let commit_type = CommitType::classify(&parsed.message);
    let display = format!(
        "{} by {}",
        link_pull_request(&parsed.message, host, slug),
        parsed.author
    );

    Ok(ClassifiedCommit {
        commit_type,
        display,
    })
}

/// Remove the first parenthetical scope token, e.g. "feat(api): x" -> "feat: x"
fn strip_scope_token(subject: &str) -> String {
    match Regex::new(r"\(([\w-]+)\)").ok() {
        Some(re) => re.replace(subject, "").into_owned(),
        None => subject.to_string(),
    }
}

/// Rewrite the first `(#N)` pull request reference into a markdown link.
/// Later references in the same message are left as plain text.
pub fn link_pull_request(message: &str, host: &str, slug: &str) -> String {
    match Regex::new(r"\(#(\d+)\)").ok() {
        Some(re) => re
            .replace(message, |caps: &regex::Captures<'_>| {
                format!("[#{}]({}/{}/pull/{})", &caps[1], host, slug, &caps[1])
            })
            .into_owned(),
        None => message.to_string(),
    }
}
