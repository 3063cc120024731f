//! Markdown rendering of grouped commits.
//!
//! The output embeds literal `<br/>` tokens instead of raw newlines so the
//! string survives the single-line CI output format and still renders with
//! line breaks in pull request comments and release bodies.

use crate::domain::commit::CommitType;
use crate::domain::group::GroupedCommits;

const LINE_BREAK: &str = "<br/>";
const SECTION_BREAK: &str = "<br />";

/// Section title shown for a commit type.
/// Types without a dedicated title capitalize their first letter.
pub fn display_title(commit_type: CommitType) -> String {
    match commit_type {
        CommitType::Feat => "Feature".to_string(),
        CommitType::Fix => "Bug Fix".to_string(),
        CommitType::Chore => "Chore".to_string(),
        other => capitalize_first(other.as_str()),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render grouped commits to the changelog markdown string.
/// Deterministic: equal input always yields the identical string.
pub fn render(groups: &GroupedCommits) -> String {
    let mut result = String::new();

    for (commit_type, commits) in groups.iter() {
        result.push_str("**");
        result.push_str(&display_title(commit_type));
        result.push_str(" :**");
        result.push_str(LINE_BREAK);

        for commit in commits {
            result.push_str("- ");
            result.push_str(commit);
            result.push_str(LINE_BREAK);
        }

        result.push_str(SECTION_BREAK);
    }

    result
}
