//! CI environment boundary: the prerelease trigger input and the job
//! output file.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ChangelogError, Result};

/// Environment variable naming the CI output file
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable marking a prerelease run
pub const PRERELEASE_ENV: &str = "INPUT_PRERELEASE";

/// True when the CI trigger marks this run as a prerelease.
///
/// Any non-empty value counts, including the string "false" - this mirrors
/// the actions-input convention where presence is the signal.
pub fn prerelease_trigger() -> bool {
    env::var(PRERELEASE_ENV)
        .map(|value| !value.is_empty())
        .unwrap_or(false)
}

/// Resolve the CI output file path from the environment
pub fn output_path() -> Result<PathBuf> {
    match env::var(OUTPUT_ENV) {
        Ok(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Err(ChangelogError::output_write(format!(
            "{} is not set",
            OUTPUT_ENV
        ))),
    }
}

/// Append a `result=<changelog>` line to the CI output file.
///
/// The changelog contains no raw newlines (line breaks are `<br/>` tokens),
/// so a single terminated line keeps the output file parseable.
pub fn append_result(path: &Path, changelog: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ChangelogError::output_write(format!("cannot open '{}': {}", path.display(), e))
        })?;

    writeln!(file, "result={}", changelog).map_err(|e| {
        ChangelogError::output_write(format!("cannot append to '{}': {}", path.display(), e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_prerelease_trigger_requires_non_empty_value() {
        env::remove_var(PRERELEASE_ENV);
        assert!(!prerelease_trigger());

        env::set_var(PRERELEASE_ENV, "");
        assert!(!prerelease_trigger());

        env::set_var(PRERELEASE_ENV, "true");
        assert!(prerelease_trigger());

        // Presence is the signal, not the spelled-out value
        env::set_var(PRERELEASE_ENV, "false");
        assert!(prerelease_trigger());

        env::remove_var(PRERELEASE_ENV);
    }

    #[test]
    #[serial]
    fn test_output_path_unset_is_an_error() {
        env::remove_var(OUTPUT_ENV);
        let err = output_path().unwrap_err();
        assert!(matches!(err, ChangelogError::OutputWrite(_)));
        assert!(err.to_string().contains(OUTPUT_ENV));
    }

    #[test]
    #[serial]
    fn test_output_path_resolves() {
        env::set_var(OUTPUT_ENV, "/tmp/gh-output");
        assert_eq!(output_path().unwrap(), PathBuf::from("/tmp/gh-output"));
        env::remove_var(OUTPUT_ENV);
    }
}
