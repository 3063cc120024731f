// tests/pipeline_test.rs
//
// Scenario tests for the full changelog pipeline over a mock repository.

use git_changelog::config::Config;
use git_changelog::git::MockRepository;
use git_changelog::pipeline::{classify_lines, generate};
use git_changelog::ChangelogError;

fn custom_config(slug: &str, host: &str) -> Config {
    let mut config = Config::default();
    config.repository.slug = slug.to_string();
    config.repository.host = host.to_string();
    config
}

#[test]
fn test_release_run_uses_two_newest_stable_tags() {
    let mut repo = MockRepository::new();
    repo.add_tag("v2.0.0-rc.1");
    repo.add_tag("v1.9.0");
    repo.add_tag("v1.8.0");
    repo.add_log(
        "v1.8.0",
        "v1.9.0",
        &[
            "alice: feat(api): add endpoint (#42)",
            "bob: refactor internals",
        ],
    );

    let changelog = generate(&repo, &Config::default(), false).unwrap();
    assert_eq!(
        changelog,
        "**Feature :**<br/>- feat: add endpoint [#42](https://github.com/repo/pull/42) by alice<br/><br />\
         **Others :**<br/>- refactor internals by bob<br/><br />"
    );
}

#[test]
fn test_prerelease_run_with_candidate_head() {
    let mut repo = MockRepository::new();
    repo.add_tag("v2.0.0-rc.2");
    repo.add_tag("v2.0.0-rc.1");
    repo.add_tag("v1.9.0");
    repo.add_log(
        "v2.0.0-rc.1",
        "v2.0.0-rc.2",
        &["carol: fix: handle empty tag list"],
    );

    let changelog = generate(&repo, &Config::default(), true).unwrap();
    assert_eq!(
        changelog,
        "**Bug Fix :**<br/>- fix: handle empty tag list by carol<br/><br />"
    );
}

#[test]
fn test_prerelease_run_with_stable_head_targets_latest_candidate() {
    let mut repo = MockRepository::new();
    repo.add_tag("v2.0.0");
    repo.add_tag("v2.0.0-rc.2");
    repo.add_tag("v1.9.0");
    repo.add_log("v2.0.0", "v2.0.0-rc.2", &["dave: chore: bump toolchain"]);

    let changelog = generate(&repo, &Config::default(), true).unwrap();
    assert_eq!(
        changelog,
        "**Chore :**<br/>- chore: bump toolchain by dave<br/><br />"
    );
}

#[test]
fn test_prerelease_run_without_candidate_fails() {
    let mut repo = MockRepository::new();
    repo.add_tag("v2.0.0");
    repo.add_tag("v1.9.0");

    let err = generate(&repo, &Config::default(), true).unwrap_err();
    assert!(matches!(err, ChangelogError::NoPrereleaseTag));
}

#[test]
fn test_release_run_with_one_stable_tag_fails() {
    let mut repo = MockRepository::new();
    repo.add_tag("v2.0.0-rc.1");
    repo.add_tag("v1.0.0");

    let err = generate(&repo, &Config::default(), false).unwrap_err();
    assert!(matches!(
        err,
        ChangelogError::InsufficientStableTags { found: 1 }
    ));
}

#[test]
fn test_empty_commit_range_renders_empty_string() {
    let mut repo = MockRepository::new();
    repo.add_tag("v1.1.0");
    repo.add_tag("v1.0.0");
    // No log registered for the range: zero commits

    let changelog = generate(&repo, &Config::default(), false).unwrap();
    assert_eq!(changelog, "");
}

#[test]
fn test_every_well_formed_line_becomes_exactly_one_bullet() {
    let mut repo = MockRepository::new();
    repo.add_tag("v1.1.0");
    repo.add_tag("v1.0.0");
    repo.add_log(
        "v1.0.0",
        "v1.1.0",
        &[
            "a: feat: one",
            "b: fix: two",
            "c: chore: three",
            "d: docs: four",
            "e: something else entirely",
        ],
    );

    let changelog = generate(&repo, &Config::default(), false).unwrap();
    assert_eq!(
        changelog.matches("<br/>- ").count(),
        5,
        "expected one bullet per input line, got: {}",
        changelog
    );
}

#[test]
fn test_generate_is_deterministic() {
    let mut repo = MockRepository::new();
    repo.add_tag("v1.1.0");
    repo.add_tag("v1.0.0");
    repo.add_log("v1.0.0", "v1.1.0", &["a: feat: one", "b: fix: two"]);

    let first = generate(&repo, &Config::default(), false).unwrap();
    let second = generate(&repo, &Config::default(), false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_configured_host_and_slug_shape_pull_request_links() {
    let mut repo = MockRepository::new();
    repo.add_tag("v1.1.0");
    repo.add_tag("v1.0.0");
    repo.add_log("v1.0.0", "v1.1.0", &["erin: fix: patch leak (#7)"]);

    let config = custom_config("acme/widgets", "https://git.example.com");
    let changelog = generate(&repo, &config, false).unwrap();
    assert_eq!(
        changelog,
        "**Bug Fix :**<br/>- fix: patch leak [#7](https://git.example.com/acme/widgets/pull/7) by erin<br/><br />"
    );
}

#[test]
fn test_classify_lines_skips_malformed_input() {
    let lines = vec![
        "no separator at all".to_string(),
        "alice: fix: handle malformed lines".to_string(),
    ];

    let batch = classify_lines(&lines, "https://github.com", "repo");
    assert_eq!(batch.groups.total(), 1);
    assert_eq!(batch.skipped, vec!["no separator at all".to_string()]);
}

#[test]
fn test_tag_pattern_restricts_the_namespace() {
    let mut repo = MockRepository::new();
    repo.add_tag("v1.1.0");
    repo.add_tag("nightly-2024-01-01");
    repo.add_tag("v1.0.0");
    repo.add_log("v1.0.0", "v1.1.0", &["a: chore: tidy"]);

    // The nightly tag does not match "v*", so the stable pair is unaffected
    let changelog = generate(&repo, &Config::default(), false).unwrap();
    assert_eq!(changelog, "**Chore :**<br/>- chore: tidy by a<br/><br />");
}
