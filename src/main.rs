use anyhow::Result;
use clap::Parser;

use git_changelog::git::Git2Repository;
use git_changelog::{ci, config, pipeline, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    about = "Generate grouped release notes for the latest tag range"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        help = "Summarize the release-candidate range instead of the latest stable pair"
    )]
    prerelease: bool,

    #[arg(
        short,
        long,
        env = "GITHUB_REPOSITORY",
        help = "Repository slug (owner/name) used for pull request links"
    )]
    repository: Option<String>,

    #[arg(long, help = "Print the changelog to stdout instead of the CI output file")]
    stdout: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("git-changelog {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // The exit code is decided only after run() returns, so the output write
    // always completes before the process terminates.
    if let Err(e) = run(&args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(slug) = &args.repository {
        config.repository.slug = slug.clone();
    }

    let prerelease_run = args.prerelease || ci::prerelease_trigger();

    let repo = Git2Repository::open(".")?;
    let changelog = pipeline::generate(&repo, &config, prerelease_run)?;

    if args.stdout {
        println!("{}", changelog);
        return Ok(());
    }

    let output_path = ci::output_path()?;
    ci::append_result(&output_path, &changelog)?;
    ui::display_success(&format!("Changelog appended to {}", output_path.display()));

    Ok(())
}
