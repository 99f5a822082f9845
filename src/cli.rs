use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(name = "fmtgate", version, about = "Diff-aware clang-format gate", long_about = None)]
pub struct Args {
    /// Base branch to compare against; the merge-base of HEAD and this
    /// ref becomes the diff base
    #[arg(value_name = "BASE_BRANCH", default_value = "master")]
    pub base_branch: String,

    /// Comma-separated relative folder paths to exclude from formatting
    #[arg(long = "exclude-folders", value_name = "LIST")]
    pub exclude_folders: Option<String>,

    /// Repository location (any path inside the work tree)
    #[arg(long = "repo", value_name = "PATH", default_value = ".", value_hint = ValueHint::DirPath)]
    pub repo: PathBuf,

    /// Diff-aware formatting script; relative paths resolve against the
    /// work tree root
    #[arg(
        long = "script",
        value_name = "PATH",
        default_value = "tools/formatting/git-clang-format.py",
        value_hint = ValueHint::FilePath
    )]
    pub script: PathBuf,

    /// Output a JSON verdict instead of plain messages
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// `Ok(false)` means the check itself failed (formatting violations or a
/// failing script); the process should exit non-zero without an error
/// message beyond the printed verdict.
///
/// # Errors
/// Returns an error if the repository queries fail or the delegated
/// script cannot be started.
pub fn run() -> Result<bool> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
