use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

use crate::types::CheckOutcome;

/// Stdout prefixes of the delegated script; exit code plus these two
/// markers are its only stable contract.
pub const NO_MODIFIED_FILES: &str = "no modified files to format";
pub const NO_REFORMATTING: &str = "clang-format did not modify any files";

const PYTHON: &str = "python3";

/// One formatting-check invocation against a resolved base commit.
pub struct FormatCheck {
    pub script: PathBuf,
    pub base_commit: String,
    /// Forwarded verbatim; the script owns the comma-list syntax.
    pub exclude_folders: Option<String>,
    pub workdir: PathBuf,
}

pub struct CheckResult {
    pub outcome: CheckOutcome,
    pub stdout: String,
    pub stderr: String,
}

impl FormatCheck {
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(PYTHON);
        cmd.arg(&self.script)
            .arg("--style=file")
            .arg("--diff")
            .arg("--commit")
            .arg(&self.base_commit)
            .current_dir(&self.workdir);
        if let Some(list) = self.exclude_list() {
            cmd.arg("--exclude-folders").arg(list);
        }
        cmd
    }

    /// Command line as printed by verbose logging.
    pub fn render(&self) -> String {
        let cmd = self.command();
        let mut line = vec![PYTHON.to_string()];
        line.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
        line.join(" ")
    }

    /// Blocking run with captured output.
    ///
    /// # Errors
    /// Returns an error only when the process cannot be started; a
    /// non-zero exit is reported through `CheckOutcome::ScriptFailure`.
    pub fn run(&self) -> Result<CheckResult> {
        let output = self
            .command()
            .output()
            .with_context(|| format!("failed to invoke {}", self.script.display()))?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let outcome = classify(output.status.success(), &stdout);
        Ok(CheckResult {
            outcome,
            stdout,
            stderr,
        })
    }

    fn exclude_list(&self) -> Option<&str> {
        self.exclude_folders.as_deref().filter(|s| !s.is_empty())
    }
}

/// Classifies captured output. Prefix matches are anchored at the start
/// of stdout; a banner or warning line ahead of the marker reads as a
/// violation report.
pub fn classify(success: bool, stdout: &str) -> CheckOutcome {
    if !success {
        CheckOutcome::ScriptFailure
    } else if stdout.starts_with(NO_MODIFIED_FILES) {
        CheckOutcome::NoChanges
    } else if stdout.starts_with(NO_REFORMATTING) {
        CheckOutcome::Clean
    } else {
        CheckOutcome::Violations
    }
}
