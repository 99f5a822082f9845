use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The diff against the base commit touched no formattable files.
    NoChanges,
    /// Changed lines are already formatted.
    Clean,
    /// The script produced a replacement diff.
    Violations,
    /// The script exited non-zero; not a formatting verdict.
    ScriptFailure,
}

impl CheckOutcome {
    pub fn passed(self) -> bool {
        matches!(self, CheckOutcome::NoChanges | CheckOutcome::Clean)
    }

    pub fn headline(self) -> &'static str {
        match self {
            CheckOutcome::NoChanges => "No code changes found!",
            CheckOutcome::Clean => "Code passes formatting tests!",
            CheckOutcome::Violations => "Modifications failed code formatting requirements",
            CheckOutcome::ScriptFailure => "Failed to run formatting script",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub base_branch: String,
    pub base_commit: String,
    pub outcome: CheckOutcome,
    pub passed: bool,
    /// Raw script stdout, kept only when the check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}
