use anyhow::{Context, Result};

use crate::checker::FormatCheck;
use crate::types::{CheckOutcome, CheckReport};
use crate::vcs::VcsContext;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<bool> {
    let vcs = VcsContext::open(&args.repo)?;
    let base = vcs
        .merge_base_with_head(&args.base_branch)
        .with_context(|| format!("determine merge-base of HEAD and {}", args.base_branch))?;
    let workdir = vcs.workdir()?;

    let script = if args.script.is_absolute() {
        args.script.clone()
    } else {
        workdir.join(&args.script)
    };

    let check = FormatCheck {
        script,
        base_commit: base.to_string(),
        exclude_folders: args.exclude_folders.clone(),
        workdir,
    };

    if args.verbose > 0 {
        eprintln!("Merge-base with {}: {base}", args.base_branch);
        eprintln!("Running: {}", check.render());
    }

    let result = check.run()?;

    if args.verbose > 1 {
        eprintln!("script stdout:\n{}", result.stdout);
        eprintln!("script stderr:\n{}", result.stderr);
    }

    if args.json {
        let report = CheckReport {
            base_branch: args.base_branch.clone(),
            base_commit: base.to_string(),
            outcome: result.outcome,
            passed: result.outcome.passed(),
            output: (!result.outcome.passed()).then(|| result.stdout.clone()),
        };
        let s = serde_json::to_string_pretty(&report)?;
        println!("{s}");
        return Ok(result.outcome.passed());
    }

    match result.outcome {
        CheckOutcome::NoChanges | CheckOutcome::Clean => {
            println!("{}", result.outcome.headline());
        }
        CheckOutcome::Violations => {
            println!("{}\n\n{}", result.outcome.headline(), result.stdout);
        }
        CheckOutcome::ScriptFailure => {
            println!(
                "{}\n\n{}\n{}",
                result.outcome.headline(),
                result.stdout,
                result.stderr
            );
        }
    }

    Ok(result.outcome.passed())
}
