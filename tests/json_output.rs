use std::fs;
use std::path::Path;

fn git(root: &Path, args: &[&str]) {
    assert!(
        std::process::Command::new("git")
            .args(args)
            .current_dir(root)
            .status()
            .expect("run git")
            .success(),
        "git {args:?} failed"
    );
}

fn init_repo(root: &Path) {
    git(root, &["-c", "init.defaultBranch=master", "init"]);
    fs::write(root.join("a.cpp"), "int main() { return 0; }\n").unwrap();
    git(root, &["add", "."]);
    git(
        root,
        &[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "-m",
            "initial",
        ],
    );
}

fn run_json(root: &Path, stub_body: &str) -> std::process::Output {
    fs::write(root.join("stub.py"), stub_body).unwrap();
    std::process::Command::new(env!("CARGO_BIN_EXE_fmtgate"))
        .arg("--json")
        .arg("--script")
        .arg("stub.py")
        .current_dir(root)
        .output()
        .expect("run fmtgate")
}

#[test]
fn json_verdict_for_clean_run() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path());

    let out = run_json(
        dir.path(),
        "import sys\nsys.stdout.write(\"clang-format did not modify any files\\n\")\n",
    );
    assert!(out.status.success());

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is a JSON document");
    assert_eq!(v["base_branch"], "master");
    assert_eq!(v["outcome"], "clean");
    assert_eq!(v["passed"], true);
    let commit = v["base_commit"].as_str().unwrap();
    assert_eq!(commit.len(), 40);
    assert!(commit.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(v.get("output").is_none());
}

#[test]
fn json_verdict_for_violations() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path());

    let out = run_json(
        dir.path(),
        "import sys\nsys.stdout.write(\"diff --git a/a.cpp b/a.cpp\\n\")\n",
    );
    assert!(!out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["outcome"], "violations");
    assert_eq!(v["passed"], false);
    assert!(
        v["output"]
            .as_str()
            .unwrap()
            .starts_with("diff --git a/a.cpp")
    );
}

#[test]
fn json_verdict_for_script_failure() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path());

    let out = run_json(dir.path(), "import sys\nsys.exit(3)\n");
    assert!(!out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["outcome"], "script_failure");
    assert_eq!(v["passed"], false);
}
