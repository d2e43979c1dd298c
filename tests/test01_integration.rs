use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const REPORT: &str = "# branch.oid 0123456789abcdef0123456789abcdef01234567
# branch.head main
# branch.upstream origin/main
# branch.ab +2 -1
1 .M N... 100644 100644 100644 abc abc file.txt
? newfile.txt
";

fn write_executable(path: &PathBuf, content: &str) -> std::io::Result<()> {
    fs::write(path, content)?;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

/// A work tree at `<tmp>/repo` plus a fake `git` on `PATH` that reports it.
struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let root = tmp.path().join("repo");
        fs::create_dir_all(root.join(".git"))?;
        fs::write(tmp.path().join("report.txt"), REPORT)?;

        let fakebin = tmp.path().join("fakebin");
        fs::create_dir_all(&fakebin)?;
        let script = r#"#!/usr/bin/env bash
set -euo pipefail

repo=""
args=()
while [[ $# -gt 0 ]]; do
  case "$1" in
    -C)
      repo="$2"; shift 2;;
    *)
      args+=("$1"); shift;;
  esac
done

echo "git -C ${repo} ${args[*]}" >> "$FAKE_GIT_DIR/calls.log"

case "${args[0]:-}" in
  rev-parse)
    if [[ "${FAKE_GIT_MODE:-}" == "outside" ]]; then
      echo "fatal: not a git repository (or any of the parent directories): .git" >&2
      exit 128
    fi
    echo "$FAKE_GIT_DIR/repo"
    echo "$FAKE_GIT_DIR/repo/.git"
    ;;
  status)
    if [[ "${FAKE_GIT_MODE:-}" == "status-fails" ]]; then
      echo "fatal: index file corrupt" >&2
      exit 1
    fi
    cat "$FAKE_GIT_DIR/report.txt"
    ;;
  *)
    exit 1
    ;;
esac
"#;
        write_executable(&fakebin.join("git"), script)?;
        Ok(Self { tmp })
    }

    fn root(&self) -> PathBuf {
        self.tmp.path().join("repo")
    }

    fn write_report(&self, report: &str) -> std::io::Result<()> {
        fs::write(self.tmp.path().join("report.txt"), report)
    }

    fn calls(&self) -> String {
        fs::read_to_string(self.tmp.path().join("calls.log")).unwrap_or_default()
    }

    fn command(&self, mode: &str) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin("gitprompt")?;
        let new_path = format!(
            "{}:{}",
            self.tmp.path().join("fakebin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", new_path)
            .env("FAKE_GIT_DIR", self.tmp.path())
            .env("FAKE_GIT_MODE", mode)
            .env_remove("RUST_LOG");
        Ok(cmd)
    }
}

fn touch(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}

#[test]
fn test01_prints_default_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    fx.command("")?
        .arg("--path")
        .arg(fx.root().join("src"))
        .assert()
        .success()
        .stdout("[main {origin/main} ↑·2↓·1|✚ 1…1]\n")
        .stderr("");

    let calls = fx.calls();
    let root = fx.root();
    assert!(
        calls.contains(&format!(
            "git -C {} status --porcelain=2 --branch --show-stash",
            root.display()
        )),
        "calls were:\n{calls}"
    );
    Ok(())
}

#[test]
fn test01_outside_repository_is_silent() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    fx.command("outside")?
        .assert()
        .success()
        .stdout("")
        .stderr("");
    assert!(!fx.calls().contains(" status "));
    Ok(())
}

#[test]
fn test01_shows_rebase_progress() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    let rebase = fx.root().join(".git").join("rebase-merge");
    touch(&rebase.join("msgnum"), "2\n")?;
    touch(&rebase.join("end"), "5\n")?;
    touch(&rebase.join("interactive"), "")?;
    fx.write_report("# branch.oid 0123456789abcdef\n# branch.head (detached)\n")?;

    fx.command("")?
        .assert()
        .success()
        .stdout("[:0123456|REBASE-i 2/5|✔]\n");
    Ok(())
}

#[test]
fn test01_custom_symbols() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    fx.write_report(
        "# branch.head dev\n# stash 2\n1 A. N... 000000 100644 100644 000 abc a.txt\n",
    )?;
    fx.command("")?
        .args(["--prefix", "(", "--suffix", ")", "--sep", " "])
        .args(["--local", "local", "--staged", "+", "--stashed", "s"])
        .assert()
        .success()
        .stdout("(dev local +1s2)\n");
    Ok(())
}

#[test]
fn test01_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    let output = fx
        .command("")?
        .args(["--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["branch"], "main");
    assert_eq!(value["upstream"], "origin/main");
    assert_eq!(value["ahead"], 2);
    assert_eq!(value["behind"], 1);
    assert_eq!(value["modified"], 1);
    assert_eq!(value["untracked"], 1);
    Ok(())
}

#[test]
fn test01_status_failure_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    fx.command("status-fails")?
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::contains("gitprompt: git status")
                .and(predicate::str::contains("index file corrupt")),
        );
    Ok(())
}

#[test]
fn test01_malformed_marker_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    let apply = fx.root().join(".git").join("rebase-apply");
    touch(&apply.join("next"), "one\n")?;
    touch(&apply.join("last"), "3\n")?;
    fx.command("")?
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to parse 'one'"));
    Ok(())
}

#[test]
fn test01_malformed_report_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let fx = Fixture::new()?;
    fx.write_report("# branch.head main\n1 .M\n")?;
    fx.command("")?
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("malformed status record on line 2"));
    Ok(())
}
