use crate::common::command::{
    commit_file, get_head_commit_sha, init_repository_dir, run_bitread_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_single_commit_with_abbrev_commit_flag(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "1.txt", "Initial commit", "2023-01-01 12:00:00 +0000");
    let head = get_head_commit_sha(dir)?;

    run_bitread_command(dir, &["log", "--abbrev-commit"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("commit {}\n", &head[..7])))
        .stdout(predicate::str::contains(head.as_str()).not());

    run_bitread_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{} Initial commit\n", &head[..7])));

    Ok(())
}
