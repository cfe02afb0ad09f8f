use crate::common::command::{
    get_head_commit_sha, init_repository_dir, repository_dir, repository_with_multiple_commits,
    run_bitread_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_head_of_empty_repository_prints_nothing(init_repository_dir: TempDir) {
    run_bitread_command(init_repository_dir.path(), &["show-head"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn show_head_prints_the_head_commit(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let head = get_head_commit_sha(dir)?;

    run_bitread_command(dir, &["show-head"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{head}\n")));

    Ok(())
}

#[rstest]
fn show_head_with_directory_flag(
    repository_with_multiple_commits: TempDir,
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let head = get_head_commit_sha(repository_with_multiple_commits.path())?;
    let target = repository_with_multiple_commits.path().to_string_lossy().to_string();

    run_bitread_command(repository_dir.path(), &["-C", &target, "show-head"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{head}\n")));

    Ok(())
}

#[rstest]
fn commands_outside_a_repository_fail(repository_dir: TempDir) {
    run_bitread_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a repository"));
}
