use crate::common::command::{git_rev_parse, repository_with_multiple_commits, run_bitread_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn cat_file_rejects_blob_objects(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let blob = git_rev_parse(dir, "HEAD:file1.txt")?;

    run_bitread_command(dir, &["cat-file", "-p", &blob])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a commit, but a blob"));

    Ok(())
}

#[rstest]
fn cat_file_rejects_tree_objects(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let tree = git_rev_parse(dir, "HEAD^{tree}")?;

    // entries are NUL separated, which the text decoder does not accept
    run_bitread_command(dir, &["cat-file", "-p", &tree])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed object"));

    Ok(())
}

#[rstest]
fn cat_file_reports_missing_objects(repository_with_multiple_commits: TempDir) {
    run_bitread_command(
        repository_with_multiple_commits.path(),
        &["cat-file", "-p", "0123456789abcdef0123456789abcdef01234567"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("object not found"));
}

#[rstest]
#[case::too_short("abc123")]
#[case::uppercase("CE013625030BA8DBA906F756967F9E9CA394464A")]
#[case::not_hex("zz013625030ba8dba906f756967f9e9ca394464a")]
fn cat_file_rejects_invalid_hashes(
    repository_with_multiple_commits: TempDir,
    #[case] sha: &str,
) {
    run_bitread_command(
        repository_with_multiple_commits.path(),
        &["cat-file", "-p", sha],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid format"));
}
