use crate::common::command::{
    commit_file, displayed_shas, git_checkout, git_merge_with_timestamp, git_rev_parse,
    init_repository_dir, run_bitread_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_merge_traversal_diamond_deduplication(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    //       Base (T0)
    //      /        \
    //   Left (T1)  Right (T2)
    //      \        /
    //       Merge (T3)
    commit_file(dir, "base.txt", "Base", "2023-01-01 10:00:00 +0000");
    git_checkout(dir, &["-b", "right"]);
    git_checkout(dir, &["master"]);
    commit_file(dir, "left.txt", "Left", "2023-01-01 11:00:00 +0000");
    git_checkout(dir, &["right"]);
    commit_file(dir, "right.txt", "Right", "2023-01-01 12:00:00 +0000");
    git_checkout(dir, &["master"]);
    git_merge_with_timestamp(dir, &["right"], "Merge", "2023-01-01 13:00:00 +0000");

    let output = run_bitread_command(dir, &["log"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = vec![
        git_rev_parse(dir, "HEAD")?,
        git_rev_parse(dir, "right")?,
        git_rev_parse(dir, "HEAD^1")?,
        git_rev_parse(dir, "HEAD^1~1")?,
    ];
    assert_eq!(displayed_shas(&stdout), expected);
    assert_eq!(stdout.matches("    Base").count(), 1);

    Ok(())
}
