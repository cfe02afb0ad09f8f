use crate::common::command::{
    commit_file, git_checkout, git_merge_with_timestamp, init_repository_dir,
    run_bitread_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_interleaved_commits_from_two_branches(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    commit_file(dir, "base.txt", "Base", "2023-01-01 10:00:00 +0000");
    git_checkout(dir, &["-b", "topic"]);
    git_checkout(dir, &["master"]);

    // alternate between the branches, one hour apart
    for hour in 11..=16 {
        let branch = if hour % 2 == 1 { "master" } else { "topic" };
        git_checkout(dir, &[branch]);
        commit_file(
            dir,
            &format!("{branch}-{hour}.txt"),
            &format!("{branch} at {hour}"),
            &format!("2023-01-01 {hour}:00:00 +0000"),
        );
    }
    git_checkout(dir, &["master"]);
    git_merge_with_timestamp(dir, &["topic"], "Merge topic", "2023-01-01 17:00:00 +0000");

    let output = run_bitread_command(dir, &["log", "--oneline"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let subjects = stdout
        .lines()
        .map(|line| line.split_once(' ').map(|(_, subject)| subject).unwrap_or(""))
        .collect::<Vec<_>>();

    assert_eq!(
        subjects,
        vec![
            "Merge topic",
            "topic at 16",
            "master at 15",
            "topic at 14",
            "master at 13",
            "topic at 12",
            "master at 11",
            "Base",
        ]
    );

    Ok(())
}
