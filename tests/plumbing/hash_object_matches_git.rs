use crate::common::command::{repository_dir, run_bitread_command, run_git_command};
use crate::common::file::{FileSpec, write_file, write_generated_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn hash_object_matches_git(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let file = write_generated_file(dir);
    let file_name = file.path.file_name().unwrap().to_string_lossy().to_string();

    let git_output = run_git_command(dir, &["hash-object", &file_name]).output()?;
    let expected = String::from_utf8(git_output.stdout)?;

    run_bitread_command(dir, &["hash-object", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    Ok(())
}

#[rstest]
fn hash_object_of_known_content(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello\n".to_string()));
    write_file(FileSpec::new(dir.join("empty.txt"), String::new()));

    run_bitread_command(dir, &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout("ce013625030ba8dba906f756967f9e9ca394464a\n");
    run_bitread_command(dir, &["hash-object", "empty.txt"])
        .assert()
        .success()
        .stdout("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391\n");
}

#[rstest]
fn hash_object_of_missing_file_fails(repository_dir: TempDir) {
    run_bitread_command(repository_dir.path(), &["hash-object", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to read"));
}
