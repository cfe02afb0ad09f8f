use crate::common::command::{
    git_rev_parse, repository_with_multiple_commits, run_bitread_command, run_git_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn cat_file_keeps_signature_and_encoding_headers(
    repository_with_multiple_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_multiple_commits.path();
    let tree = git_rev_parse(dir, "HEAD^{tree}")?;
    let parent = git_rev_parse(dir, "HEAD")?;
    let payload = format!(
        "tree {tree}\n\
         parent {parent}\n\
         author fake_user <fake_email@email.com> 1700000000 +0100\n\
         committer fake_user <fake_email@email.com> 1700000000 +0100\n\
         encoding UTF-8\n\
         gpgsig -----BEGIN PGP SIGNATURE-----\n \n iQEzBAABCAAdFiEE\n =abcd\n\
         \x20-----END PGP SIGNATURE-----\n\
         \n\
         Signed commit\n"
    );

    // hash-object writes the commit without needing a signing key
    let written = run_git_command(dir, &["hash-object", "-t", "commit", "-w", "--stdin"])
        .write_stdin(payload.clone())
        .output()?;
    assert!(written.status.success());
    let signed = String::from_utf8(written.stdout)?.trim().to_string();

    let bitread_output = run_bitread_command(dir, &["cat-file", "-p", &signed]).output()?;
    let git_output = run_git_command(dir, &["cat-file", "-p", &signed]).output()?;

    assert!(bitread_output.status.success());
    assert_eq!(String::from_utf8(bitread_output.stdout)?, payload);
    assert_eq!(payload, String::from_utf8(git_output.stdout)?);

    Ok(())
}
