use crate::CommitDisplayFormat;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
    pub abbrev_commit: bool,
    pub format: CommitDisplayFormat,
}

impl Repository {
    /// Print the history reachable from HEAD, newest authored first
    pub fn log(&self, opts: &LogOptions, writer: &mut impl Write) -> anyhow::Result<()> {
        let history = self.head_history().context("unable to resolve HEAD")?;

        for (index, commit) in history.enumerate() {
            let commit = commit.context("unable to walk the commit history")?;

            if index > 0 && blank_line_between(opts) {
                writeln!(writer)?;
            }
            display_commit(&commit, opts, writer)?;
        }

        Ok(())
    }
}

/// Render one commit the way `opts` asks for
pub fn display_commit(
    commit: &Commit,
    opts: &LogOptions,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    if opts.oneline {
        return show_commit_oneline(commit, true, writer);
    }

    match opts.format {
        CommitDisplayFormat::Medium => show_commit_medium(commit, opts.abbrev_commit, writer),
        CommitDisplayFormat::OneLine => show_commit_oneline(commit, opts.abbrev_commit, writer),
    }
}

fn blank_line_between(opts: &LogOptions) -> bool {
    !opts.oneline && opts.format == CommitDisplayFormat::Medium
}

fn show_commit_medium(
    commit: &Commit,
    abbrev_commit: bool,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(
        writer,
        "{}",
        format!("commit {}", abbrev_commit_id(commit, abbrev_commit)).yellow()
    )?;
    writeln!(writer, "Author: {}", commit.author().display_name())?;
    writeln!(writer, "Date:   {}", commit.author().readable_timestamp())?;
    writeln!(writer)?;
    for message_line in commit.message().lines() {
        writeln!(writer, "    {message_line}")?;
    }

    Ok(())
}

fn show_commit_oneline(
    commit: &Commit,
    abbrev_commit: bool,
    writer: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(
        writer,
        "{} {}",
        abbrev_commit_id(commit, abbrev_commit).yellow(),
        commit.short_message()
    )?;

    Ok(())
}

fn abbrev_commit_id(commit: &Commit, abbrev_commit: bool) -> String {
    if abbrev_commit {
        commit.oid().to_short_oid()
    } else {
        commit.oid().to_hex()
    }
}
