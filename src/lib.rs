//! Read-only access to a Git object store
//!
//! `bitread` opens an existing repository, resolves `HEAD`, decodes loose
//! commit objects and walks their ancestry newest-authored-first:
//!
//! ```no_run
//! use bitread::areas::repository::Repository;
//!
//! let repository = Repository::open(".")?;
//! for commit in repository.head_history()? {
//!     let commit = commit?;
//!     println!("{} {}", commit.oid().to_short_oid(), commit.short_message());
//! }
//! # Ok::<(), bitread::errors::Error>(())
//! ```
//!
//! - `areas`: the repository handle, object database and refs
//! - `artifacts`: object types, the history walker and output helpers
//! - `commands`: the `bitread` subcommands
//! - `errors`: the error taxonomy of the library

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// How `log` renders each commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CommitDisplayFormat {
    /// Hash, author, date and indented message
    #[default]
    Medium,
    /// Hash and first message line
    #[value(name = "oneline")]
    OneLine,
}
