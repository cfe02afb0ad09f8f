//! Read-only view over a repository on disk
//!
//! A [`Repository`] is opened on a working directory root and reads from the
//! `.git` directory below it. It holds no mutable state and never caches, so a
//! single instance can be shared across threads; concurrent writers are simply
//! observed on the next read.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::raw_object::RawObject;
use crate::errors::{Error, Result};
use std::path::Path;

/// Name of the metadata directory below the working directory root
pub const GIT_DIR: &str = ".git";

#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    git_path: Box<Path>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose working directory is `path`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `path` is not a directory or has no `.git`
    /// directory below it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let path = path.canonicalize().map_err(|err| Error::io(path, err))?;
        let git_path = path.join(GIT_DIR);
        if !git_path.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "{} is not a repository (no {GIT_DIR} directory)",
                path.display()
            )));
        }

        log::debug!("opened repository at {}", path.display());

        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            git_path: git_path.into_boxed_path(),
            database,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> &Path {
        &self.git_path
    }

    /// The commit HEAD points to, or `None` for a repository without commits
    pub fn resolve_head(&self) -> Result<Option<Commit>> {
        match self.refs.read_head()? {
            Some(head_oid) => self.fetch_commit(&head_oid),
            None => Ok(None),
        }
    }

    /// Load one commit; `None` when the object is absent
    pub fn fetch_commit(&self, commit_id: &ObjectId) -> Result<Option<Commit>> {
        self.database.parse_object_as_commit(commit_id)
    }

    /// Load and decode any object; `None` when the object is absent
    pub fn read_object(&self, object_id: &ObjectId) -> Result<Option<RawObject>> {
        self.database.parse_object(object_id)
    }

    /// Walk the ancestry of `start`, newest authored first
    pub fn history(
        &self,
        start: Commit,
    ) -> History<impl Fn(&ObjectId) -> Result<Option<Commit>> + '_> {
        History::new(start, |commit_id| self.fetch_commit(commit_id))
    }

    /// Walk the ancestry of HEAD; an empty walk when there are no commits
    pub fn head_history(
        &self,
    ) -> Result<History<impl Fn(&ObjectId) -> Result<Option<Commit>> + '_>> {
        let loader = |commit_id: &ObjectId| self.fetch_commit(commit_id);

        match self.resolve_head()? {
            Some(head) => Ok(History::new(head, loader)),
            None => Ok(History::empty(loader)),
        }
    }
}
