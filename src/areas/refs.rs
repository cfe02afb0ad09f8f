//! Git references (HEAD and the refs it points to)
//!
//! References are stored as text files containing either:
//! - A 40-character SHA-1 hash (direct reference, e.g. a detached HEAD)
//! - `ref: <path>` for symbolic references, the path being relative to `.git`
//!
//! A symbolic reference whose target file does not exist is an unborn branch:
//! the repository has no commit yet.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use derive_new::new;
use regex::Regex;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// How many `ref:` hops are followed before giving up
pub const MAX_SYMREF_DEPTH: usize = 5;

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the store root (typically `.git`)
    path: Box<Path>,
}

/// Content of a reference file
#[derive(Debug, Clone, PartialEq, Eq)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref
    SymRef { target: String },
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn parse(content: &str) -> Result<Self> {
        let symref = Regex::new(SYMREF_REGEX)
            .map_err(|err| Error::InvalidFormat(format!("{SYMREF_REGEX}: {err}")))?;

        match symref.captures(content) {
            Some(symref_match) => Ok(SymRefOrOid::SymRef {
                target: symref_match[1].trim().to_string(),
            }),
            None => Ok(SymRefOrOid::Oid(ObjectId::try_parse(content)?)),
        }
    }
}

impl Refs {
    /// Resolve HEAD to a commit ID
    ///
    /// # Returns
    ///
    /// `None` when HEAD names a branch that has no commit yet
    pub fn read_head(&self) -> Result<Option<ObjectId>> {
        let head = self.read_text(HEAD_REF_NAME)?;

        self.resolve(HEAD_REF_NAME, head)
    }

    /// Follow `ref:` indirections starting from the content of `name`
    fn resolve(&self, name: &str, content: String) -> Result<Option<ObjectId>> {
        let mut name = name.to_string();
        let mut content = content;

        for _ in 0..MAX_SYMREF_DEPTH {
            match SymRefOrOid::parse(&content)? {
                SymRefOrOid::Oid(oid) => return Ok(Some(oid)),
                SymRefOrOid::SymRef { target } => {
                    log::debug!("{name} -> {target}");

                    if !self.exists(&target) {
                        log::debug!("reference {target} does not exist yet");
                        return Ok(None);
                    }

                    content = self.read_text(&target)?;
                    name = target;
                }
            }
        }

        Err(Error::InvalidFormat(format!(
            "more than {MAX_SYMREF_DEPTH} levels of symbolic references, stopped at {name}"
        )))
    }

    /// Trimmed text of a file below the store root
    fn read_text(&self, relative: &str) -> Result<String> {
        let path = self.path.join(relative);
        let content = std::fs::read_to_string(&path)
            .map_err(|err| Error::io(&path, err))?;

        Ok(content.trim().to_string())
    }

    fn exists(&self, relative: &str) -> bool {
        self.path.join(relative).is_file()
    }
}
