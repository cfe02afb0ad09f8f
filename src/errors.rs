//! Error types for reading the object store
//!
//! Absence is not an error here: a missing object or an unborn HEAD is reported
//! as `Ok(None)` by the readers. Everything in [`Error`] means the store is
//! corrupt, the input is malformed, or the filesystem refused a read.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;
use thiserror::Error;

/// Longest raw fragment carried inside a [`Error::MalformedObject`]
const FRAGMENT_LIMIT: usize = 80;

#[derive(Error, Debug)]
pub enum Error {
    /// Hash text or a ref chain that does not have the expected shape
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Header, property block or body of an object could not be decoded
    #[error("malformed object: {reason} (near '{fragment}')")]
    MalformedObject { reason: String, fragment: String },

    /// The object exists but is of another kind
    #[error("object {oid} is not a commit, but a {actual}")]
    WrongObjectKind { oid: ObjectId, actual: ObjectType },

    /// A handle could not be built from the given arguments
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unable to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>, fragment: &str) -> Self {
        let fragment = match fragment.char_indices().nth(FRAGMENT_LIMIT) {
            Some((end, _)) => format!("{}...", &fragment[..end]),
            None => fragment.to_string(),
        };

        Error::MalformedObject {
            reason: reason.into(),
            fragment: fragment.escape_debug().to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
