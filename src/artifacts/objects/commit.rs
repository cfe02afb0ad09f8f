//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - Parent commit ID(s) (for history)
//! - Author and committer information
//! - Commit message
//! - A tree object ID (directory snapshot), kept only as an ID
//! - Any other header lines (`encoding`, `mergetag`, `gpgsig`), kept verbatim
//!
//! A commit is identified by the hash of its own content, so two commits with
//! the same [`ObjectId`] are the same commit.

use crate::artifacts::objects::author::Author;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::raw_object::RawObject;
use crate::errors::{Error, Result};

/// Header keys decoded into typed fields
const TYPED_HEADERS: [&str; 4] = ["tree", "parent", "author", "committer"];

/// Git commit object
#[derive(Debug, Clone)]
pub struct Commit {
    /// Hash of the commit object itself
    oid: ObjectId,
    /// Parent commit IDs (empty for initial commit, multiple for merge commits)
    parents: Vec<ObjectId>,
    /// Tree object ID, when the record carries one
    tree_oid: Option<ObjectId>,
    /// Author who wrote the changes
    author: Author,
    /// Committer who recorded the commit
    committer: Author,
    /// Remaining header lines in file order; multi-line values joined by `\n`
    extra_headers: Vec<(String, String)>,
    /// Commit message, verbatim from the store
    message: String,
}

impl Commit {
    pub fn new(
        oid: ObjectId,
        author: Author,
        committer: Author,
        parents: Vec<ObjectId>,
        message: String,
    ) -> Self {
        Commit {
            oid,
            parents,
            tree_oid: None,
            author,
            committer,
            extra_headers: Vec::new(),
            message,
        }
    }

    /// Build a commit from a decoded object
    ///
    /// # Errors
    ///
    /// `WrongObjectKind` when the object is not a commit, `MalformedObject` or
    /// `InvalidFormat` when its identities or parent lines do not parse.
    pub fn parse(oid: ObjectId, object: RawObject) -> Result<Self> {
        if object.object_type() != ObjectType::Commit {
            return Err(Error::WrongObjectKind {
                oid,
                actual: object.object_type(),
            });
        }

        let author = object.author_of("author")?;
        let committer = object.author_of("committer")?;
        let parents = object.parents()?;
        let tree_oid = object.tree()?;
        let extra_headers = object
            .headers()
            .iter()
            .filter(|(key, _)| !TYPED_HEADERS.contains(&key.as_str()))
            .cloned()
            .collect();

        Ok(Commit {
            oid,
            parents,
            tree_oid,
            author,
            committer,
            extra_headers,
            message: object.into_body(),
        })
    }

    /// Decode the decompressed bytes of a commit object in one step
    pub fn decode(oid: ObjectId, raw: &[u8]) -> Result<Self> {
        Self::parse(oid, RawObject::decode(raw)?)
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn tree_oid(&self) -> Option<&ObjectId> {
        self.tree_oid.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    /// Header lines other than tree, parents and identities, in file order
    pub fn extra_headers(&self) -> &[(String, String)] {
        &self.extra_headers
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `git log --oneline`)
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Authored-at time, the key history is ordered by
    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.author.timestamp()
    }

    /// Render the commit the way `cat-file -p` shows it
    pub fn display(&self) -> String {
        let mut lines = vec![];

        if let Some(tree_oid) = &self.tree_oid {
            lines.push(format!("tree {tree_oid}"));
        }
        for parent in &self.parents {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));
        for (key, value) in &self.extra_headers {
            // continuation lines are stored with one leading space
            lines.push(format!("{key} {}", value.replace('\n', "\n ")));
        }
        lines.push(String::new());

        format!("{}\n{}", lines.join("\n"), self.message)
    }
}

impl PartialEq for Commit {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
    }
}

impl Eq for Commit {}

impl std::hash::Hash for Commit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.oid.hash(state);
    }
}
