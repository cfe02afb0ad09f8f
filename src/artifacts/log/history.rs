//! Commit history in author-time order
//!
//! The walk keeps a frontier of commits that were discovered but not yet
//! emitted. Each step emits the frontier commit with the latest author time,
//! then (lazily, on the next step) adds that commit's parents to the frontier.
//! Merges therefore interleave their branches by time, the way `git log`
//! shows them.
//!
//! Every commit ID is enqueued at most once, so a commit reachable through
//! several branches (the base of a diamond) is emitted exactly once. Among
//! candidates with the same author time, the one discovered first wins.
//!
//! ```text
//!       A
//!      / \
//!     B   C
//!      \ /
//!       D (merge)
//!
//! D, C, B, A   (C authored after B)
//! ```

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// Commit waiting in the frontier
#[derive(Debug)]
struct Candidate {
    commit: Commit,
    /// Discovery order, used to break timestamp ties
    sequence: u64,
}

impl Candidate {
    fn key(&self) -> (chrono::DateTime<chrono::FixedOffset>, Reverse<u64>) {
        (self.commit.timestamp(), Reverse(self.sequence))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Lazy, newest-authored-first walk over the ancestry of a commit
///
/// # Type Parameters
///
/// * `CommitLoaderFn` - Loads a commit by ID; `Ok(None)` means the commit is
///   not in the store and is skipped.
///
/// Loader errors are yielded once and end the walk.
pub struct History<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> Result<Option<Commit>>,
{
    commit_loader: CommitLoaderFn,
    candidates: BinaryHeap<Candidate>,
    /// Every ID ever put in the frontier
    seen: HashSet<ObjectId>,
    /// Parents of the last emitted commit, expanded on the next step
    pending_parents: Vec<ObjectId>,
    next_sequence: u64,
}

impl<CommitLoaderFn> History<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> Result<Option<Commit>>,
{
    pub fn new(start: Commit, commit_loader: CommitLoaderFn) -> Self {
        let mut history = Self::empty(commit_loader);
        history.enqueue(start);
        history
    }

    /// A walk that yields nothing, for repositories without commits
    pub fn empty(commit_loader: CommitLoaderFn) -> Self {
        History {
            commit_loader,
            candidates: BinaryHeap::new(),
            seen: HashSet::new(),
            pending_parents: Vec::new(),
            next_sequence: 0,
        }
    }

    fn enqueue(&mut self, commit: Commit) {
        self.seen.insert(*commit.oid());
        self.candidates.push(Candidate {
            commit,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    fn expand_pending_parents(&mut self) -> Result<()> {
        for parent_oid in std::mem::take(&mut self.pending_parents) {
            if self.seen.contains(&parent_oid) {
                continue;
            }

            match (self.commit_loader)(&parent_oid)? {
                Some(parent) => self.enqueue(parent),
                None => {
                    log::debug!("parent {parent_oid} is not in the store, skipping it");
                    self.seen.insert(parent_oid);
                }
            }
        }

        Ok(())
    }
}

impl<CommitLoaderFn> Iterator for History<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> Result<Option<Commit>>,
{
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(err) = self.expand_pending_parents() {
            // a broken store ends the walk
            self.candidates.clear();
            return Some(Err(err));
        }

        let Candidate { commit, .. } = self.candidates.pop()?;
        self.pending_parents = commit.parents().to_vec();

        Some(Ok(commit))
    }
}
