//! Commit history traversal for `log`
//!
//! - `history`: lazy walk over the ancestry of a commit, ordered by author
//!   time with a priority queue

pub mod history;
