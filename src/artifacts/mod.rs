//! Git data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `log`: Commit history traversal
//! - `objects`: Git object types (object IDs, raw objects, commits)

pub mod core;
pub mod log;
pub mod objects;
