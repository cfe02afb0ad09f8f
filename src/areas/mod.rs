//! Core repository components
//!
//! This module contains the read side of a Git repository:
//!
//! - `database`: Object database holding blobs, trees, and commits
//! - `refs`: Reference resolution (HEAD and branches)
//! - `repository`: Read-only handle tying the two together

pub mod database;
pub mod refs;
pub mod repository;
