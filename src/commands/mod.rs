//! Command implementations
//!
//! Commands are organized into two categories following Git's architecture:
//!
//! - `plumbing`: Low-level commands for direct object access (cat-file, hash-object)
//! - `porcelain`: User-facing commands (log)
//!
//! Commands return `anyhow::Result` and write to any `std::io::Write`, so the
//! binary can route output through the pager and tests can capture it.

pub mod plumbing;
pub mod porcelain;
