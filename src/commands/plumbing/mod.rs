//! Plumbing commands (low-level object access)
//!
//! Plumbing commands give direct access to the object store. They are mostly
//! useful for scripting and for checking the store by hand.
//!
//! ## Commands
//!
//! - `cat-file`: Pretty-print a commit object
//! - `hash-object`: Compute the blob ID of a file
//! - `show-head`: Print the commit HEAD resolves to

pub mod cat_file;
pub mod hash_object;
pub mod show_head;
