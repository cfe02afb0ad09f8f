//! Git object types and decoding
//!
//! Git stores all content as objects identified by SHA-1 hashes. Every object on
//! disk is a zlib stream whose decompressed form is:
//!
//! ```text
//! <type> <size>\0<content>
//! ```
//!
//! This module only reads. It can frame and hash any kind of object, but only
//! commits are decoded into a typed entity:
//!
//! - `object_id`: the 20-byte content hash and its hex form
//! - `object_type`: the kind tag found in the header
//! - `raw_object`: header + property block + body decoder
//! - `author`: identity and timestamp lines of a commit
//! - `commit`: the typed commit

pub mod author;
pub mod commit;
pub mod object_id;
pub mod object_type;
pub mod raw_object;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in bytes
pub const OBJECT_ID_BYTES: usize = OBJECT_ID_LENGTH / 2;
