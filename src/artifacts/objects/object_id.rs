//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 20-byte SHA-1 digests. Their canonical text form is 40
//! lowercase hexadecimal characters; the bytes are authoritative and the hex is
//! always derived from them.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "ce013625030ba8dba906f756967f9e9ca394464a")
//! - Short: First 7 characters (e.g., "ce01362")
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::{OBJECT_ID_BYTES, OBJECT_ID_LENGTH};
use crate::errors::{Error, Result};
use sha1::{Digest, Sha1};
use std::path::PathBuf;
use std::str::FromStr;

/// Length of the abbreviated object ID shown by `log --abbrev-commit`
const SHORT_OID_LENGTH: usize = 7;

/// Git object identifier (SHA-1 hash)
///
/// Equality, ordering and hashing are defined over the raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_BYTES]);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; OBJECT_ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Hash content the way the store addresses it
    ///
    /// The digest covers the canonical frame `"<type> <byte-length>\0<content>"`,
    /// so the result is the ID git would give the same object.
    pub fn derive(object_type: ObjectType, content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(format!("{} {}\0", object_type.as_str(), content.len()).as_bytes());
        hasher.update(content);

        Self(hasher.finalize().into())
    }

    /// Parse and validate an object ID from its hex form
    ///
    /// Only the canonical spelling is accepted: exactly 40 characters from
    /// `0-9a-f`. Uppercase digits are rejected.
    pub fn try_parse(id: &str) -> Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(Error::InvalidFormat(format!(
                "expected {OBJECT_ID_LENGTH} hex digits ({OBJECT_ID_BYTES} bytes), got {} in '{}'",
                id.len(),
                id.escape_debug()
            )));
        }
        if !id.bytes().all(is_lower_hex_digit) {
            return Err(Error::InvalidFormat(format!(
                "non-hex digit in object ID '{}'",
                id.escape_debug()
            )));
        }

        let mut bytes = [0u8; OBJECT_ID_BYTES];
        // Process a byte (two nibbles) at a time
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&id[i * 2..i * 2 + 2], 16)
                .map_err(|_| Error::InvalidFormat(format!("invalid hex pair in '{id}'")))?;
        }

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_BYTES] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|byte| format!("{byte:02x}")).collect()
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let hex = self.to_hex();
        let (dir, file) = hex.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(SHORT_OID_LENGTH);
        hex
    }
}

fn is_lower_hex_digit(c: u8) -> bool {
    c.is_ascii_digit() || (b'a'..=b'f').contains(&c)
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl TryFrom<&str> for ObjectId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::try_parse(value)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}
