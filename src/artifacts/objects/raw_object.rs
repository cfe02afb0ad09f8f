//! Decoder for decompressed store objects
//!
//! A decompressed object is a header, a NUL byte, and a payload. For commits
//! (and tags) the payload starts with a block of `key value` lines, ended by
//! the first line that has no space in it (normally the blank line), followed
//! by the free-text body:
//!
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! A key may appear more than once (merge commits have one `parent` line per
//! parent). All values of a key are kept in file order, joined by
//! [`PROPERTY_SEPARATOR`]. The separator is internal to this decoder and never
//! appears in hashes or identities; it is not part of the store format.
//!
//! The header lines are also kept one by one, in file order, so a commit can
//! be written back exactly as it was stored.

use crate::artifacts::objects::author::Author;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{Error, Result};
use std::borrow::Cow;
use std::collections::HashMap;

/// Joins the values of a key that appears on several lines
pub const PROPERTY_SEPARATOR: char = '|';

const PARENT_KEY: &str = "parent";
const TREE_KEY: &str = "tree";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    object_type: ObjectType,
    properties: HashMap<String, String>,
    /// Every header line in file order, continuations folded in
    headers: Vec<(String, String)>,
    body: String,
}

impl RawObject {
    /// Decode the decompressed bytes of one object
    ///
    /// Non UTF-8 bytes in the payload are replaced, as the body is exposed as
    /// text.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let nul_count = raw.iter().filter(|&&byte| byte == 0).count();
        if nul_count != 1 {
            return Err(Error::malformed(
                format!("expected exactly one NUL after the header, found {nul_count}"),
                &String::from_utf8_lossy(raw),
            ));
        }

        let split = raw.iter().position(|&byte| byte == 0).unwrap_or(raw.len());
        let (header, payload) = (&raw[..split], &raw[split + 1..]);

        let header = std::str::from_utf8(header).map_err(|_| {
            Error::malformed("header is not UTF-8", &String::from_utf8_lossy(header))
        })?;
        let object_type = Self::parse_header(header, payload.len())?;

        let payload = String::from_utf8_lossy(payload);
        if let Cow::Owned(_) = payload {
            log::warn!("{object_type} payload is not UTF-8, invalid bytes were replaced");
        }
        let (headers, body) = Self::parse_properties(&payload)?;

        Ok(RawObject {
            object_type,
            properties: Self::group_properties(&headers),
            headers,
            body,
        })
    }

    fn parse_header(header: &str, payload_len: usize) -> Result<ObjectType> {
        let (object_type, size) = header
            .split_once(' ')
            .ok_or_else(|| Error::malformed("header has no size", header))?;

        let object_type = ObjectType::try_from(object_type)?;
        let size = size
            .parse::<usize>()
            .map_err(|_| Error::malformed("invalid object size", header))?;

        if size != payload_len {
            log::warn!(
                "{object_type} header announces {size} bytes but {payload_len} follow the header"
            );
        }

        Ok(object_type)
    }

    /// Split the payload into the header lines and the verbatim body
    fn parse_properties(payload: &str) -> Result<(Vec<(String, String)>, String)> {
        let mut headers = Vec::<(String, String)>::new();
        let mut rest = payload;

        loop {
            let (line, remainder) = rest.split_once('\n').unwrap_or((rest, ""));

            // A leading space continues the previous value (gpgsig, mergetag)
            if let Some(continuation) = line.strip_prefix(' ') {
                let (_, value) = headers.last_mut().ok_or_else(|| {
                    Error::malformed("continuation line without a property", line)
                })?;
                value.push('\n');
                value.push_str(continuation);
                rest = remainder;
                continue;
            }

            let Some((key, value)) = line.split_once(' ') else {
                // the terminating line itself is dropped
                rest = remainder;
                break;
            };

            headers.push((key.to_string(), value.to_string()));
            rest = remainder;
        }

        Ok((headers, rest.to_string()))
    }

    fn group_properties(headers: &[(String, String)]) -> HashMap<String, String> {
        let mut properties = HashMap::<String, String>::new();

        for (key, value) in headers {
            properties
                .entry(key.clone())
                .and_modify(|grouped| {
                    grouped.push(PROPERTY_SEPARATOR);
                    grouped.push_str(value);
                })
                .or_insert_with(|| value.clone());
        }

        properties
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Grouped value of a property, repeated keys joined by [`PROPERTY_SEPARATOR`]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Header lines in file order; multi-line values are joined with `\n`
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }

    /// Decode the identity stored under `key` (`author` or `committer`)
    pub fn author_of(&self, key: &str) -> Result<Author> {
        let value = self
            .property(key)
            .ok_or_else(|| Error::malformed(format!("missing {key} line"), ""))?;

        Author::try_from(value)
    }

    /// Every `parent` line as an object ID; none for a root commit
    pub fn parents(&self) -> Result<Vec<ObjectId>> {
        match self.property(PARENT_KEY) {
            Some(parents) => parents
                .split(PROPERTY_SEPARATOR)
                .map(ObjectId::try_parse)
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    pub fn tree(&self) -> Result<Option<ObjectId>> {
        self.property(TREE_KEY).map(ObjectId::try_parse).transpose()
    }
}
