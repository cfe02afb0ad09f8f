//! Author and committer identities
//!
//! A commit names two identities, each stored on one line:
//!
//! ```text
//! author <name> <<email>> <epoch-seconds> <offset>
//! ```

use crate::errors::{Error, Result};
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Email address of an author or committer
///
/// Surrounding whitespace is trimmed on construction; equality is on the
/// trimmed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EmailAddress {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.trim()
    }
}

impl PartialEq<&str> for EmailAddress {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author or committer information
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: EmailAddress,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    pub fn new(name: String, email: EmailAddress, timestamp: DateTime<FixedOffset>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Authored-at instant, carrying the offset recorded next to it
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format author name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Format complete author info as stored in a commit
    ///
    /// # Returns
    ///
    /// String in format "Name <email> timestamp timezone"
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

impl TryFrom<&str> for Author {
    type Error = Error;

    /// Parse "name <email> epoch offset"
    ///
    /// The value is cut on `<` and `>` into exactly three segments. Only the
    /// epoch is mandatory in the last one; a missing or unreadable offset
    /// leaves the time in UTC.
    fn try_from(value: &str) -> Result<Self> {
        let parts = value.split(['<', '>']).map(str::trim).collect::<Vec<_>>();

        let [name, email, time] = parts.as_slice() else {
            return Err(Error::malformed(
                format!(
                    "identity must split into name, email and time, found {} parts",
                    parts.len()
                ),
                value,
            ));
        };

        let mut time_parts = time.split_whitespace();
        let epoch = time_parts
            .next()
            .and_then(|epoch| epoch.parse::<i64>().ok())
            .ok_or_else(|| Error::malformed("invalid timestamp", time))?;

        let instant = DateTime::from_timestamp(epoch, 0)
            .ok_or_else(|| Error::malformed("timestamp out of range", time))?;

        let offset = match time_parts.next() {
            Some(offset) => parse_offset(offset).unwrap_or_else(|| {
                log::warn!("ignoring unreadable timezone offset '{offset}' in '{value}'");
                utc()
            }),
            None => utc(),
        };

        Ok(Author {
            name: name.to_string(),
            email: EmailAddress::new(email),
            timestamp: instant.with_timezone(&offset),
        })
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Parse a `+hhmm`/`-hhmm` offset token
fn parse_offset(token: &str) -> Option<FixedOffset> {
    let (sign, digits) = match token.as_bytes().first()? {
        b'+' => (1, &token[1..]),
        b'-' => (-1, &token[1..]),
        _ => return None,
    };
    if digits.len() != 4 || !digits.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours = digits[..2].parse::<i32>().ok()?;
    let minutes = digits[2..].parse::<i32>().ok()?;
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
