//! Core utilities and shared types
//!
//! This module contains the output plumbing shared by the commands.

use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Whether long output should go through the pager
///
/// Only when stdout is an interactive terminal and `NO_PAGER` is unset.
pub fn pager_enabled() -> bool {
    std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager only accepts `&str`, so bytes are buffered until they form
/// complete UTF-8 sequences. A multi-byte character split across two writes
/// is pushed once both halves have arrived.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long output...")?;
/// writer.flush()?;
/// minus::page_all(pager)?;
/// ```
pub struct PagerWriter {
    pager: Pager,
    pending: Vec<u8>,
}

impl PagerWriter {
    pub fn new(pager: Pager) -> Self {
        PagerWriter {
            pager,
            pending: Vec::new(),
        }
    }

    fn push_valid_prefix(&mut self) -> io::Result<()> {
        let valid_up_to = match std::str::from_utf8(&self.pending) {
            Ok(text) => text.len(),
            // an incomplete trailing sequence waits for the next write
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidData, err)),
        };

        let rest = self.pending.split_off(valid_up_to);
        let text = String::from_utf8(std::mem::replace(&mut self.pending, rest))
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        if !text.is_empty() {
            self.pager.push_str(&text).map_err(io::Error::other)?;
        }

        Ok(())
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        self.push_valid_prefix()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.push_valid_prefix()?;
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "output ends in the middle of a UTF-8 sequence",
            ))
        }
    }
}
