//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `log`: Show commit history

pub mod log;
