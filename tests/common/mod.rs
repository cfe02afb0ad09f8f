#![allow(dead_code)]


use std::sync::Once;

const TMPDIR: &str = "../playground";

static LOGGER_INITIALIZED: Once = Once::new();

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// Initialize `env_logger` on the first call, and do nothing thereafter.
///
/// Set `RUST_LOG=debug` to see object loads and symref hops of a failing test.
pub fn init_env_logger() {
    LOGGER_INITIALIZED.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
