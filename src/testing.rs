//! Helpers shared by unit tests

/// Installs `env_logger` so `RUST_LOG=trace` shows heap tracing; safe to call repeatedly.
pub(crate) fn init_logging() {
    drop(env_logger::builder().is_test(true).try_init());
}
