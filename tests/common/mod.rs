//! Helpers shared by integration tests

/// Installs `env_logger` so `RUST_LOG=trace` shows heap tracing; safe to call repeatedly.
pub fn init_logging() {
    drop(env_logger::builder().is_test(true).try_init());
}
