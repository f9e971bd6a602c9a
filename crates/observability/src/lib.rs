//! Tracing/logging setup shared by every binary in the workspace.

/// Initialize process-wide logging with the `info` default.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;
