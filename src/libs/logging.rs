//! Tracing bootstrap.
//!
//! A subscriber is installed only in debug mode (`TASKROLL_DEBUG` or
//! `RUST_LOG` set). Otherwise the message macros print directly and
//! tracing events are discarded.

use crate::libs::messages::macros::is_debug_mode;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "taskroll=debug";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the fmt subscriber once per process. Later calls are no-ops.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .try_init()
            .ok();
        tracing::debug!("tracing initialized");
    });
}
