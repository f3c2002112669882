//! Output macros for user-facing messages.
//!
//! Every macro accepts any `Display` value, so [`Message`] variants and
//! [`TaskError`] values can be passed directly. Where the output lands
//! depends on debug mode (`TASKROLL_DEBUG` or `RUST_LOG` set):
//!
//! | macro          | prefix | normal mode | debug mode        |
//! |----------------|--------|-------------|-------------------|
//! | `msg_print!`   |        | stdout      | `tracing::info!`  |
//! | `msg_success!` | ✅     | stdout      | `tracing::info!`  |
//! | `msg_info!`    | ℹ️     | stdout      | `tracing::info!`  |
//! | `msg_warning!` | ⚠️     | stdout      | `tracing::warn!`  |
//! | `msg_error!`   | ❌     | stderr      | `tracing::error!` |
//!
//! Passing `true` as a second argument surrounds the line with blank lines.
//!
//! ```rust
//! use taskroll::{msg_error, msg_success};
//! use taskroll::libs::error::TaskError;
//! use taskroll::libs::messages::Message;
//!
//! msg_success!(Message::TaskAdded("Water plants".to_string()));
//! msg_error!(TaskError::EmptyTitle);
//! ```
//!
//! [`Message`]: crate::libs::messages::Message
//! [`TaskError`]: crate::libs::error::TaskError

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// True when `TASKROLL_DEBUG` or `RUST_LOG` is set. Read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var_os("TASKROLL_DEBUG").is_some() || std::env::var_os("RUST_LOG").is_some())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:literal, $msg:expr, padded) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            $print!("\n{}{}\n", $prefix, $msg);
        }
    };
    ($level:ident, $print:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $print!("{}{}", $prefix, $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, padded)
    };
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, padded)
    };
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg, padded)
    };
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg)
    };
}

/// Errors go to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, padded)
    };
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg)
    };
}
