// Copyright (c) 2025 - Cowboy AI, Inc.
//! Prefixed diagnostic messages
//!
//! Every failure raised while handling one object should carry the same
//! context prefix (`"subnet x: "`, `"resolve 10.0.0.9: "`). The wrapper is
//! built once per call site and then used like `format!`.
//!
//! ```rust
//! use dualstack_netd::diagnostics::message_wrapper;
//!
//! let wrap = message_wrapper("subnet-x: ");
//! assert_eq!(wrap(format_args!("bad value {}", 5)), "subnet-x: bad value 5");
//! ```

use std::fmt;

/// Build a formatter that prepends `prefix` to every message.
pub fn message_wrapper(prefix: impl Into<String>) -> impl Fn(fmt::Arguments<'_>) -> String {
    let prefix = prefix.into();
    move |args| format!("{prefix}{args}")
}

/// Format through a wrapper built by [`message_wrapper`].
#[macro_export]
macro_rules! wrap_msg {
    ($wrapper:expr, $($arg:tt)*) => {
        ($wrapper)(format_args!($($arg)*))
    };
}
