//! Lightweight debug logging gated by DQM_DEBUG=1 or the `--debug` flag.
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Force logging on for this process. Has no effect once the flag was read.
pub fn enable(flag: bool) {
    let _ = ENABLED.set(flag || env_enabled());
}

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(env_enabled)
}

fn env_enabled() -> bool {
    std::env::var("DQM_DEBUG").ok().as_deref() == Some("1")
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[dqm] {}", format_args!($($arg)*)); }
    }};
}
