use chrono::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Turn diagnostic output on or off. Off by default.
pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Add a timestamp like `[hh:mm:ss] ` before the message and print it to
/// stderr, so it never interleaves with command output on stdout.
///
/// Does nothing unless [`set_verbose`] was called with `true`.
///
/// ## Usage
///
/// ```rust
/// use nfshell::logger;
///
/// logger::set_verbose(true);
/// logger::log("String literal");
/// logger::log(&format!("to format: {}", 10));
/// ```
pub fn log(msg: &str) {
    if !verbose() {
        return;
    }
    let now = Local::now();
    eprintln!("[{:0>2}:{:0>2}:{:0>2}] {msg}", now.hour(), now.minute(), now.second());
}
