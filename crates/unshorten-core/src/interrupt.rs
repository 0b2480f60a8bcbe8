//! SIGINT handling for the single probe.
//!
//! While a probe is armed, SIGINT only raises the abort token; the curl
//! progress callback sees it and stops the transfer so the handle is dropped
//! normally. Outside that window SIGINT exits the process with status 0.

use std::sync::atomic::{AtomicBool, Ordering};

static ARMED: AtomicBool = AtomicBool::new(false);
static ABORT: AtomicBool = AtomicBool::new(false);

/// Install the SIGINT handler. Call once from `main`.
#[cfg(unix)]
pub fn install() {
    let handler = on_sigint as extern "C" fn(libc::c_int) as libc::sighandler_t;
    // SAFETY: the handler only touches atomics and calls `_exit`, both async-signal-safe.
    unsafe {
        libc::signal(libc::SIGINT, handler);
    }
}

#[cfg(not(unix))]
pub fn install() {}

#[cfg(unix)]
extern "C" fn on_sigint(_sig: libc::c_int) {
    if ARMED.load(Ordering::SeqCst) {
        ABORT.store(true, Ordering::SeqCst);
    } else {
        // SAFETY: `_exit` is async-signal-safe and skips unwinding.
        unsafe { libc::_exit(0) };
    }
}

/// True once SIGINT has been received during an armed probe.
pub fn requested() -> bool {
    ABORT.load(Ordering::SeqCst)
}

/// Marks the probe window; SIGINT is deferred to the transfer while this is alive.
#[derive(Debug)]
pub struct Armed(());

impl Drop for Armed {
    fn drop(&mut self) {
        ARMED.store(false, Ordering::SeqCst);
    }
}

/// Enter the probe window.
pub fn arm() -> Armed {
    ABORT.store(false, Ordering::SeqCst);
    ARMED.store(true, Ordering::SeqCst);
    Armed(())
}
