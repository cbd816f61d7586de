//! Interrupt handling.
//!
//! Ctrl-C during any phase ends the process with a cancellation notice and
//! exit status 0. Files already written (a partial clone, for example) are
//! left where they are. Child processes share our process group, so they
//! receive the same SIGINT and stop on their own.

/// Notice printed when the user interrupts the run.
pub const CANCELLED_NOTICE: &str = "Setup cancelled";

#[cfg(unix)]
const INTERRUPT_MESSAGE: &[u8] = b"\nSetup cancelled\n";

#[cfg(unix)]
extern "C" fn on_interrupt(_signal: libc::c_int) {
    // Only async-signal-safe calls are allowed here.
    // SAFETY: write(2) and _exit(2) are async-signal-safe; the message is static.
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            INTERRUPT_MESSAGE.as_ptr().cast(),
            INTERRUPT_MESSAGE.len(),
        );
        libc::_exit(0);
    }
}

/// Install the process-wide SIGINT handler.
///
/// Must be called once, from `main()`, before the pipeline starts.
#[cfg(unix)]
pub fn install_interrupt_handler() {
    let handler = on_interrupt as extern "C" fn(libc::c_int);
    // SAFETY: the handler only performs async-signal-safe operations.
    let previous = unsafe { libc::signal(libc::SIGINT, handler as libc::sighandler_t) };
    if previous == libc::SIG_ERR {
        tracing::warn!("Failed to install SIGINT handler");
    }
}

/// Install the process-wide interrupt handler.
///
/// Without a handler, Ctrl-C terminates the process with the platform's
/// default status.
#[cfg(not(unix))]
pub fn install_interrupt_handler() {
    tracing::debug!("Interrupt handler not supported on this platform");
}
