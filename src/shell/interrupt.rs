//! Ctrl-C handling.
//!
//! While an external command runs, Ctrl-C only stops the child (which gets
//! the signal from the terminal) and is recorded so the caller can treat the
//! run as cancelled and return to the menu. At any other time it restores
//! the cursor, says goodbye and exits cleanly.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{ManagerError, Result};

static RUNNING: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide Ctrl-C handler. Call once at startup.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(on_interrupt).map_err(|e| {
        ManagerError::Other(anyhow::Error::new(e).context("installing Ctrl-C handler"))
    })
}

fn on_interrupt() {
    if !record_interrupt() {
        let term = console::Term::stdout();
        let _ = term.show_cursor();
        let _ = term.write_line("\nGoodbye!");
        std::process::exit(0);
    }
}

/// Record a Ctrl-C if an external command is running.
pub(crate) fn record_interrupt() -> bool {
    let running = RUNNING.load(Ordering::SeqCst);
    if running {
        INTERRUPTED.store(true, Ordering::SeqCst);
    }
    running
}

/// Whether a [`CommandGuard`] is currently alive.
#[cfg(test)]
pub(crate) fn command_running() -> bool {
    RUNNING.load(Ordering::SeqCst)
}

/// Serialises tests that touch the process-wide interrupt flags.
#[cfg(test)]
pub(crate) fn serial() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Marks an external command as running for as long as it lives.
#[derive(Debug)]
pub struct CommandGuard {
    _private: (),
}

impl CommandGuard {
    /// Start a command section with a clear interruption flag.
    pub fn enter() -> Self {
        INTERRUPTED.store(false, Ordering::SeqCst);
        RUNNING.store(true, Ordering::SeqCst);
        Self { _private: () }
    }

    /// Whether Ctrl-C arrived since [`enter`](Self::enter).
    pub fn interrupted(&self) -> bool {
        INTERRUPTED.load(Ordering::SeqCst)
    }
}

impl Drop for CommandGuard {
    fn drop(&mut self) {
        RUNNING.store(false, Ordering::SeqCst);
        INTERRUPTED.store(false, Ordering::SeqCst);
    }
}
