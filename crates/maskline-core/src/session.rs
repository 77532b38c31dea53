#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`RawSession`] owns raw-mode entry/exit for an inline prompt. It is
//! deliberately minimal: no alternate screen, no mouse capture, no bracketed
//! paste. An inline masked prompt needs none of them, and every mode left
//! unused is a mode that cannot leak.
//!
//! # Lifecycle Guarantees
//!
//! 1. **Construction enters raw mode**: line buffering and echo are off for
//!    the session's lifetime.
//! 2. **Drop restores cooked mode**: cleanup runs in [`Drop`], so it happens
//!    on return, `?`, and panic unwinding (unless `panic = "abort"`).
//! 3. **Panic hook backstop**: the first session installs a process-wide
//!    panic hook that restores the terminal before the panic message prints,
//!    so a panic inside the event loop never leaves the shell unusable.
//!
//! Only one `RawSession` should exist at a time; creating a second while the
//! first is alive will restore cooked mode as soon as either is dropped.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crate::event::Event;

/// RAII guard for terminal raw mode with canonical event reads.
#[derive(Debug)]
pub struct RawSession {
    _private: (),
}

impl RawSession {
    /// Enter raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled (e.g. stdout is not a
    /// terminal).
    pub fn new() -> io::Result<Self> {
        install_panic_hook();
        crossterm::terminal::enable_raw_mode()?;
        #[cfg(feature = "tracing")]
        tracing::info!("terminal raw mode enabled");
        Ok(Self { _private: () })
    }

    /// Check whether an event is available within `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying terminal poll fails.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    /// Block until the next terminal event and convert it.
    ///
    /// Returns `Ok(None)` if the event cannot be represented by the
    /// canonical event types (mouse, paste, unsupported keys).
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        let event = crossterm::event::read()?;
        Ok(Event::from_crossterm(event))
    }
}

impl Drop for RawSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::terminal::disable_raw_mode();
    #[cfg(feature = "tracing")]
    tracing::info!("terminal raw mode disabled");
    let _ = stdout.flush();
}
