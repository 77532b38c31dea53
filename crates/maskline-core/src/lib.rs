#![forbid(unsafe_code)]

//! Core input plumbing for Maskline.
//!
//! This crate owns the two concerns every Maskline host needs before any
//! masking logic runs:
//!
//! - [`event`]: canonical keyboard/resize event types, decoupled from the
//!   terminal backend so the mask state machine can be driven (and tested)
//!   without a TTY.
//! - [`session`]: an RAII raw-mode guard with blocking/polled event reads,
//!   guaranteed to restore the terminal on every exit path.

pub mod event;
pub mod session;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use session::RawSession;
