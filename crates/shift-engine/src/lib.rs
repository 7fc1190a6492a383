//! # shift-engine
//!
//! Deterministic work-shift countdown computation.
//!
//! Given a configured daily target (a "rest" break or a "home" departure
//! time), a fixed timezone, and an explicit `now` anchor, the engine computes
//! the remaining duration, a progress percentage anchored at the start of the
//! workday, and the weekend policy (Saturday early departure, Sunday
//! holiday). No function reads the system clock — the caller supplies the
//! anchor, keeping every computation pure and testable.
//!
//! ## Modules
//!
//! - [`schedule`] — Daily target times and the rest/home distinction
//! - [`clock`] — The countdown evaluator and its state snapshot
//! - [`config`] — The persisted configuration record and its validation
//! - [`error`] — Error types

pub mod clock;
pub mod config;
pub mod error;
pub mod schedule;

pub use clock::{evaluate, ClockState, ClockStatus, PROGRESS_ANCHOR_HOUR};
pub use config::ShiftConfig;
pub use error::ShiftError;
pub use schedule::{ScheduleKind, TimeOfDay};
