//! Folio Animation System
//!
//! Timer-driven animations for the portfolio shell.
//!
//! # Features
//!
//! - **Timer Scheduler**: Virtual-clock timers with explicit cancellation
//! - **Typewriter**: Looping type-then-delete effect over a list of roles

pub mod scheduler;
pub mod typewriter;

pub use scheduler::{TimerId, TimerScheduler};
pub use typewriter::{TickDelays, TypeMode, Typewriter, TypewriterState};
