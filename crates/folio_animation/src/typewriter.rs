//! Typewriter effect
//!
//! Types a role label one character per tick, pauses, deletes it one
//! character per tick, then moves on to the next role. The cycle never ends
//! while the controller is mounted.
//!
//! The state machine is a pure function ([`TypewriterState::advance`]); the
//! [`Typewriter`] controller wraps it with a single self-rescheduling timer.
//!
//! # Example
//!
//! ```rust
//! use folio_animation::{TickDelays, TimerScheduler, Typewriter};
//!
//! let mut scheduler = TimerScheduler::new();
//! let mut typewriter = Typewriter::new(vec!["HI".into()], TickDelays::default()).unwrap();
//! typewriter.mount(&mut scheduler);
//!
//! scheduler.advance(150, |s, id| {
//!     typewriter.on_timer(id, s);
//! });
//! assert_eq!(typewriter.visible_text(), "H");
//! ```

use folio_core::{CoreError, Result};

use crate::scheduler::{TimerId, TimerScheduler};

/// Current phase of the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeMode {
    #[default]
    Typing,
    Deleting,
}

/// Tick delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDelays {
    /// Delay between characters mid-word
    pub typing_ms: u64,
    /// Delay after a word completes or empties
    pub pause_ms: u64,
}

impl Default for TickDelays {
    fn default() -> Self {
        Self {
            typing_ms: 150,
            pause_ms: 200,
        }
    }
}

impl TickDelays {
    pub fn validate(&self) -> Result<()> {
        if self.typing_ms == 0 {
            return Err(CoreError::InvalidDelay {
                name: "typing_ms",
                value: self.typing_ms,
            });
        }
        if self.pause_ms == 0 {
            return Err(CoreError::InvalidDelay {
                name: "pause_ms",
                value: self.pause_ms,
            });
        }
        Ok(())
    }
}

/// Snapshot of the effect between two ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterState {
    pub role_index: usize,
    /// Prefix of the current role that is on screen
    pub visible_text: String,
    pub mode: TypeMode,
    /// Delay before the next tick
    pub tick_delay_ms: u64,
}

impl TypewriterState {
    /// Starting state: typing the first role from an empty string
    pub fn initial(delays: TickDelays) -> Self {
        Self {
            role_index: 0,
            visible_text: String::new(),
            mode: TypeMode::Typing,
            tick_delay_ms: delays.typing_ms,
        }
    }

    /// Compute the state after one tick
    ///
    /// Reaching the end of a word (or emptying it) switches mode and uses the
    /// pause delay for the following tick; otherwise the typing delay applies.
    pub fn advance(&self, roles: &[String], delays: TickDelays) -> Self {
        let Some(role) = roles.get(self.role_index) else {
            // Roles were swapped underneath us; restart from the top
            return Self::initial(delays);
        };

        let shown = self.visible_text.chars().count();
        let role_len = role.chars().count();

        match self.mode {
            TypeMode::Typing => {
                let next_len = (shown + 1).min(role_len);
                let visible_text: String = role.chars().take(next_len).collect();
                if next_len == role_len {
                    Self {
                        role_index: self.role_index,
                        visible_text,
                        mode: TypeMode::Deleting,
                        tick_delay_ms: delays.pause_ms,
                    }
                } else {
                    Self {
                        role_index: self.role_index,
                        visible_text,
                        mode: TypeMode::Typing,
                        tick_delay_ms: delays.typing_ms,
                    }
                }
            }
            TypeMode::Deleting => {
                let next_len = shown.saturating_sub(1);
                let visible_text: String = role.chars().take(next_len).collect();
                if next_len == 0 {
                    Self {
                        role_index: (self.role_index + 1) % roles.len(),
                        visible_text,
                        mode: TypeMode::Typing,
                        tick_delay_ms: delays.pause_ms,
                    }
                } else {
                    Self {
                        role_index: self.role_index,
                        visible_text,
                        mode: TypeMode::Deleting,
                        tick_delay_ms: delays.typing_ms,
                    }
                }
            }
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Typewriter controller owning its state and its single pending tick
#[derive(Debug)]
pub struct Typewriter {
    roles: Vec<String>,
    delays: TickDelays,
    state: TypewriterState,
    pending: Option<TimerId>,
}

impl Typewriter {
    /// Create a controller over a non-empty list of non-empty roles
    pub fn new(roles: Vec<String>, delays: TickDelays) -> Result<Self> {
        if roles.is_empty() {
            return Err(CoreError::EmptyRoleList);
        }
        if let Some(index) = roles.iter().position(|r| r.is_empty()) {
            return Err(CoreError::EmptyRole { index });
        }
        delays.validate()?;

        Ok(Self {
            roles,
            delays,
            state: TypewriterState::initial(delays),
            pending: None,
        })
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn delays(&self) -> TickDelays {
        self.delays
    }

    pub fn state(&self) -> &TypewriterState {
        &self.state
    }

    pub fn visible_text(&self) -> &str {
        &self.state.visible_text
    }

    pub fn role_index(&self) -> usize {
        self.state.role_index
    }

    pub fn mode(&self) -> TypeMode {
        self.state.mode
    }

    /// Check if a tick is scheduled
    pub fn is_mounted(&self) -> bool {
        self.pending.is_some()
    }

    /// The tick this controller is waiting for
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    /// Advance one tick without touching the scheduler
    pub fn tick(&mut self) -> &TypewriterState {
        self.state = self.state.advance(&self.roles, self.delays);
        tracing::trace!(
            "typewriter tick: role={} text={:?} mode={:?} next={}ms",
            self.state.role_index,
            self.state.visible_text,
            self.state.mode,
            self.state.tick_delay_ms
        );
        &self.state
    }

    /// Start the cycle; replaces any tick that was already pending
    pub fn mount(&mut self, scheduler: &mut TimerScheduler) {
        self.reschedule(scheduler);
        tracing::debug!("typewriter mounted with {} roles", self.roles.len());
    }

    /// Handle a fired timer. Returns false if the timer is not ours.
    pub fn on_timer(&mut self, id: TimerId, scheduler: &mut TimerScheduler) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.tick();
        self.reschedule(scheduler);
        true
    }

    /// Stop the cycle; no tick fires after this returns
    pub fn unmount(&mut self, scheduler: &mut TimerScheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
            tracing::debug!("typewriter unmounted");
        }
    }

    fn reschedule(&mut self, scheduler: &mut TimerScheduler) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        self.pending = Some(scheduler.schedule(self.state.tick_delay_ms));
    }
}
