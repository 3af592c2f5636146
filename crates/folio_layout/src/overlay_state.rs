//! Project details modal
//!
//! The modal owns its lifecycle, the image carousel, and the page scroll
//! lock. Opening shows it immediately; closing hides it, waits for the fade
//! to finish, then clears the selected project.
//!
//! ```text
//!            OPEN                CLOSE               CLOSE_ELAPSED
//!  Closed ─────────▶ Open ─────────────▶ Closing ─────────────────▶ Closed
//!                     ▲                     │
//!                     └──────── OPEN ───────┘
//! ```
//!
//! The page behind the modal counts as "covered" while a project is selected,
//! i.e. in both `Open` and `Closing`.

use folio_animation::{TimerId, TimerScheduler};
use folio_core::events::event_types::{CLOSE, CLOSE_ELAPSED, OPEN};
use folio_core::{DocumentScroll, EventType, ScrollLockGuard, StateMachine, StateTransitions};

use crate::widgets::carousel::Carousel;

/// Modal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Visible
    Open,
    /// Fading out; project still selected
    Closing,
}

impl StateTransitions for ModalState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (ModalState::Closed, OPEN) => Some(ModalState::Open),
            (ModalState::Closing, OPEN) => Some(ModalState::Open),
            (ModalState::Open, CLOSE) => Some(ModalState::Closing),
            (ModalState::Closing, CLOSE_ELAPSED) => Some(ModalState::Closed),
            _ => None,
        }
    }
}

/// Details overlay for a selected project
#[derive(Debug)]
pub struct ProjectModal {
    fsm: StateMachine<ModalState>,
    project_id: Option<u32>,
    carousel: Carousel,
    close_delay_ms: u64,
    close_timer: Option<TimerId>,
    document: DocumentScroll,
    scroll_lock: Option<ScrollLockGuard>,
}

impl ProjectModal {
    pub fn new(document: DocumentScroll, close_delay_ms: u64) -> Self {
        Self {
            fsm: StateMachine::default(),
            project_id: None,
            carousel: Carousel::default(),
            close_delay_ms,
            close_timer: None,
            document,
            scroll_lock: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.fsm.current_state()
    }

    /// A project is selected (open or fading out)
    pub fn is_open(&self) -> bool {
        self.project_id.is_some()
    }

    /// Fully visible
    pub fn is_visible(&self) -> bool {
        self.fsm.is_in(ModalState::Open)
    }

    pub fn project_id(&self) -> Option<u32> {
        self.project_id
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn holds_scroll_lock(&self) -> bool {
        self.scroll_lock.is_some()
    }

    /// Show a project, starting from its first image
    pub fn open(&mut self, project_id: u32, images: Vec<String>, scheduler: &mut TimerScheduler) {
        self.cancel_close(scheduler);
        if !self.fsm.send(OPEN) {
            // Already open on another project: swap the content in place
            tracing::debug!("modal content replaced");
        }
        self.project_id = Some(project_id);
        self.carousel.reset(images);
        if self.scroll_lock.is_none() {
            self.scroll_lock = Some(self.document.lock());
        }
        tracing::debug!("modal opened for project {}", project_id);
    }

    /// Hide the modal; the project is cleared once the fade has elapsed
    pub fn request_close(&mut self, scheduler: &mut TimerScheduler) {
        if !self.fsm.send(CLOSE) {
            return;
        }
        self.close_timer = Some(scheduler.schedule(self.close_delay_ms));
    }

    /// Handle a fired timer. Returns false if the timer is not ours.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.close_timer != Some(id) {
            return false;
        }
        self.close_timer = None;
        self.fsm.send(CLOSE_ELAPSED);
        self.clear();
        true
    }

    /// Close immediately and release everything, e.g. on page teardown
    pub fn teardown(&mut self, scheduler: &mut TimerScheduler) {
        self.cancel_close(scheduler);
        // Open -> Closing -> Closed; either send is a no-op where it doesn't apply
        self.fsm.send(CLOSE);
        self.fsm.send(CLOSE_ELAPSED);
        self.clear();
    }

    fn cancel_close(&mut self, scheduler: &mut TimerScheduler) {
        if let Some(id) = self.close_timer.take() {
            scheduler.cancel(id);
        }
    }

    fn clear(&mut self) {
        if let Some(id) = self.project_id.take() {
            tracing::debug!("modal closed for project {}", id);
        }
        self.carousel = Carousel::default();
        self.scroll_lock = None;
    }
}
