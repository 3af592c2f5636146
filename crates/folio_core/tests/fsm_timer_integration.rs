//! Integration tests for state machines + timers + scroll lock
//!
//! A small overlay is assembled from the core primitives the way the page
//! controllers do it: the FSM owns the lifecycle, a virtual-clock timer
//! completes the fade, and a scroll-lock guard lives exactly as long as the
//! overlay covers the page.

use folio_animation::{TimerId, TimerScheduler, TickDelays, Typewriter};
use folio_core::events::event_types::{CLOSE, CLOSE_ELAPSED, OPEN};
use folio_core::{DocumentScroll, EventType, ScrollLockGuard, StateMachine, StateTransitions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
enum Sheet {
    #[default]
    Hidden,
    Shown,
    Fading,
}

impl StateTransitions for Sheet {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (Sheet::Hidden, OPEN) | (Sheet::Fading, OPEN) => Some(Sheet::Shown),
            (Sheet::Shown, CLOSE) => Some(Sheet::Fading),
            (Sheet::Fading, CLOSE_ELAPSED) => Some(Sheet::Hidden),
            _ => None,
        }
    }
}

struct Overlay {
    fsm: StateMachine<Sheet>,
    fade: Option<TimerId>,
    lock: Option<ScrollLockGuard>,
}

impl Overlay {
    fn new() -> Self {
        Self {
            fsm: StateMachine::default(),
            fade: None,
            lock: None,
        }
    }

    fn open(&mut self, document: &DocumentScroll, scheduler: &mut TimerScheduler) {
        if let Some(id) = self.fade.take() {
            scheduler.cancel(id);
        }
        self.fsm.send(OPEN);
        self.lock.get_or_insert_with(|| document.lock());
    }

    fn close(&mut self, scheduler: &mut TimerScheduler) {
        if self.fsm.send(CLOSE) {
            self.fade = Some(scheduler.schedule(300));
        }
    }

    fn on_timer(&mut self, id: TimerId) {
        if self.fade == Some(id) {
            self.fade = None;
            self.fsm.send(CLOSE_ELAPSED);
            self.lock = None;
        }
    }
}

#[test]
fn test_fade_timer_completes_lifecycle() {
    let document = DocumentScroll::new();
    let mut scheduler = TimerScheduler::new();
    let mut overlay = Overlay::new();

    overlay.open(&document, &mut scheduler);
    overlay.close(&mut scheduler);
    assert!(overlay.fsm.is_in(Sheet::Fading));
    assert!(document.is_locked());

    scheduler.advance(300, |_, id| overlay.on_timer(id));
    assert!(overlay.fsm.is_in(Sheet::Hidden));
    assert!(!document.is_locked());

    let history = overlay.fsm.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2], (Sheet::Fading, CLOSE_ELAPSED, Sheet::Hidden));
}

#[test]
fn test_reopen_during_fade_keeps_single_lock() {
    let document = DocumentScroll::new();
    let mut scheduler = TimerScheduler::new();
    let mut overlay = Overlay::new();

    overlay.open(&document, &mut scheduler);
    overlay.close(&mut scheduler);
    scheduler.advance(100, |_, id| overlay.on_timer(id));
    overlay.open(&document, &mut scheduler);

    scheduler.advance(1_000, |_, id| overlay.on_timer(id));
    assert!(overlay.fsm.is_in(Sheet::Shown));
    assert_eq!(document.holder_count(), 1);
}

#[test]
fn test_overlay_and_typewriter_share_a_clock() {
    let document = DocumentScroll::new();
    let mut scheduler = TimerScheduler::new();
    let mut overlay = Overlay::new();
    let mut typewriter = Typewriter::new(vec!["HI".to_string()], TickDelays::default()).unwrap();

    typewriter.mount(&mut scheduler);
    overlay.open(&document, &mut scheduler);
    overlay.close(&mut scheduler);

    // Typewriter ticks at 150 and 300, the fade also ends at 300
    scheduler.advance(300, |scheduler, id| {
        if !typewriter.on_timer(id, scheduler) {
            overlay.on_timer(id);
        }
    });

    assert_eq!(typewriter.visible_text(), "HI");
    assert!(overlay.fsm.is_in(Sheet::Hidden));
    assert!(!document.is_locked());

    typewriter.unmount(&mut scheduler);
    assert_eq!(scheduler.pending_count(), 0);
}
