//! Input event model
//!
//! Raw pointer, touch and viewport events as delivered by the rendering layer.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Mouse wheel / trackpad scroll
    pub const WHEEL: EventType = 1;
    pub const TOUCH_START: EventType = 2;
    pub const TOUCH_MOVE: EventType = 3;
    pub const TOUCH_END: EventType = 4;
    pub const RESIZE: EventType = 10;

    // Overlay lifecycle events
    pub const OPEN: EventType = 20;
    pub const CLOSE: EventType = 21;
    /// Close transition finished (fade-out elapsed)
    pub const CLOSE_ELAPSED: EventType = 22;
}

/// An input event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub data: EventData,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Wheel {
        delta_y: f32,
    },
    Touch {
        /// Horizontal position of the first touch point
        x: f32,
    },
    Resize {
        width: f32,
        height: f32,
    },
    None,
}

impl Event {
    fn new(event_type: EventType, data: EventData) -> Self {
        Self {
            event_type,
            data,
            propagation_stopped: false,
        }
    }

    pub fn wheel(delta_y: f32) -> Self {
        Self::new(event_types::WHEEL, EventData::Wheel { delta_y })
    }

    pub fn touch_start(x: f32) -> Self {
        Self::new(event_types::TOUCH_START, EventData::Touch { x })
    }

    pub fn touch_move(x: f32) -> Self {
        Self::new(event_types::TOUCH_MOVE, EventData::Touch { x })
    }

    pub fn touch_end() -> Self {
        Self::new(event_types::TOUCH_END, EventData::None)
    }

    pub fn resize(width: f32, height: f32) -> Self {
        Self::new(event_types::RESIZE, EventData::Resize { width, height })
    }

    /// Mark the event as consumed so native handling (page scroll) is skipped
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_pair_type_and_data() {
        let wheel = Event::wheel(12.0);
        assert_eq!(wheel.event_type, event_types::WHEEL);
        assert_eq!(wheel.data, EventData::Wheel { delta_y: 12.0 });

        let end = Event::touch_end();
        assert_eq!(end.event_type, event_types::TOUCH_END);
        assert_eq!(end.data, EventData::None);
    }

    #[test]
    fn test_stop_propagation() {
        let mut event = Event::wheel(1.0);
        assert!(!event.propagation_stopped);
        event.stop_propagation();
        assert!(event.propagation_stopped);
    }
}
