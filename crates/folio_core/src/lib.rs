//! Folio Core Runtime
//!
//! This crate provides the foundational primitives shared by the Folio
//! portfolio controllers:
//!
//! - **Input Events**: Wheel, touch and resize events with propagation control
//! - **State Transitions**: Enum-driven state machines for overlay lifecycles
//! - **Viewport**: Device classification (compact vs standard)
//! - **Scroll Lock**: Scoped capability for suppressing page scroll
//!
//! # Example
//!
//! ```rust
//! use folio_core::scroll_lock::DocumentScroll;
//!
//! let document = DocumentScroll::new();
//! {
//!     let _guard = document.lock();
//!     assert!(document.is_locked());
//! }
//! assert!(!document.is_locked());
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod scroll_lock;
pub mod viewport;

pub use error::{CoreError, Result};
pub use events::{Event, EventData, EventType};
pub use fsm::{StateMachine, StateTransitions};
pub use scroll_lock::{DocumentScroll, ScrollLockGuard};
pub use viewport::{DeviceClass, Viewport};
