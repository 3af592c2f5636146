//! Folio Layout
//!
//! Stateful widgets of the portfolio page. Each widget owns plain state with
//! explicit transition methods; rendering reads the results (offset, image
//! index, visibility) and applies them as transforms.

pub mod overlay_state;
pub mod widgets;

pub use overlay_state::{ModalState, ProjectModal};
pub use widgets::carousel::Carousel;
pub use widgets::mobile_menu::{LinkKind, MenuLink, MenuState, MobileMenu};
pub use widgets::scroll::{DragSession, HorizontalScroll, ScrollConfig};
