//! Widgets

pub mod carousel;
pub mod mobile_menu;
pub mod scroll;
