//! Full-screen navigation menu for compact devices

use folio_core::events::event_types::{CLOSE, OPEN};
use folio_core::{EventType, StateMachine, StateTransitions};
use serde::{Deserialize, Serialize};

/// Menu visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl StateTransitions for MenuState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (MenuState::Closed, OPEN) => Some(MenuState::Open),
            (MenuState::Open, CLOSE) => Some(MenuState::Closed),
            _ => None,
        }
    }
}

/// How the rendering layer should follow a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// File download (resume)
    Download,
    /// `mailto:` link
    Mail,
    /// Opens in a new tab
    External,
}

/// A navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
    pub kind: LinkKind,
}

impl MenuLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>, kind: LinkKind) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind,
        }
    }
}

/// Menu overlay with its links
#[derive(Debug, Clone)]
pub struct MobileMenu {
    fsm: StateMachine<MenuState>,
    links: Vec<MenuLink>,
}

impl MobileMenu {
    pub fn new(links: Vec<MenuLink>) -> Self {
        Self {
            fsm: StateMachine::default(),
            links,
        }
    }

    pub fn links(&self) -> &[MenuLink] {
        &self.links
    }

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(MenuState::Open)
    }

    pub fn open(&mut self) {
        self.fsm.send(OPEN);
    }

    pub fn close(&mut self) {
        self.fsm.send(CLOSE);
    }

    /// Follow a link; the menu closes behind it
    pub fn activate(&mut self, index: usize) -> Option<&MenuLink> {
        let link = self.links.get(index)?;
        self.fsm.send(CLOSE);
        tracing::debug!("menu link activated: {}", link.href);
        Some(link)
    }
}
