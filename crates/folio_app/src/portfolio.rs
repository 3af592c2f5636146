//! Portfolio page shell
//!
//! Owns every controller of the page and routes input and timers to them.
//! The scroller and the typewriter never talk to each other; the shell only
//! feeds the scroller the modal-open flag and the live viewport.

use folio_animation::{TimerScheduler, TypeMode, Typewriter};
use folio_core::events::event_types::{TOUCH_END, TOUCH_MOVE, TOUCH_START};
use folio_core::{DocumentScroll, Event, EventData, Viewport};
use folio_layout::{HorizontalScroll, MenuLink, MobileMenu, ProjectModal};
use serde::Serialize;

use crate::catalog::{Catalog, Project};
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};

/// Values the rendering layer reads after each event or tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSnapshot {
    pub now_ms: u64,
    pub offset: f32,
    pub max_offset: f32,
    pub transform_x: f32,
    pub visible_text: String,
    pub role_index: usize,
    pub deleting: bool,
    pub modal_project: Option<u32>,
    pub modal_visible: bool,
    pub image_index: usize,
    pub menu_open: bool,
    pub scroll_locked: bool,
}

/// The mounted portfolio page
#[derive(Debug)]
pub struct Portfolio {
    config: FolioConfig,
    catalog: Catalog,
    scheduler: TimerScheduler,
    document: DocumentScroll,
    scroll: HorizontalScroll,
    typewriter: Typewriter,
    modal: ProjectModal,
    menu: MobileMenu,
    mounted: bool,
}

impl Portfolio {
    /// Build and mount the page; the typewriter starts ticking immediately
    pub fn new(config: FolioConfig, catalog: Catalog) -> Result<Self> {
        config.validate()?;

        let mut scheduler = TimerScheduler::new();
        let document = DocumentScroll::new();
        let scroll = HorizontalScroll::new(config.scroll, catalog.len(), config.viewport)?;
        let mut typewriter =
            Typewriter::new(config.typewriter.roles.clone(), config.typewriter.delays())?;
        let modal = ProjectModal::new(document.clone(), config.modal.close_delay_ms);
        let menu = MobileMenu::new(config.profile.menu_links());

        typewriter.mount(&mut scheduler);
        tracing::debug!(
            "portfolio mounted: {} projects, viewport {}x{}",
            catalog.len(),
            config.viewport.width,
            config.viewport.height
        );

        Ok(Self {
            config,
            catalog,
            scheduler,
            document,
            scroll,
            typewriter,
            modal,
            menu,
            mounted: true,
        })
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scroll(&self) -> &HorizontalScroll {
        &self.scroll
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    pub fn modal(&self) -> &ProjectModal {
        &self.modal
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn document(&self) -> &DocumentScroll {
        &self.document
    }

    pub fn scheduler(&self) -> &TimerScheduler {
        &self.scheduler
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Project currently shown in the details modal
    pub fn selected_project(&self) -> Option<&Project> {
        self.modal.project_id().and_then(|id| self.catalog.get(id))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route an input event. Ignored once the page is torn down.
    ///
    /// Wheel events are always consumed: the strip either scrolls or, while
    /// the modal covers it, the page behind must not scroll either.
    pub fn handle_event(&mut self, event: &mut Event) {
        if !self.mounted {
            return;
        }
        let modal_open = self.modal.is_open();

        match (event.event_type, &event.data) {
            (_, EventData::Wheel { delta_y }) => {
                self.scroll.on_wheel(*delta_y, modal_open);
                event.stop_propagation();
            }
            (TOUCH_START, EventData::Touch { x }) => self.scroll.on_touch_start(*x, modal_open),
            (TOUCH_MOVE, EventData::Touch { x }) => self.scroll.on_touch_move(*x, modal_open),
            (TOUCH_END, _) => self.scroll.on_touch_end(),
            (_, EventData::Resize { width, height }) => {
                self.scroll.set_viewport(Viewport::new(*width, *height));
            }
            (event_type, data) => {
                tracing::trace!("ignoring event {} {:?}", event_type, data);
            }
        }
    }

    /// Open the details modal for a project
    pub fn open_project(&mut self, id: u32) -> Result<()> {
        if !self.mounted {
            return Err(FolioError::NotMounted);
        }
        let Some(project) = self.catalog.get(id) else {
            tracing::warn!("open_project: unknown project id {}", id);
            return Err(FolioError::UnknownProject(id));
        };
        // The modal takes over input; a gesture in flight ends here
        self.scroll.cancel_drag();
        self.modal.open(id, project.gallery(), &mut self.scheduler);
        Ok(())
    }

    /// Start closing the details modal
    pub fn close_project(&mut self) {
        if !self.mounted {
            return;
        }
        self.modal.request_close(&mut self.scheduler);
    }

    pub fn next_image(&mut self) {
        if self.mounted && self.modal.is_open() {
            self.modal.carousel_mut().next();
        }
    }

    pub fn prev_image(&mut self) {
        if self.mounted && self.modal.is_open() {
            self.modal.carousel_mut().prev();
        }
    }

    /// Jump to an indicator dot
    pub fn select_image(&mut self, index: usize) -> bool {
        self.mounted && self.modal.is_open() && self.modal.carousel_mut().go_to(index)
    }

    pub fn open_menu(&mut self) {
        if self.mounted {
            self.menu.open();
        }
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Follow a menu link, closing the menu
    pub fn activate_menu_link(&mut self, index: usize) -> Option<MenuLink> {
        if !self.mounted {
            return None;
        }
        self.menu.activate(index).cloned()
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advance the clock by `ms`, delivering every timer that falls due
    pub fn advance(&mut self, ms: u64) -> usize {
        let typewriter = &mut self.typewriter;
        let modal = &mut self.modal;
        let fired = self.scheduler.advance(ms, |scheduler, id| {
            if !typewriter.on_timer(id, scheduler) && !modal.on_timer(id) {
                tracing::warn!("timer {:?} fired with no owner", id);
            }
        });
        fired.len()
    }

    /// Current values for the rendering layer
    pub fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            now_ms: self.scheduler.now_ms(),
            offset: self.scroll.offset(),
            max_offset: self.scroll.max_offset(),
            transform_x: self.scroll.transform_x(),
            visible_text: self.typewriter.visible_text().to_string(),
            role_index: self.typewriter.role_index(),
            deleting: self.typewriter.mode() == TypeMode::Deleting,
            modal_project: self.modal.project_id(),
            modal_visible: self.modal.is_visible(),
            image_index: self.modal.carousel().index(),
            menu_open: self.menu.is_open(),
            scroll_locked: self.document.is_locked(),
        }
    }

    /// Unmount the page: stop the typewriter, drop the modal and its lock
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.typewriter.unmount(&mut self.scheduler);
        self.modal.teardown(&mut self.scheduler);
        self.scroll.cancel_drag();
        self.menu.close();
        tracing::debug!("portfolio unmounted");
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.teardown();
    }
}
