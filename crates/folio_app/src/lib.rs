//! Folio Portfolio Shell
//!
//! Composes the page controllers into a mounted [`Portfolio`]: the project
//! scroller, the typewriter heading, the details modal and the mobile menu,
//! all driven by one timer scheduler.
//!
//! # Example
//!
//! ```rust
//! use folio_app::prelude::*;
//!
//! let mut page = Portfolio::new(FolioConfig::default(), Catalog::builtin()?)?;
//!
//! page.handle_event(&mut Event::wheel(120.0));
//! page.advance(150);
//!
//! let snapshot = page.snapshot();
//! assert_eq!(snapshot.offset, 120.0);
//! assert_eq!(snapshot.visible_text, "S");
//! # Ok::<(), folio_app::FolioError>(())
//! ```

pub mod catalog;
pub mod config;
mod error;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_scenario;
pub mod portfolio;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, Project};
pub use config::FolioConfig;
pub use error::{FolioError, Result};
pub use portfolio::{Portfolio, PortfolioSnapshot};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::catalog::{Catalog, Project};
    pub use crate::config::FolioConfig;
    pub use crate::error::{FolioError, Result};
    pub use crate::portfolio::{Portfolio, PortfolioSnapshot};

    // Core types
    pub use folio_core::{DeviceClass, Event, Viewport};
}
