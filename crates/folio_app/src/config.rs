//! Folio configuration file handling
//!
//! Every field has a default, so an empty `folio.toml` reproduces the
//! reference page.
//!
//! ```toml
//! [typewriter]
//! roles = ["STUDENT", "RESEARCHER", "DESIGNER"]
//! typing_delay_ms = 150
//! pause_delay_ms = 200
//!
//! [scroll]
//! standard_item_width = 400.0
//! compact_item_width = 300.0
//! edge_margin = 100.0
//! drag_amplification = 1.5
//! compact_breakpoint = 768.0
//!
//! [modal]
//! close_delay_ms = 300
//! ```

use anyhow::{Context, Result};
use folio_animation::TickDelays;
use folio_core::{CoreError, Viewport};
use folio_layout::{LinkKind, MenuLink, ScrollConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FolioError;

/// Top-level configuration (folio.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Optional replacement for the built-in project catalog
    pub catalog: Option<PathBuf>,
    pub typewriter: TypewriterConfig,
    pub scroll: ScrollConfig,
    pub modal: ModalConfig,
    /// Initial viewport for headless runs
    pub viewport: Viewport,
    pub profile: ProfileConfig,
}

/// Typewriter roles and timing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub roles: Vec<String>,
    pub typing_delay_ms: u64,
    pub pause_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        let delays = TickDelays::default();
        Self {
            roles: vec![
                "STUDENT".to_string(),
                "RESEARCHER".to_string(),
                "DESIGNER".to_string(),
            ],
            typing_delay_ms: delays.typing_ms,
            pause_delay_ms: delays.pause_ms,
        }
    }
}

impl TypewriterConfig {
    pub fn delays(&self) -> TickDelays {
        TickDelays {
            typing_ms: self.typing_delay_ms,
            pause_ms: self.pause_delay_ms,
        }
    }
}

/// Details modal timing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Fade-out duration before the project is cleared
    pub close_delay_ms: u64,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 300,
        }
    }
}

/// Contact links shown in the header and the mobile menu
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub resume: String,
    pub email: String,
    pub github: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            resume: "/resume.pdf".to_string(),
            email: "is2587@nyu.edu".to_string(),
            github: "https://github.com/IzahSohail".to_string(),
        }
    }
}

impl ProfileConfig {
    /// Mobile menu entries in display order
    pub fn menu_links(&self) -> Vec<MenuLink> {
        vec![
            MenuLink::new("Download Resume", &self.resume, LinkKind::Download),
            MenuLink::new("Email Me", format!("mailto:{}", self.email), LinkKind::Mail),
            MenuLink::new("GitHub", &self.github, LinkKind::External),
        ]
    }
}

impl FolioConfig {
    /// Load configuration from a file, or `folio.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("folio.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        if let Some(base) = config_path.parent() {
            config.resolve_paths(base);
        }

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

        Ok(config)
    }

    /// Make a relative catalog path relative to `base` (the config file's directory)
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(catalog) = self.catalog.as_mut() {
            if catalog.is_relative() {
                *catalog = base.join(&*catalog);
            }
        }
    }

    pub fn from_toml_str(input: &str) -> std::result::Result<Self, FolioError> {
        Ok(toml::from_str(input)?)
    }

    /// Check every value the controllers would reject at construction
    pub fn validate(&self) -> std::result::Result<(), FolioError> {
        let roles = &self.typewriter.roles;
        if roles.is_empty() {
            return Err(CoreError::EmptyRoleList.into());
        }
        if let Some(index) = roles.iter().position(|r| r.is_empty()) {
            return Err(CoreError::EmptyRole { index }.into());
        }
        self.typewriter.delays().validate()?;
        self.scroll.validate()?;
        if self.modal.close_delay_ms == 0 {
            return Err(CoreError::InvalidDelay {
                name: "close_delay_ms",
                value: 0,
            }
            .into());
        }
        if !self.viewport.is_valid() {
            return Err(FolioError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
