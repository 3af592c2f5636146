//! Scenario definition for headless portfolio runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::error::FolioError;

/// Sequence of scripted interactions and checks.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> std::result::Result<Self, FolioError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// One scripted step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Wheel { delta_y: f32 },
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    Resize { width: f32, height: f32 },
    OpenProject { id: u32 },
    CloseProject,
    NextImage,
    PrevImage,
    OpenMenu,
    CloseMenu,
    Wait { ms: u64 },
    Teardown,
    AssertOffset { value: f32 },
    AssertText { value: String },
    AssertModal { open: bool },
    AssertScrollLocked { locked: bool },
}
