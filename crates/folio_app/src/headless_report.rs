//! JSON report of a headless scenario run.
//!
//! The report is flat on the wire:
//!
//! ```json
//! { "status": "failed", "elapsed_ms": 450, "final_offset": 12.5,
//!   "final_text": "ST", "failed_step_index": 2,
//!   "assertion": "assert_text", "message": "..." }
//! ```
//!
//! The failure fields are omitted when the run passed.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path};

use crate::portfolio::PortfolioSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// The step that stopped a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepFailure {
    #[serde(rename = "failed_step_index")]
    pub step_index: usize,
    /// Step type that failed, e.g. `assert_offset`
    pub assertion: String,
    pub message: String,
}

/// Outcome of a run plus the page state it ended in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub elapsed_ms: u64,
    pub final_offset: f32,
    pub final_text: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub failure: Option<StepFailure>,
}

impl HeadlessReport {
    /// Report for a run that started at `started_ms` and ended at `snapshot`
    pub fn from_snapshot(
        started_ms: u64,
        snapshot: &PortfolioSnapshot,
        failure: Option<StepFailure>,
    ) -> Self {
        let status = if failure.is_some() {
            ReportStatus::Failed
        } else {
            ReportStatus::Passed
        };
        Self {
            status,
            elapsed_ms: snapshot.now_ms.saturating_sub(started_ms),
            final_offset: snapshot.offset,
            final_text: snapshot.visible_text.clone(),
            failure,
        }
    }

    pub fn failed_step_index(&self) -> Option<usize> {
        self.failure.as_ref().map(|f| f.step_index)
    }

    pub fn assertion(&self) -> Option<&str> {
        self.failure.as_ref().map(|f| f.assertion.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.failure.as_ref().map(|f| f.message.as_str())
    }

    /// Write pretty JSON to a path inside the working directory
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        ensure_contained(path)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Reports may only land below the working directory
fn ensure_contained(path: &Path) -> Result<()> {
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                bail!("report path {} must be relative", path.display())
            }
            Component::ParentDir => {
                bail!("report path {} must not contain '..'", path.display())
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(now_ms: u64, offset: f32, text: &str) -> PortfolioSnapshot {
        PortfolioSnapshot {
            now_ms,
            offset,
            max_offset: 2020.0,
            transform_x: -offset,
            visible_text: text.to_string(),
            role_index: 0,
            deleting: false,
            modal_project: None,
            modal_visible: false,
            image_index: 0,
            menu_open: false,
            scroll_locked: false,
        }
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::from_snapshot(0, &snapshot(0, 0.0, ""), None);
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("out/../../report.json")).is_err());
    }

    #[test]
    fn test_failed_report_is_flat_json() {
        let failure = StepFailure {
            step_index: 2,
            assertion: "assert_text".into(),
            message: "nope".into(),
        };
        let report = HeadlessReport::from_snapshot(100, &snapshot(550, 12.5, "ST"), Some(failure));
        assert_eq!(report.status, ReportStatus::Failed);
        assert_eq!(report.elapsed_ms, 450);

        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["failed_step_index"], 2);
        assert_eq!(value["assertion"], "assert_text");
        assert_eq!(value["final_text"], "ST");
    }

    #[test]
    fn test_passed_report_omits_failure_fields() {
        let report = HeadlessReport::from_snapshot(0, &snapshot(300, 40.0, "S"), None);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "passed");
        assert!(value.get("failed_step_index").is_none());
        assert!(value.get("message").is_none());
    }
}
