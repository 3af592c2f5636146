//! Assertion helpers for headless scenario checks.

use crate::portfolio::PortfolioSnapshot;

/// Offsets within this distance compare equal
const OFFSET_TOLERANCE: f32 = 0.01;

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

pub fn evaluate_assert_offset(expected: f32, snapshot: &PortfolioSnapshot) -> AssertionResult {
    if (snapshot.offset - expected).abs() <= OFFSET_TOLERANCE {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "offset_mismatch".to_string(),
            message: format!(
                "expected offset {expected}, got {} (max {})",
                snapshot.offset, snapshot.max_offset
            ),
        }
    }
}

pub fn evaluate_assert_text(expected: &str, snapshot: &PortfolioSnapshot) -> AssertionResult {
    if snapshot.visible_text == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "text_mismatch".to_string(),
            message: format!(
                "expected text '{expected}', got '{}'",
                snapshot.visible_text
            ),
        }
    }
}

pub fn evaluate_assert_modal(open: bool, snapshot: &PortfolioSnapshot) -> AssertionResult {
    let actual = snapshot.modal_project.is_some();
    if actual == open {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "modal_mismatch".to_string(),
            message: format!("expected modal open={open}, got open={actual}"),
        }
    }
}

pub fn evaluate_assert_scroll_locked(
    locked: bool,
    snapshot: &PortfolioSnapshot,
) -> AssertionResult {
    if snapshot.scroll_locked == locked {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed {
            code: "scroll_lock_mismatch".to_string(),
            message: format!(
                "expected scroll locked={locked}, got locked={}",
                snapshot.scroll_locked
            ),
        }
    }
}
