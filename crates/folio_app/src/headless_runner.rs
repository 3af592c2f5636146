//! Scenario runner that drives a portfolio without a rendering layer.

use anyhow::Result;
use folio_core::Event;

use crate::catalog::Catalog;
use crate::config::FolioConfig;
use crate::error::FolioError;
use crate::headless_assert::{
    evaluate_assert_modal, evaluate_assert_offset, evaluate_assert_scroll_locked,
    evaluate_assert_text, AssertionResult,
};
use crate::headless_report::{HeadlessReport, StepFailure};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::portfolio::Portfolio;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON against a freshly mounted portfolio.
pub fn run_scenario(input: &str, config: FolioConfig, catalog: Catalog) -> Result<RunOutcome> {
    let scenario = HeadlessScenario::from_json(input)?;
    let mut portfolio = Portfolio::new(config, catalog)?;
    Ok(run_loaded_scenario(&scenario, &mut portfolio))
}

/// Execute a pre-loaded scenario against an existing portfolio.
pub fn run_loaded_scenario(scenario: &HeadlessScenario, portfolio: &mut Portfolio) -> RunOutcome {
    let started_ms = portfolio.now_ms();

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let check = match step {
            ScenarioStep::Wheel { delta_y } => {
                dispatch(portfolio, Event::wheel(*delta_y));
                None
            }
            ScenarioStep::TouchStart { x } => {
                dispatch(portfolio, Event::touch_start(*x));
                None
            }
            ScenarioStep::TouchMove { x } => {
                dispatch(portfolio, Event::touch_move(*x));
                None
            }
            ScenarioStep::TouchEnd => {
                dispatch(portfolio, Event::touch_end());
                None
            }
            ScenarioStep::Resize { width, height } => {
                dispatch(portfolio, Event::resize(*width, *height));
                None
            }
            ScenarioStep::OpenProject { id } => match portfolio.open_project(*id) {
                Ok(()) => None,
                Err(err) => {
                    let code = match &err {
                        FolioError::NotMounted => "not_mounted",
                        _ => "unknown_project",
                    };
                    Some((
                        "open_project",
                        AssertionResult::Failed {
                            code: code.to_string(),
                            message: err.to_string(),
                        },
                    ))
                }
            },
            ScenarioStep::CloseProject => {
                portfolio.close_project();
                None
            }
            ScenarioStep::NextImage => {
                portfolio.next_image();
                None
            }
            ScenarioStep::PrevImage => {
                portfolio.prev_image();
                None
            }
            ScenarioStep::OpenMenu => {
                portfolio.open_menu();
                None
            }
            ScenarioStep::CloseMenu => {
                portfolio.close_menu();
                None
            }
            ScenarioStep::Wait { ms } => {
                portfolio.advance(*ms);
                None
            }
            ScenarioStep::Teardown => {
                portfolio.teardown();
                None
            }
            ScenarioStep::AssertOffset { value } => Some((
                "assert_offset",
                evaluate_assert_offset(*value, &portfolio.snapshot()),
            )),
            ScenarioStep::AssertText { value } => Some((
                "assert_text",
                evaluate_assert_text(value, &portfolio.snapshot()),
            )),
            ScenarioStep::AssertModal { open } => Some((
                "assert_modal",
                evaluate_assert_modal(*open, &portfolio.snapshot()),
            )),
            ScenarioStep::AssertScrollLocked { locked } => Some((
                "assert_scroll_locked",
                evaluate_assert_scroll_locked(*locked, &portfolio.snapshot()),
            )),
        };

        if let Some((assertion, AssertionResult::Failed { message, .. })) = check {
            tracing::debug!("scenario step {} failed: {}", step_index, message);
            let failure = StepFailure {
                step_index,
                assertion: assertion.to_string(),
                message,
            };
            let report =
                HeadlessReport::from_snapshot(started_ms, &portfolio.snapshot(), Some(failure));
            return RunOutcome::Failed { report };
        }
    }

    RunOutcome::Passed {
        report: HeadlessReport::from_snapshot(started_ms, &portfolio.snapshot(), None),
    }
}

fn dispatch(portfolio: &mut Portfolio, mut event: Event) {
    portfolio.handle_event(&mut event);
}
