use folio_app::headless_report::ReportStatus;
use folio_app::headless_runner::{run_scenario, RunOutcome};
use folio_app::{Catalog, FolioConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn run(input: &str) -> RunOutcome {
    init_tracing();
    run_scenario(input, FolioConfig::default(), Catalog::builtin().unwrap()).unwrap()
}

#[test]
fn scroll_and_typewriter_scenario_passes() {
    let outcome = run(
        r#"{
          "steps": [
            { "type": "wheel", "delta_y": 100.0 },
            { "type": "assert_offset", "value": 100.0 },
            { "type": "wheel", "delta_y": 10000.0 },
            { "type": "assert_offset", "value": 2020.0 },
            { "type": "wait", "ms": 300 },
            { "type": "assert_text", "value": "ST" },
            { "type": "touch_start", "x": 200.0 },
            { "type": "touch_move", "x": 400.0 },
            { "type": "touch_end" },
            { "type": "assert_offset", "value": 1720.0 }
          ]
        }"#,
    );

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Passed);
    assert_eq!(report.elapsed_ms, 300);
    assert_eq!(report.final_offset, 1720.0);
    assert_eq!(report.final_text, "ST");
}

#[test]
fn modal_scenario_holds_lock_until_fade_ends() {
    let outcome = run(
        r#"{
          "steps": [
            { "type": "open_project", "id": 4 },
            { "type": "assert_modal", "open": true },
            { "type": "assert_scroll_locked", "locked": true },
            { "type": "wheel", "delta_y": 500.0 },
            { "type": "assert_offset", "value": 0.0 },
            { "type": "next_image" },
            { "type": "close_project" },
            { "type": "assert_modal", "open": true },
            { "type": "assert_scroll_locked", "locked": true },
            { "type": "wait", "ms": 300 },
            { "type": "assert_modal", "open": false },
            { "type": "assert_scroll_locked", "locked": false },
            { "type": "wheel", "delta_y": 500.0 },
            { "type": "assert_offset", "value": 500.0 }
          ]
        }"#,
    );

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn failed_assertion_reports_step() {
    let outcome = run(
        r#"{
          "steps": [
            { "type": "wheel", "delta_y": 50.0 },
            { "type": "assert_offset", "value": 60.0 }
          ]
        }"#,
    );

    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.failed_step_index(), Some(1));
    assert_eq!(report.assertion(), Some("assert_offset"));
    assert_eq!(report.final_offset, 50.0);
}

#[test]
fn unknown_project_fails_run() {
    let outcome = run(r#"{ "steps": [ { "type": "open_project", "id": 42 } ] }"#);
    let report = outcome.report();
    assert_eq!(report.failed_step_index(), Some(0));
    assert_eq!(report.assertion(), Some("open_project"));
}

#[test]
fn open_project_after_teardown_fails_run() {
    let outcome = run(
        r#"{
          "steps": [
            { "type": "teardown" },
            { "type": "open_project", "id": 1 }
          ]
        }"#,
    );

    let report = outcome.report();
    assert!(outcome.is_failed());
    assert_eq!(report.failed_step_index(), Some(1));
    assert_eq!(report.message(), Some("Portfolio is not mounted"));
}

#[test]
fn teardown_freezes_heading() {
    let outcome = run(
        r#"{
          "steps": [
            { "type": "wait", "ms": 150 },
            { "type": "teardown" },
            { "type": "wait", "ms": 5000 },
            { "type": "assert_text", "value": "S" },
            { "type": "assert_scroll_locked", "locked": false }
          ]
        }"#,
    );

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn malformed_scenario_is_an_error() {
    init_tracing();
    let result = run_scenario(
        r#"{ "steps": [ { "type": "fly" } ] }"#,
        FolioConfig::default(),
        Catalog::builtin().unwrap(),
    );
    assert!(result.is_err());
}

#[test]
fn report_serializes_as_json() {
    let outcome = run(r#"{ "steps": [] }"#);
    let mut buffer = Vec::new();
    outcome.report().write_to_writer(&mut buffer).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["status"], "passed");
    assert_eq!(value["final_text"], "");
}
