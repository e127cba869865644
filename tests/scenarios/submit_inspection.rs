//! Scenario: Driver submits a daily inspection
//!
//! Journey: A driver records the odometer, marks a failed item, adds a note
//! and submits; the record then shows up in the vehicle's history.
//!
//! Success Criteria:
//! - The request carries all five checklist items and a trimmed note
//! - Missing required fields never reach the backend
//! - Backend validation details are listed one per line

use crate::common::*;

/// SCENARIO: Complete submission, then the record appears in history
#[test]
fn scenario_submit_then_find_in_history() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&[
        "--json",
        "submit",
        "--vehicle",
        "V1",
        "--odometer",
        "45210.5",
        "--fail",
        "brakes",
        "--note",
        "  pads worn  ",
    ]);
    assert!(result.success, "submit failed:\n{}", result.combined_output());

    let event = result.json();
    assert_eq!(event["event"], "submitted");
    assert_eq!(event["check"]["vehicleId"], "V1");
    assert_eq!(event["check"]["hasIssue"], true);

    let posts = backend.requests_with_method("POST");
    assert_eq!(posts.len(), 1);
    let body = posts[0].json();
    assert_eq!(body["vehicleId"], "V1");
    assert_eq!(body["odometerKm"], 45210.5);
    assert_eq!(body["note"], "pads worn");
    let items = body["items"].as_array().unwrap();
    let keys: Vec<&str> = items.iter().map(|i| i["key"].as_str().unwrap()).collect();
    assert_eq!(keys, ["TYRES", "BRAKES", "LIGHTS", "OIL", "COOLANT"]);
    assert_eq!(items[1]["status"], "FAIL");
    assert!(items.iter().filter(|i| i["status"] == "OK").count() == 4);

    let result = env.run(&["--json", "history", "--vehicle", "V1", "--issues", "with"]);
    assert!(result.success, "{}", result.combined_output());
    let event = result.json();
    assert_eq!(event["checks"].as_array().unwrap().len(), 1);
    assert_eq!(event["checks"][0]["note"], "pads worn");

    let result = env.run(&["--json", "history", "--vehicle", "V1", "--issues", "without"]);
    assert!(result.json()["checks"].as_array().unwrap().is_empty());
}

/// SCENARIO: Blank note is left out of the request entirely
#[test]
fn scenario_blank_note_is_omitted() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&[
        "submit",
        "--vehicle",
        "V2",
        "--odometer",
        "0",
        "--note",
        "   ",
    ]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Inspection submitted successfully!"));

    let body = backend.requests_with_method("POST")[0].json();
    assert!(body.get("note").is_none(), "note should be omitted: {body}");
    assert_eq!(body["odometerKm"], 0.0);
}

/// SCENARIO: Without a terminal, missing fields block the submit
#[test]
fn scenario_missing_odometer_sends_nothing() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&["submit", "--vehicle", "V1"]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("Please enter an odometer reading."),
        "stderr:\n{}",
        result.stderr
    );
    assert!(backend.requests_with_method("POST").is_empty());
}

/// SCENARIO: A lone decimal point is not a reading
#[test]
fn scenario_lone_decimal_point_is_missing() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&["--json", "submit", "--vehicle", "V1", "--odometer", "."]);

    assert!(!result.success);
    let event = result.json();
    assert_eq!(event["event"], "blocked");
    assert_eq!(event["missing"], serde_json::json!(["Odometer (km)"]));
    assert!(backend.requests_with_method("POST").is_empty());
}

/// SCENARIO: Mask rejects a reading with a thousands separator
#[test]
fn scenario_masked_odometer_is_rejected_locally() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&["submit", "--vehicle", "V1", "--odometer", "12,000"]);

    assert!(!result.success);
    assert!(result.stderr.contains("Invalid odometer reading '12,000'"));
    assert!(backend.requests().is_empty());
}

/// SCENARIO: Backend rejects the check with field details
#[test]
fn scenario_validation_details_are_listed() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&["submit", "--vehicle", "NOPE", "--odometer", "10"]);

    assert!(!result.success);
    assert!(result.stderr.contains("Validation errors:"), "{}", result.stderr);
    assert!(result.stderr.contains("vehicleId: Unknown vehicle"));
    assert!(result.stderr.contains("Validation failed: 1 error(s)"));

    let result = env.run(&["--json", "submit", "--vehicle", "NOPE", "--odometer", "10"]);
    let event = result.json();
    assert_eq!(event["event"], "rejected");
    assert_eq!(event["errors"], serde_json::json!(["vehicleId: Unknown vehicle"]));
}

/// SCENARIO: Backend unreachable
#[test]
fn scenario_backend_down_shows_generic_failure() {
    let env = TestEnv::new(&unreachable_base_url());

    let result = env.run(&["submit", "--vehicle", "V1", "--odometer", "10"]);

    assert!(!result.success);
    assert!(result
        .stderr
        .contains("Failed to submit inspection. Please try again."));
    assert!(result.stderr.contains("Failed to submit check. Please try again."));
}

/// SCENARIO: Error response without details is a generic failure, not a
/// validation failure
#[test]
fn scenario_server_error_without_details_is_generic() {
    let backend = StubBackend::start();
    backend.fail_with(500, r#"{"error":{"code":"INTERNAL","message":"boom"}}"#);
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&["--json", "submit", "--vehicle", "V1", "--odometer", "10"]);

    assert!(!result.success);
    let event = result.json();
    assert_eq!(event["event"], "failed");
    assert_eq!(event["error"], "Failed to submit check. Please try again.");
}

/// SCENARIO: An empty details list is still a validation rejection
#[test]
fn scenario_empty_validation_details_reject_with_zero_errors() {
    let backend = StubBackend::start();
    backend.fail_with(400, r#"{"error":{"message":"Invalid","details":[]}}"#);
    let env = TestEnv::new(backend.base_url());

    let result = env.run(&["submit", "--vehicle", "V1", "--odometer", "10"]);
    assert!(!result.success);
    assert!(result.stderr.contains("Validation failed: 0 error(s)"), "{}", result.stderr);
    assert!(!result.stderr.contains("Failed to submit check"));

    let result = env.run(&["--json", "submit", "--vehicle", "V1", "--odometer", "10"]);
    let event = result.json();
    assert_eq!(event["event"], "rejected");
    assert_eq!(event["errors"], serde_json::json!([]));
}
