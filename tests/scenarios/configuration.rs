//! Scenario: Pointing the client at a backend
//!
//! Journey: An operator configures the backend URL through a config file,
//! the environment, or the command line.
//!
//! Success Criteria:
//! - `--api-url` beats `FLEETCHECK_API_URL`, which beats the config file
//! - Typos in the config file are reported with a suggestion

use crate::common::*;

/// SCENARIO: Config file supplies the backend URL
#[test]
fn scenario_config_file_base_url() {
    let backend = StubBackend::start();
    let env = TestEnv::new("http://unused.invalid/api");
    let config = env.write_config(&format!("[api]\nbase_url = \"{}\"\n", backend.base_url()));

    let result = env.run_raw(
        &["--config", config.to_str().unwrap(), "--json", "vehicles"],
        &[],
    );

    assert!(result.success, "{}", result.combined_output());
    let event = result.json();
    assert_eq!(event["count"], 2);
    assert_eq!(event["vehicles"][0]["registration"], "AB12 CDE");
}

/// SCENARIO: Environment beats config, flag beats environment
#[test]
fn scenario_url_precedence() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());
    let config = env.write_config("[api]\nbase_url = \"http://127.0.0.1:9/api\"\n");
    let config = config.to_str().unwrap();

    let result = env.run_raw(
        &["--config", config, "--json", "vehicles"],
        &[("FLEETCHECK_API_URL", backend.base_url())],
    );
    assert!(result.success, "{}", result.combined_output());

    let result = env.run_raw(
        &[
            "--config",
            config,
            "--api-url",
            backend.base_url(),
            "--json",
            "vehicles",
        ],
        &[("FLEETCHECK_API_URL", "http://127.0.0.1:9/api")],
    );
    assert!(result.success, "{}", result.combined_output());
}

/// SCENARIO: Unknown config key gets a "did you mean" warning
#[test]
fn scenario_config_typo_warning() {
    let backend = StubBackend::start();
    let env = TestEnv::new(backend.base_url());
    let config = env.write_config("[api]\ntimeout_sec = 5\n");

    let result = env.run_raw(
        &[
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            backend.base_url(),
            "--color",
            "never",
            "vehicles",
        ],
        &[],
    );

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("unknown config key 'timeout_sec'"), "{}", result.stderr);
    assert!(result.stderr.contains("did you mean 'timeout_secs'?"));
    assert!(result.stdout.contains("AB12 CDE - Ford Transit (2019)"));
}

/// SCENARIO: Missing explicit config file is an error
#[test]
fn scenario_missing_config_file() {
    let env = TestEnv::new("http://127.0.0.1:9/api");
    let missing = env.home_dir.path().join("nope.toml");

    let result = env.run_raw(&["--config", missing.to_str().unwrap(), "vehicles"], &[]);

    assert!(!result.success);
}
