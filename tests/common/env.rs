//! Test environment for running the `fleetcheck` binary in isolation.
//!
//! Provides `TestEnv` - a temp home directory, scrubbed `FLEETCHECK_*`
//! variables and no terminal on stdin, so commands never prompt.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a Fleetcheck CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}")))
            .collect()
    }

    /// The single JSON event on stdout
    pub fn json(&self) -> serde_json::Value {
        let mut events = self.json_events();
        assert_eq!(events.len(), 1, "expected one event, got:\n{}", self.stdout);
        events.remove(0)
    }
}

pub struct TestEnv {
    /// Temporary directory used as HOME
    pub home_dir: TempDir,
    base_url: String,
    fleetcheck_bin: PathBuf,
}

impl TestEnv {
    /// Environment pointed at `base_url` via `--api-url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home"),
            base_url: base_url.to_string(),
            fleetcheck_bin: PathBuf::from(env!("CARGO_BIN_EXE_fleetcheck")),
        }
    }

    /// Write a config file into the temp home and return its path.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let path = self.home_dir.path().join("fleetcheck.toml");
        std::fs::write(&path, toml).expect("Failed to write config");
        path
    }

    /// Run with `--api-url` and `--color never` prepended.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut full = vec!["--api-url", self.base_url.as_str(), "--color", "never"];
        full.extend_from_slice(args);
        self.run_raw(&full, &[])
    }

    /// Run exactly `args` with extra environment variables.
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.fleetcheck_bin);
        cmd.args(args)
            .stdin(Stdio::null())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("FLEETCHECK_API_URL")
            .env_remove("FLEETCHECK_TIMEOUT_SECS")
            .env_remove("FLEETCHECK_COLOR")
            .env_remove("FLEETCHECK_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute fleetcheck");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
