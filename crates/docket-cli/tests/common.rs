//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    workspace: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let workspace = temp_dir.path().join(".docket");

        Self {
            _temp_dir: temp_dir,
            workspace,
        }
    }

    pub fn workspace(&self) -> &PathBuf {
        &self.workspace
    }

    pub fn config_path(&self) -> PathBuf {
        self.workspace.join("config.toml")
    }

    pub fn store_path(&self) -> PathBuf {
        self.workspace.join("docket.db")
    }

    pub fn sample_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("docket-ingest/tests/samples")
            .join(name)
    }

    /// `docket` bound to this fixture's workspace, without color or ambient log filters
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("docket");
        cmd.env("DOCKET_PATH", &self.workspace)
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }

    pub fn ingest_samples(&self, names: &[&str]) {
        let mut cmd = self.command();
        cmd.arg("ingest");
        for name in names {
            cmd.arg(Self::sample_path(name));
        }
        cmd.assert().success();
    }
}

pub const ALL_SAMPLES: &[&str] = &[
    "container_instance_state_change.json",
    "service_action_error.json",
    "service_action_steady_state.json",
    "deployment_state_change.json",
    "task_state_change.json",
    "cloudtrail_api_call.json",
    "unknown_event.json",
];
