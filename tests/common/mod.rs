#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GENERATED: [&str; 4] = ["package.json", "server.js", "install.js", "README.md"];

pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("work");
        fs::create_dir_all(&work).expect("create work dir");
        Self { _tmp: tmp, work }
    }

    /// Binary with the work dir as cwd and no inherited log filter.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mcp-npm-kit");
        cmd.current_dir(&self.work).env_remove("MCP_NPM_KIT_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_profile(&self, body: &str) -> PathBuf {
        let path = self.work.join("profile.toml");
        fs::write(&path, body).expect("write profile");
        path
    }

    pub fn read(&self, name: &str) -> String {
        read_in(&self.work, name)
    }
}

pub fn read_in(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).expect("read generated file")
}

pub fn snapshot(dir: &Path) -> Vec<(String, Vec<u8>)> {
    GENERATED
        .iter()
        .map(|n| (n.to_string(), fs::read(dir.join(n)).expect("read generated file")))
        .collect()
}
