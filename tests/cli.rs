use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn zero_args_generates_into_cwd() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mcp-npm-kit")
        .current_dir(dir.path())
        .env_remove("MCP_NPM_KIT_LOG")
        .assert()
        .success()
        .stdout(contains("✅ Created package.json"))
        .stdout(contains("npm install -g cursor-automation-builder-mcp"));
    assert!(dir.path().join("server.js").is_file());
}

#[test]
fn mcp_config_prints_command_snippet() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mcp-npm-kit")
        .current_dir(dir.path())
        .arg("mcp-config")
        .assert()
        .success()
        .stdout(contains("\"command\": \"cursor-automation-builder-mcp\""));
}

#[test]
fn profile_prints_toml_sections() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mcp-npm-kit")
        .current_dir(dir.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(contains("[package]"))
        .stdout(contains("[server]"));
}
