//! End-to-end tests for the manifest binary

use assert_cmd::Command;
use manifest_test_utils::TestProject;
use predicates::prelude::*;
use serde_json::json;

fn manifest_cmd() -> Command {
    Command::cargo_bin("manifest").unwrap()
}

fn project_with_drift() -> TestProject {
    let project = TestProject::new();
    project.write_template(&json!({
        "id": "${{TEAMS_APP_ID}}",
        "name": {"short": "app-${{ENV_NAME}}"}
    }));
    project.write_deployed(&json!({
        "id": "11111111",
        "name": {"short": "app-dev"}
    }));
    project.write_env("dev", "TEAMS_APP_ID=00000000\n");
    project
}

#[test]
fn test_sync_updates_environment() {
    let project = project_with_drift();

    manifest_cmd()
        .args(["sync", "-e", "dev", "--deployed"])
        .arg(project.deployed_path())
        .arg("--project")
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("TEAMS_APP_ID = 11111111"));

    project.assert_env_contains("dev", "TEAMS_APP_ID=11111111");
    project.assert_env_contains("dev", "ENV_NAME=dev");
}

#[test]
fn test_sync_dry_run_does_not_write() {
    let project = project_with_drift();

    manifest_cmd()
        .args(["sync", "-e", "dev", "--dry-run", "--deployed"])
        .arg(project.deployed_path())
        .arg("--project")
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update"));

    project.assert_env_contains("dev", "TEAMS_APP_ID=00000000");
}

#[test]
fn test_sync_json_output() {
    let project = project_with_drift();

    let output = manifest_cmd()
        .args(["sync", "-e", "dev", "--json", "--deployed"])
        .arg(project.deployed_path())
        .arg("--project")
        .arg(project.root())
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["updated"]["TEAMS_APP_ID"], "11111111");
    assert_eq!(parsed["updated"]["ENV_NAME"], "dev");
}

#[test]
fn test_sync_missing_deployed_file_fails() {
    let project = TestProject::new();
    project.write_template(&json!({"id": "${{X}}"}));

    manifest_cmd()
        .args(["sync", "-e", "dev", "--deployed", "missing.json"])
        .arg("--project")
        .arg(project.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deployed manifest not found"));
}

#[test]
fn test_render_with_environment_values() {
    let project = TestProject::new();
    project.write_template(&json!({"id": "${{APP_ID}}"}));
    project.write_env("dev", "APP_ID=42\n");

    manifest_cmd()
        .args(["render", "-e", "dev"])
        .arg("--project")
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"42\""));
}

#[test]
fn test_render_strict_fails_on_unresolved() {
    let project = TestProject::new();
    project.write_template(&json!({"id": "${{NEVER_SET}}"}));

    manifest_cmd()
        .args(["render", "-e", "dev", "--strict"])
        .arg("--project")
        .arg(project.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEVER_SET"));
}

#[test]
fn test_env_list_get_set_round_trip() {
    let project = TestProject::new();

    manifest_cmd()
        .args(["env", "set", "-e", "dev", "BOT_ID", "b-1"])
        .arg("--project")
        .arg(project.root())
        .assert()
        .success();

    manifest_cmd()
        .args(["env", "get", "-e", "dev", "BOT_ID"])
        .arg("--project")
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("b-1"));

    manifest_cmd()
        .args(["env", "list", "--json"])
        .arg("--project")
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"));
}

#[test]
fn test_env_get_missing_key_fails() {
    let project = TestProject::new();
    project.write_env("dev", "A=1\n");

    manifest_cmd()
        .args(["env", "get", "-e", "dev", "MISSING"])
        .arg("--project")
        .arg(project.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
