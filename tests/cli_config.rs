//! Integration tests for configuration errors surfaced by the CLI
//!
//! Every scenario here fails before any AWS request is made.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_webdeploy")
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env("AWS_CONFIG_FILE", dir.join("aws-config"))
        .env("AWS_SHARED_CREDENTIALS_FILE", dir.join("aws-credentials"))
        .env_remove("AWS_PROFILE")
        .env_remove("WEBDEPLOY_STAGE")
        .env_remove("WEBDEPLOY_REGION")
        .env_remove("WEBDEPLOY_PROFILE")
        .env_remove("WEBDEPLOY_STACK_NAME")
        .env_remove("WEBDEPLOY_S3_LOCAL_PATH")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn explicit_config_file_must_exist() {
    let dir = tempdir().unwrap();

    let output = run_in(
        dir.path(),
        &["--config", "missing.toml", "--region", "us-east-1", "bucketInfo"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load config from missing.toml"),
        "unexpected stderr:\n{}",
        stderr
    );
}

#[test]
fn sync_without_local_path_fails_before_querying_stack() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("webdeploy.toml"),
        "[service]\nname = \"webapp\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["--region", "us-east-1", "syncToS3"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("custom.s3_local_path is not set"),
        "unexpected stderr:\n{}",
        stderr
    );
}

#[test]
fn stack_name_requires_service_name() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &["--region", "us-east-1", "domainInfo"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("service.name is not set"),
        "unexpected stderr:\n{}",
        stderr
    );
}

#[test]
fn unknown_config_keys_are_reported() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("webdeploy.toml"),
        "[provider]\nregin = \"us-east-1\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["--region", "us-east-1", "bucketInfo"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown config key 'regin'"),
        "unexpected stderr:\n{}",
        stderr
    );
    assert!(stderr.contains("did you mean 'region'?"));
}

#[test]
fn broken_project_config_is_an_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("webdeploy.toml"), "[provider\n").unwrap();

    let output = run_in(dir.path(), &["--region", "us-east-1", "bucketInfo"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid configuration"),
        "unexpected stderr:\n{}",
        stderr
    );
}
