use assert_cmd::assert::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::Output;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn jiraattach() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("jiraattach"));
    cmd.env_remove("JIRAATTACH_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, jira_url: &str) -> PathBuf {
    let config_path = dir.join("config.json");
    std::fs::write(
        &config_path,
        json!({ "jira_url": jira_url, "auth": "bob:pw" }).to_string(),
    )
    .unwrap();
    config_path
}

// Runs the binary off the async runtime so the mock server keeps serving.
async fn run_binary(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || jiraattach().args(args).output().unwrap())
        .await
        .unwrap()
}

async fn mount_jira(server: &MockServer, comment_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/rest/api/2/issue/PROJ-12/attachments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "filename": "report.txt",
            "content": format!("{}/secure/attachment/1/report.txt", server.uri())
        }])))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/api/2/issue/PROJ-12/comment"))
        .respond_with(ResponseTemplate::new(201))
        .expect(comment_calls)
        .mount(server)
        .await;
}

#[test]
fn missing_positionals_print_usage_and_fail() {
    jiraattach()
        .arg("PROJ-12")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_successfully() {
    jiraattach()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("jira_url"));
}

#[test]
fn missing_config_fails_with_read_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("absent.json");
    let file = dir.path().join("report.txt");
    std::fs::write(&file, "x").unwrap();

    jiraattach()
        .arg(format!("-config={}", config.display()))
        .arg("PROJ-12")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unable to read config file"));
}

#[tokio::test]
async fn successful_run_is_silent() {
    let server = MockServer::start().await;
    mount_jira(&server, 1).await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server.uri());
    let file = dir.path().join("report.txt");
    std::fs::write(&file, "quarterly numbers\n").unwrap();

    let output = run_binary(vec![
        format!("-config={}", config.display()),
        "PROJ-12".into(),
        file.display().to_string(),
    ])
    .await;

    output.assert().success().stderr(predicate::str::is_empty());
}

#[tokio::test]
async fn no_comment_flag_skips_comment() {
    let server = MockServer::start().await;
    mount_jira(&server, 0).await;
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &server.uri());
    let file = dir.path().join("report.txt");
    std::fs::write(&file, "quarterly numbers\n").unwrap();

    let output = run_binary(vec![
        format!("-config={}", config.display()),
        "-no-comment".into(),
        "PROJ-12".into(),
        file.display().to_string(),
    ])
    .await;

    output.assert().success().stderr(predicate::str::is_empty());
}
