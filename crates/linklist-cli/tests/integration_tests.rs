//! Integration tests for the `linklist` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
[[languages]]
id_lang = 1
iso_code = "en"

[[languages]]
id_lang = 2
iso_code = "fr"
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("linklist.toml"), CONFIG).unwrap();
        Self { dir }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("data/link_blocks.json")
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("linklist").unwrap();
        cmd.current_dir(self.dir.path())
            .env("LINKLIST__STORAGE__DATA_FILE", self.data_file())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.path().join("linklist.toml"));
        cmd
    }
}

fn valid_block() -> &'static str {
    r#"{
        "link_block": {
            "block_name": { "1": "Shop", "2": "Boutique" },
            "id_hook": 1,
            "cms": [1, 2],
            "product": ["new-products"],
            "static": ["contact"]
        }
    }"#
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

fn save(ws: &Workspace, file: &Path) -> u64 {
    let out = ws
        .cmd()
        .args(["--output-format", "json", "save"])
        .arg(file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    stdout_json(&out)["id_link_block"].as_u64().unwrap()
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("linklist").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("link blocks"))
        .stdout(predicate::str::contains("save"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("linklist").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_save_then_show_round_trip() {
    let ws = Workspace::new();
    let file = ws.write("block.json", valid_block());

    let id = save(&ws, &file);
    assert_eq!(id, 1);
    assert!(ws.data_file().exists());

    let out = ws
        .cmd()
        .args(["--output-format", "json", "show", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        stdout_json(&out),
        serde_json::json!({
            "link_block": {
                "id_link_block": 1,
                "block_name": { "1": "Shop", "2": "Boutique" },
                "id_hook": 1,
                "cms": [1, 2],
                "product": ["new-products"],
                "static": ["contact"]
            }
        })
    );
}

#[test]
fn test_save_reads_stdin() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["--output-format", "plain", "save"])
        .write_stdin(valid_block())
        .assert()
        .success()
        .stdout(predicate::str::contains("Link block #1 created"));
}

#[test]
fn test_update_keeps_id() {
    let ws = Workspace::new();
    let file = ws.write("block.json", valid_block());
    save(&ws, &file);

    let update = ws.write(
        "update.json",
        r#"{"link_block": {"block_name": {"1": "Info", "2": "Infos"}, "id_hook": 2}}"#,
    );
    ws.cmd()
        .args(["--output-format", "plain", "save", "--id", "1"])
        .arg(&update)
        .assert()
        .success()
        .stdout(predicate::str::contains("Link block #1 updated"));

    ws.cmd()
        .args(["--output-format", "plain", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name[fr]: Infos"))
        .stdout(predicate::str::contains("cms:     -"));
}

#[test]
fn test_invalid_submission_exits_2_and_saves_nothing() {
    let ws = Workspace::new();
    let file = ws.write(
        "bad.json",
        r#"{"link_block": {"block_name": {"1": "Shop"}}}"#,
    );

    ws.cmd()
        .args(["--output-format", "plain", "save"])
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing id_hook"))
        .stderr(predicate::str::contains(
            "Missing block_name value for language fr",
        ));

    assert!(!ws.data_file().exists());
}

#[test]
fn test_invalid_submission_json_lists_errors() {
    let ws = Workspace::new();
    let file = ws.write("bad.json", r#"{"link_block": {"id_hook": 1}}"#);

    let out = ws
        .cmd()
        .args(["--output-format", "json", "save"])
        .arg(&file)
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        stdout_json(&out),
        serde_json::json!([{
            "key": "Missing block_name",
            "domain": "Admin.Catalog.Notification",
            "parameters": []
        }])
    );
}

#[test]
fn test_validate_does_not_write() {
    let ws = Workspace::new();
    let file = ws.write("block.json", valid_block());

    ws.cmd()
        .args(["--output-format", "plain", "validate"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Submission is valid"));

    assert!(!ws.data_file().exists());
}

#[test]
fn test_list_and_delete() {
    let ws = Workspace::new();
    let file = ws.write("block.json", valid_block());
    save(&ws, &file);
    save(&ws, &file);

    ws.cmd()
        .args(["--output-format", "plain", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("#2"))
        .stdout(predicate::str::contains("Shop"));

    ws.cmd()
        .args(["--output-format", "plain", "delete", "1"])
        .assert()
        .success();

    let out = ws
        .cmd()
        .args(["--output-format", "json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let blocks = stdout_json(&out);
    assert_eq!(blocks.as_array().unwrap().len(), 1);
    assert_eq!(blocks[0]["id"], 2);
}

#[test]
fn test_languages_from_config() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["--output-format", "plain", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("fr"));
}

#[test]
fn test_config_get_reads_env_override() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "get", "storage.data_file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("link_blocks.json"));
}

#[test]
fn test_init_local_writes_config() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("linklist").unwrap();
    cmd.current_dir(dir.path())
        .args(["--output-format", "plain", "init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join(".linklist.toml")).unwrap();
    assert!(written.contains("ps_linklist"));
    assert!(written.contains("displayFooter"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("linklist").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linklist"));
}

#[test]
fn test_data_file_flag_overrides_configured_store() {
    let ws = Workspace::new();
    let file = ws.write("block.json", valid_block());
    let other = ws.dir.path().join("elsewhere.json");

    ws.cmd()
        .args(["--output-format", "plain", "--data-file"])
        .arg(&other)
        .arg("save")
        .arg(&file)
        .assert()
        .success();

    assert!(other.exists());
    assert!(!ws.data_file().exists());
}
