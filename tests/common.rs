#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// A config file plus its SQLite database, both inside the system temp dir.
pub struct TestEnv {
    pub config_path: String,
    pub db_path: String,
}

impl TestEnv {
    /// `worklog --config <file> <args...>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = wl();
        cmd.arg("--config").arg(&self.config_path).args(args);
        cmd
    }

    pub fn row_count(&self) -> i64 {
        let conn = rusqlite::Connection::open(&self.db_path).expect("open db");
        conn.query_row("SELECT COUNT(*) FROM WorkItem", [], |row| row.get(0))
            .expect("count rows")
    }

    pub fn db_exists(&self) -> bool {
        PathBuf::from(&self.db_path).exists()
    }
}

/// Create a unique config + DB path and remove any leftovers from earlier runs
pub fn setup_test_env(name: &str) -> TestEnv {
    let dir: PathBuf = env::temp_dir();
    let db_path = dir.join(format!("{}_worklog.sqlite", name));
    let config_path = dir.join(format!("{}_worklog_config.json", name));
    fs::remove_file(&db_path).ok();

    let body = serde_json::json!({
        "SERVER_NAME": "localhost",
        "PORT": 1433,
        "USER_NAME": "tester",
        "USER_PASSWORD": "not-a-secret",
        "DATABASE_NAME": db_path.to_string_lossy(),
    });
    fs::write(&config_path, body.to_string()).expect("write config");

    TestEnv {
        config_path: config_path.to_string_lossy().to_string(),
        db_path: db_path.to_string_lossy().to_string(),
    }
}

/// Add the work item used by most scenarios.
pub fn add_sample(env: &TestEnv) {
    env.cmd(&[
        "add",
        "--date",
        "2024-01-10",
        "--start",
        "09:00:00",
        "--end",
        "17:00:00",
        "--description",
        "wrote spec",
    ])
    .assert()
    .success();
}

/// Parse the JSON printed by `list`.
pub fn list_json(env: &TestEnv) -> Vec<serde_json::Value> {
    let out = env.cmd(&["list"]).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("list prints a JSON array")
}
