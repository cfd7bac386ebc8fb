#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated configuration home for one test.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A `commons` invocation that reads its configuration from this home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("commons").expect("commons binary not built");
        cmd.env("COMMONS_HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    pub fn write_config(&self, contents: &str) {
        self.write("config.toml", contents);
    }
}

pub const FILES_JSON: &str = r#"[
    {"Name": "movie.mkv", "Size": 1073741824, "Owner": "ann"},
    {"Name": "notes.md", "Size": 512, "Owner": "ben"},
    {"Name": "photo.png", "Size": 2048, "Owner": "cy"}
]"#;
