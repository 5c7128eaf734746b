#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated working directory with its own database and HOME.
pub struct SbomWorkspace {
    pub temp_dir: TempDir,
}

impl SbomWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create workspace dir");
        fs::create_dir_all(temp_dir.path().join("home")).expect("create home dir");
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.root().join("sbom.db")
    }

    /// Write a file into the workspace and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, contents).expect("write workspace file");
        path
    }

    /// A command for the binary, run inside the workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sbom-index").expect("binary built");
        cmd.current_dir(self.root())
            .env("HOME", self.root().join("home"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("SBOM_INDEX_DB")
            .env_remove("SBOM_INDEX_JSON");
        cmd
    }
}
