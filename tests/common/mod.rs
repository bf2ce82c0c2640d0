//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch project directory next to a scratch home directory
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("home")).unwrap();
        fs::create_dir(root.path().join("project")).unwrap();
        Sandbox { root }
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    /// Write `~/torto.yml`
    pub fn global(self, content: &str) -> Self {
        fs::write(self.home().join("torto.yml"), content).unwrap();
        self
    }

    /// Write the project `torto.yml`
    pub fn local(self, content: &str) -> Self {
        fs::write(self.project().join("torto.yml"), content).unwrap();
        self
    }

    pub fn global_path(&self) -> PathBuf {
        self.home().join("torto.yml")
    }

    pub fn local_path(&self) -> PathBuf {
        self.project().join("torto.yml")
    }

    /// The torto binary, running inside the project with HOME pointed at the sandbox
    pub fn torto(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("torto").unwrap();
        cmd.current_dir(self.project())
            .env("HOME", self.home())
            .env("NO_COLOR", "1");
        cmd
    }
}

/// Create a temporary directory with a single config file in it
pub fn create_test_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(name);
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
