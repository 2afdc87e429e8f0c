//! Shared testing utilities for artprompt CLI tests.

use assert_cmd::Command;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HOME_ENV: &str = "ARTPROMPT_HOME";

/// Testing harness providing an isolated home directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    original_home: Option<OsString>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment using the built-in catalog.
    pub fn new() -> Self {
        Self::with_config("[catalog]\noffline = true\n")
    }

    /// Create a new isolated environment with the given `config.toml`.
    pub fn with_config(config: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::write(root.path().join("config.toml"), config).expect("Failed to write config.toml");

        let original_home = env::var_os(HOME_ENV);
        unsafe {
            env::set_var(HOME_ENV, root.path());
        }

        Self { root, original_home }
    }

    /// Absolute path to the emulated home directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `artprompt` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("artprompt").expect("Failed to locate artprompt binary");
        cmd.env(HOME_ENV, self.home()).env_remove("API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Path of the file backing a storage key.
    pub fn storage_path(&self, key: &str) -> PathBuf {
        self.home().join(format!("{}.json", key))
    }

    /// Raw persisted value for a storage key.
    pub fn read_storage(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.storage_path(key)).ok()
    }

    /// Overwrite the persisted value for a storage key.
    pub fn write_storage(&self, key: &str, raw: &str) {
        fs::write(self.storage_path(key), raw).expect("Failed to write storage file");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        match &self.original_home {
            Some(value) => unsafe {
                env::set_var(HOME_ENV, value);
            },
            None => unsafe {
                env::remove_var(HOME_ENV);
            },
        }
    }
}
