//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside an isolated temporary directory that doubles
//! as `$HOME`, with `WEBPATH_*` variables cleared, so no configuration from
//! the machine running the tests leaks in.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment for running the `webpath` binary.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A `webpath` command isolated from the host environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("webpath").expect("Failed to find webpath binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("WEBPATH_CWD")
            .env_remove("WEBPATH_ORIGIN")
            .env_remove("WEBPATH_LOG_MODE");
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run webpath");
        assert!(
            output.status.success(),
            "webpath {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }
}
