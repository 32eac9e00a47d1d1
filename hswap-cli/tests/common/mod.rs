//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated project tree in a temporary directory
//! - Command builders that ignore the developer's own configuration

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test.
const HSWAP_VARS: &[&str] = &[
    "HSWAP_CONFIG_DIR",
    "HSWAP_HEADER_EXTENSIONS",
    "HSWAP_SOURCE_EXTENSIONS",
    "HSWAP_DISABLE_CACHING",
    "HSWAP_MAX_RESULTS",
    "HSWAP_SEARCH_TIMEOUT",
    "HSWAP_LOG_MODE",
    "HSWAP_WORKSPACE",
    "HSWAP_OPEN_WITH",
];

/// Test environment with an isolated project and user config directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Root of the fake project
    pub project: PathBuf,
    /// User configuration directory passed via --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty project marked as a workspace by a `.git` directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project = temp_dir.path().join("project");
        let config_dir = temp_dir.path().join("user-config");
        std::fs::create_dir_all(project.join(".git")).expect("Failed to create project");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            project,
            config_dir,
        }
    }

    /// A project with a typical C layout:
    ///
    /// ```text
    /// util/strings.h  util/strings.c
    /// net/include/net/socket.h  net/src/socket.cpp
    /// tools/config.h  lib/a/config.c  lib/b/config.c
    /// app/main.c
    /// ```
    pub fn with_c_project() -> Self {
        let env = Self::new();
        for file in [
            "util/strings.h",
            "util/strings.c",
            "net/include/net/socket.h",
            "net/src/socket.cpp",
            "tools/config.h",
            "lib/a/config.c",
            "lib/b/config.c",
            "app/main.c",
        ] {
            env.touch(file);
        }
        env
    }

    /// Create an empty file below the project root.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.project.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent");
        std::fs::write(&path, "").expect("Failed to write file");
        path
    }

    /// Write a file below the project root.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.project.join(relative);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Absolute path of a project file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project.join(relative)
    }

    /// The hswap binary with no inherited HSWAP_* variables.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("hswap").expect("Failed to find hswap binary");
        for var in HSWAP_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.project);
        cmd
    }

    /// The hswap binary pointed at this environment's user config directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }
}

/// Render a path the way hswap prints it.
#[allow(dead_code)]
pub fn shown(path: &Path) -> String {
    format!("{}\n", path.display())
}
