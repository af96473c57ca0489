//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::NotionwCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary home directory.
///
/// The binary never sees the developer's real config file or Notion
/// credentials. The directory is cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            home,
        }
    }

    /// Returns the path used as `HOME`.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Returns the default config file location inside this environment.
    pub fn default_config_path(&self) -> PathBuf {
        self.home
            .join(".config")
            .join("notion-inbox")
            .join("config.toml")
    }

    /// Writes the default config file and returns its path.
    pub fn write_default_config(&self, contents: &str) -> PathBuf {
        let path = self.default_config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a NotionwCommand confined to this environment.
    pub fn cmd(&self) -> NotionwCommand {
        NotionwCommand::new().home(&self.home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_home_dir() {
        let env = TestEnv::new();
        assert!(env.home().is_dir());
    }

    #[test]
    fn test_env_write_default_config() {
        let env = TestEnv::new();
        let path = env.write_default_config("notion_token = \"t\"\n");
        assert_eq!(path, env.default_config_path());
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "notion_token = \"t\"\n"
        );
    }
}
