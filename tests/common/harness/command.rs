//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Settings the binary reads from the environment; removed before every run.
const SETTINGS_VARS: &[&str] = &[
    "NOTION_TOKEN",
    "INBOX_DATABASE_ID",
    "DAILY_ROLLUP_PAGE_ID",
    "NOTION_API_URL",
];

/// Fluent wrapper around `assert_cmd::Command` for the `notionw` binary.
///
/// Every run starts from a scrubbed environment: the settings variables are
/// removed and the home/config directories point at `home` when set.
pub struct NotionwCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    home: Option<PathBuf>,
    stdin: Option<String>,
}

impl NotionwCommand {
    /// Creates a new command for the `notionw` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            home: None,
            stdin: None,
        }
    }

    /// Points `HOME` and `XDG_CONFIG_HOME` at `path`.
    pub fn home(mut self, path: &Path) -> Self {
        self.home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the run.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Pipes `input` to the binary's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notionw").expect("Failed to find notionw binary");
        for var in SETTINGS_VARS {
            cmd.env_remove(var);
        }
        cmd.env_remove("RUST_LOG");
        if let Some(home) = &self.home {
            cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.args(&self.args);
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `inbox` command with a title.
    pub fn inbox(self, title: &str) -> Self {
        self.args(["inbox", "--title", title])
    }

    /// Adds `--api-url` pointing at a running inbox API.
    pub fn api_url(self, url: &str) -> Self {
        self.args(["--api-url", url])
    }

    /// Adds `--direct` to bypass the inbox API.
    pub fn direct(self) -> Self {
        self.args(["--direct"])
    }
}

impl Default for NotionwCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        NotionwCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotionwCommand::new()
            .inbox("Hello")
            .api_url("http://127.0.0.1:1")
            .direct();
        assert_eq!(
            cmd.get_args(),
            [
                "inbox",
                "--title",
                "Hello",
                "--api-url",
                "http://127.0.0.1:1",
                "--direct"
            ]
        );
    }
}
