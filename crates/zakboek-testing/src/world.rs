//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Dropping CHR statement files into an inbox directory
//! - Seeding and inspecting the workbook
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zakboek_sheet::{CsvWorkbook, LedgerGateway};
use zakboek_types::BagRecord;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use zakboek_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["ledger", "status"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    inbox: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = base_path.join(".zakboek");
        let inbox = base_path.join("inbox");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::create_dir_all(&inbox).expect("Failed to create inbox dir");

        Self {
            temp_dir,
            data_dir,
            inbox,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.zakboek).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the statement inbox directory path.
    pub fn inbox(&self) -> &Path {
        &self.inbox
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the workbook the CLI reads and writes in this environment.
    pub fn workbook_path(&self) -> PathBuf {
        self.data_dir.join("ledger.csv")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Drop a CHR statement file into the inbox and return its path.
    pub fn write_statement(&self, name: &str, text: &str) -> Result<PathBuf> {
        let path = self.inbox.join(name);
        std::fs::write(&path, text)?;
        Ok(path)
    }

    /// Seed the workbook with the given rows.
    pub fn write_workbook(&self, rows: &[BagRecord]) -> Result<()> {
        let workbook = CsvWorkbook::new(self.workbook_path());
        workbook
            .write_all(rows)
            .map_err(|e| anyhow::anyhow!("Failed to seed workbook: {}", e))
    }

    /// Read the workbook back as rows.
    pub fn read_workbook(&self) -> Result<Vec<BagRecord>> {
        let workbook = CsvWorkbook::new(self.workbook_path());
        workbook
            .read_all()
            .map_err(|e| anyhow::anyhow!("Failed to read workbook: {}", e))
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from
    /// `Command::cargo_bin("zakboek")`). This method configures it with the
    /// appropriate data-dir, cwd, and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg("plain");

        // Keep the command from picking up state outside the temp dir
        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Example
    /// ```no_run
    /// # use zakboek_testing::TestWorld;
    /// let world = TestWorld::new();
    /// let result = world.run(&["ledger", "list"]).unwrap();
    /// assert!(result.success());
    /// ```
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("zakboek")
            .map_err(|e| anyhow::anyhow!("Failed to find zakboek binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute a command with extra stdin content.
    ///
    /// Used for register runs that take scanned codes from a pipe.
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("zakboek")
            .map_err(|e| anyhow::anyhow!("Failed to find zakboek binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);
        cmd.write_stdin(stdin.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
