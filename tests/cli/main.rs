use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod diff;
mod init;
mod minify;
mod scan;

const BIN_NAME: &str = "idshrink";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
    /// Regex matching `project_dir`, for snapshot filters.
    project_filter: String,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        let project_filter = regex::escape(&project_dir.display().to_string());
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            project_filter,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    /// Filters replacing the temporary project path with `[PROJECT]`.
    pub fn path_filters(&self) -> Vec<(&str, &str)> {
        vec![(self.project_filter.as_str(), "[PROJECT]")]
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn scan_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("scan");
        cmd
    }

    pub fn minify_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("minify");
        cmd
    }

    pub fn diff_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("diff");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse stdout of a `--json` run.
pub fn json_stdout(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).with_context(|| {
        format!(
            "stdout is not JSON.\nstdout: {}\nstderr: {}",
            stdout(output),
            stderr(output)
        )
    })
}

/// Names of one category in a snapshot, in order.
pub fn names(snapshot: &Value, category: &str) -> Vec<String> {
    snapshot[category]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e["name"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// Entry `name` of one category in a snapshot.
pub fn entry<'a>(snapshot: &'a Value, category: &str, name: &str) -> Option<&'a Value> {
    snapshot[category]
        .as_array()?
        .iter()
        .find(|e| e["name"] == name)
}
