//! Isolated test environment for running the archlab binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an archlab command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every non-empty stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l}\nerror: {e}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Temp working directory, HOME and project store for one test.
///
/// The store is pinned through `ARCHLAB_STORE_DIR` and the user config through
/// `XDG_CONFIG_HOME`, so nothing outside the temp dirs is read or written.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    archlab_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            archlab_bin: PathBuf::from(env!("CARGO_BIN_EXE_archlab")),
        }
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn store_dir(&self) -> PathBuf {
        self.home_path("store")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.archlab_bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_path(".config"))
            .env("ARCHLAB_STORE_DIR", self.store_dir())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("ARCHLAB_OUT_DIR")
            .env_remove("ARCHLAB_FAIL_ON")
            .env_remove("ARCHLAB_VERBOSITY")
            .env_remove("GITHUB_ACTIONS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute archlab");
        to_result(output)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn read_file(&self, relative: &str) -> String {
        let path = self.work_path(relative);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Write the starter snapshot to `model.json` in the working directory
    pub fn with_starter_snapshot(self) -> Self {
        self.write_file("model.json", &super::fixtures::starter_snapshot());
        self
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Files below `dir`, relative and sorted
pub fn relative_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = super::assertions::list_all_files(dir)
        .into_iter()
        .filter_map(|f| {
            Path::new(&f)
                .strip_prefix(dir)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}
