//! Assertion helpers with descriptive failure messages.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a file was generated below the working directory.
///
/// ```ignore
/// assert_generated!(env, "generated/Domain/ValueObjects/Money.cs");
/// ```
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {
        let full_path = $env.work_path($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.work_dir.path()).join("\n  ")
        );
    };
}

/// Assert that a path was NOT generated.
#[macro_export]
macro_rules! assert_not_generated {
    ($env:expr, $path:expr) => {
        let full_path = $env.work_path($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.",
            $path
        );
    };
}

/// Assert that command output contains a string.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let output = $result.combined_output();
        assert!(
            output.contains($needle),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}
