use std::path::PathBuf;
use tempfile::TempDir;

/// Test utilities for CLI integration tests
///
/// Helpers for setting up temporary source maps and source files
/// and running the binary against them.
pub struct TestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    /// Get the path to the temporary directory
    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a file with the given text content
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let file_path = self.temp_path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Create a source map JSON file holding `mapping`
    pub fn create_source_map(&self, name: &str, mapping: &str) -> Result<PathBuf, std::io::Error> {
        let json = serde_json::json!({
            "version": 3,
            "sources": [],
            "names": [],
            "mapping": mapping,
        });
        self.create_file(name, &json.to_string())
    }

    /// Read a file from the temporary directory
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_path().join(name)).expect("Failed to read output file")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// Get the sourcemap-annotate command with colors and config lookups isolated
#[allow(deprecated)]
pub fn cmd(ctx: &TestContext) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("sourcemap-annotate")
        .expect("Failed to find sourcemap-annotate binary");
    cmd.env("NO_COLOR", "1").current_dir(ctx.temp_path());
    cmd
}

/// A small TEAL program
pub const SAMPLE_SOURCE: &str = "#pragma version 8\nint 1\nint 2\n+\nreturn\n";

/// Source map placing PC 0 on line 0, PCs 1-2 on line 1, PC 3 on line 2,
/// PC 4 on line 3 and PC 5 on line 4
pub const SAMPLE_MAPPING: &str = "AAAA;AACA;AACA;AAEA;AAGA;AAIA";
