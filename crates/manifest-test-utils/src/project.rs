//! [`TestProject`] builder for manifest-manager test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A temporary project directory with helper methods for test setup and
/// assertion.
///
/// Uses the standard project layout: the manifest template at
/// `package/manifest.json`, environment files at `env/.env.<name>`, and a
/// deployed manifest (standing in for the externally fetched state) at
/// `deployed/manifest.json`.
///
/// # Example
///
/// ```rust,no_run
/// use manifest_test_utils::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new();
/// project.write_template(&json!({"id": "${{APP_ID}}"}));
/// project.write_deployed(&json!({"id": "42"}));
/// project.write_env("dev", "APP_ID=41\n");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the project directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the manifest template.
    pub fn template_path(&self) -> PathBuf {
        self.root().join("package").join("manifest.json")
    }

    /// Path of the deployed-manifest fixture.
    pub fn deployed_path(&self) -> PathBuf {
        self.root().join("deployed").join("manifest.json")
    }

    /// Path of the dotenv file backing the named environment.
    pub fn env_path(&self, name: &str) -> PathBuf {
        self.root().join("env").join(format!(".env.{name}"))
    }

    /// Write the manifest template.
    pub fn write_template(&self, manifest: &Value) {
        write_json(&self.template_path(), manifest);
    }

    /// Write the deployed-manifest fixture.
    pub fn write_deployed(&self, manifest: &Value) {
        write_json(&self.deployed_path(), manifest);
    }

    /// Write a raw environment file for the named environment.
    pub fn write_env(&self, name: &str, content: &str) {
        let path = self.env_path(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Read the raw content of the named environment file.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_env(&self, name: &str) -> String {
        let path = self.env_path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read env file: {}", path.display()))
    }

    /// Assert that the named environment file contains `content`.
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_env_contains(&self, name: &str, content: &str) {
        let env = self.read_env(name);
        assert!(
            env.contains(content),
            "Expected env file .env.{name} to contain {content:?}, got:\n{env}"
        );
    }

    /// Assert that the named environment file does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file exists.
    pub fn assert_env_not_exists(&self, name: &str) {
        let path = self.env_path(name);
        assert!(
            !path.exists(),
            "Expected env file NOT to exist: {}",
            path.display()
        );
    }
}

fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}
