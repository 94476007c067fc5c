//! Well-known paths inside a managed project

use std::path::{Path, PathBuf};

use manifest_env::EnvStore;

/// Directory holding the app package sources, including the template.
pub const PACKAGE_DIR: &str = "package";

/// File name of the manifest template inside [`PACKAGE_DIR`].
pub const MANIFEST_FILE: &str = "manifest.json";

/// Directory holding the per-environment dotenv files.
pub const ENV_DIR: &str = "env";

/// Resolves the standard file layout of a managed project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at the given project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the manifest template: `<root>/package/manifest.json`.
    pub fn template_manifest(&self) -> PathBuf {
        self.root.join(PACKAGE_DIR).join(MANIFEST_FILE)
    }

    /// Path of the environment directory: `<root>/env`.
    pub fn env_dir(&self) -> PathBuf {
        self.root.join(ENV_DIR)
    }

    /// The environment store rooted at this project's env directory.
    pub fn env_store(&self) -> EnvStore {
        EnvStore::new(self.env_dir())
    }
}
