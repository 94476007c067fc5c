//! File-backed collaborator implementations

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use manifest_doc::Node;
use manifest_env::EnvStore;

use crate::error::{Error, Result};
use crate::source::{DeployedSource, EnvironmentStore, TemplateSource};

/// Reads the deployed manifest from a JSON file, e.g. one exported from
/// the target system or unpacked from a distributed app package.
#[derive(Debug, Clone)]
pub struct FileDeployedSource {
    path: PathBuf,
}

impl FileDeployedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DeployedSource for FileDeployedSource {
    fn fetch_deployed(&self) -> Result<Node> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::DeployedNotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        Ok(Node::parse_document(&content)?)
    }
}

/// Reads the manifest template from its on-disk JSON file.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemplateSource for FileTemplateSource {
    fn load_template(&self) -> Result<Node> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::TemplateNotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        Ok(Node::parse_document(&content)?)
    }
}

/// [`EnvironmentStore`] backed by a dotenv file of one named environment.
#[derive(Debug, Clone)]
pub struct DotenvEnvironment {
    store: EnvStore,
    name: String,
}

impl DotenvEnvironment {
    pub fn new(store: EnvStore, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    /// The environment name this store is scoped to.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EnvironmentStore for DotenvEnvironment {
    fn read_snapshot(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.store.read(&self.name)?)
    }

    fn write_snapshot(&self, updates: &BTreeMap<String, String>) -> Result<()> {
        Ok(self.store.write(&self.name, updates)?)
    }
}
