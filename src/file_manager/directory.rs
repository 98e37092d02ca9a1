//!
//! The directory-backed file manager.
//!

use std::path::PathBuf;

use async_trait::async_trait;

use super::FileManager;

/// The workspace path scheme prefix used by browser-based IDEs.
const WORKSPACE_SCHEME_PREFIX: &str = "browser/";

///
/// The file manager backed by a local directory.
///
/// Maps workspace-scheme paths (`browser/...`) onto a root directory, so
/// artifacts compiled into a local workspace can be deployed directly.
///
#[derive(Debug, Clone)]
pub struct DirectoryFileManager {
    /// The workspace root directory.
    root: PathBuf,
}

impl DirectoryFileManager {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    ///
    /// Resolves a workspace path to a location under the root directory.
    ///
    pub fn resolve(&self, path: &str) -> PathBuf {
        let relative = path.strip_prefix(WORKSPACE_SCHEME_PREFIX).unwrap_or(path);
        self.root.join(relative)
    }
}

#[async_trait]
impl FileManager for DirectoryFileManager {
    async fn get_file(&self, path: &str) -> anyhow::Result<String> {
        let location = self.resolve(path);
        tokio::fs::read_to_string(location.as_path())
            .await
            .map_err(|error| anyhow::anyhow!("failed to read `{}`: {error}", location.display()))
    }
}
