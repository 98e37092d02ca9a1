//!
//! The in-memory file manager.
//!

use std::collections::HashMap;

use async_trait::async_trait;

use super::FileManager;

///
/// The file manager backed by an in-memory map.
///
#[derive(Debug, Default, Clone)]
pub struct MemoryFileManager {
    /// The stored files, keyed by workspace path.
    files: HashMap<String, String>,
}

impl MemoryFileManager {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Stores a file under the workspace `path`.
    ///
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

#[async_trait]
impl FileManager for MemoryFileManager {
    async fn get_file(&self, path: &str) -> anyhow::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("file `{path}` does not exist"))
    }
}
