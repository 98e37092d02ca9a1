//!
//! The workspace file manager abstraction.
//!

pub mod directory;
pub mod memory;


use async_trait::async_trait;

///
/// The workspace file manager.
///
/// The host environment exposes compiled artifacts through its file-manager
/// service; this trait is the seam where that service is injected, so the
/// deployer can read artifacts from an IDE workspace, a local directory, or
/// an in-memory substitute alike.
///
#[async_trait]
pub trait FileManager: Send + Sync {
    ///
    /// Returns the contents of the file at the workspace `path`.
    ///
    async fn get_file(&self, path: &str) -> anyhow::Result<String>;
}
