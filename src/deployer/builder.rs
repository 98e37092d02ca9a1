//!
//! The contract deployer builder.
//!

use std::sync::Arc;
use std::time::Duration;

use crate::error::Error;
use crate::file_manager::FileManager;

use super::Deployer;
use super::DEFAULT_POLL_INTERVAL;

///
/// The contract deployer builder.
///
/// Collects the deployer dependencies and checks their presence at build
/// time, so a missing provider or file manager surfaces as a configuration
/// error before any deployment is attempted.
///
pub struct DeployerBuilder<T: web3::Transport> {
    /// The web3 provider.
    provider: Option<web3::Web3<T>>,
    /// The artifact source.
    file_manager: Option<Arc<dyn FileManager>>,
    /// The interval between transaction receipt polls.
    poll_interval: Duration,
}

impl<T: web3::Transport> DeployerBuilder<T> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self {
            provider: None,
            file_manager: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    ///
    /// Sets the web3 provider.
    ///
    pub fn provider(mut self, web3: web3::Web3<T>) -> Self {
        self.provider = Some(web3);
        self
    }

    ///
    /// Sets the file manager artifacts are read through.
    ///
    pub fn file_manager(mut self, file_manager: impl FileManager + 'static) -> Self {
        self.file_manager = Some(Arc::new(file_manager));
        self
    }

    ///
    /// Sets the interval between transaction receipt polls.
    ///
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    ///
    /// Assembles the deployer.
    ///
    pub fn build(self) -> Result<Deployer<T>, Error> {
        let web3 = self.provider.ok_or(Error::Configuration("web3 provider"))?;
        let file_manager = self
            .file_manager
            .ok_or(Error::Configuration("file manager"))?;
        Ok(Deployer {
            web3,
            file_manager,
            poll_interval: self.poll_interval,
        })
    }
}

impl<T: web3::Transport> Default for DeployerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
