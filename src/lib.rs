//!
//! The contract deployment library.
//!
//! Deploys compiled contract artifacts through a web3 provider: the artifact
//! is read via a workspace file manager, validated, and submitted as a
//! contract-creation transaction whose receipt yields the deployed handle.
//!

pub mod artifact;
pub mod deployer;
pub mod error;
pub mod file_manager;

pub use self::artifact::artifact_path;
pub use self::artifact::ContractArtifact;
pub use self::deployer::builder::DeployerBuilder;
pub use self::deployer::deployed_contract::DeployedContract;
pub use self::deployer::request::DeploymentRequest;
pub use self::deployer::Deployer;
pub use self::deployer::DEFAULT_POLL_INTERVAL;
pub use self::error::Error;
pub use self::error::SubmissionError;
pub use self::file_manager::directory::DirectoryFileManager;
pub use self::file_manager::memory::MemoryFileManager;
pub use self::file_manager::FileManager;

/// The directory where the IDE writes compiled contract artifacts.
pub const ARTIFACTS_DIRECTORY: &str = "browser/contracts/artifacts";

/// The default deployment gas limit.
pub const DEFAULT_GAS_LIMIT: u64 = 1_500_000;
