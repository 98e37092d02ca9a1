//!
//! The contract deployer errors.
//!

use web3::types::H256;

///
/// The contract deployer error.
///
/// Each variant corresponds to one phase of the deployment flow, so callers
/// can tell an environment problem from an artifact or a network problem.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A deployer dependency was not supplied at construction time.
    #[error("{0} is not configured")]
    Configuration(&'static str),
    /// The artifact file could not be read or parsed.
    #[error("failed to load contract artifact from `{path}`: {source}")]
    ArtifactLoad {
        /// The attempted artifact path.
        path: String,
        /// The underlying read or parse failure.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The artifact was parsed, but a required field is absent or malformed.
    #[error("contract artifact at `{path}` is missing or has a malformed `{field}`")]
    ArtifactInvalid {
        /// The artifact path.
        path: String,
        /// The offending field.
        field: &'static str,
    },
    /// No sender was given and the provider exposes no accounts.
    #[error("no sender address was given and the provider exposes no accounts")]
    NoSenderAccount,
    /// The deployment transaction could not be submitted or did not succeed.
    #[error("contract deployment failed: {0}")]
    Submission(#[from] SubmissionError),
}

///
/// The deployment submission failure.
///
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The constructor arguments could not be encoded against the interface.
    #[error("constructor argument encoding: {0}")]
    Encoding(#[from] web3::ethabi::Error),
    /// The provider rejected or failed to serve a request.
    #[error("provider request: {0}")]
    Provider(#[from] web3::Error),
    /// The deployment transaction was included but reverted.
    #[error("transaction {0:?} was reverted")]
    Reverted(H256),
    /// The receipt of the deployment transaction carries no contract address.
    #[error("transaction {0:?} produced no contract address")]
    NoContractAddress(H256),
}
