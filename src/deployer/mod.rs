//!
//! The contract deployer.
//!

pub mod builder;
pub mod deployed_contract;
pub mod request;


use std::sync::Arc;
use std::time::Duration;

use web3::ethabi::Token;
use web3::types::Address;
use web3::types::Bytes;
use web3::types::TransactionReceipt;
use web3::types::TransactionRequest;
use web3::types::H256;
use web3::types::U256;

use crate::artifact::ContractArtifact;
use crate::error::Error;
use crate::error::SubmissionError;
use crate::file_manager::FileManager;

use self::builder::DeployerBuilder;
use self::deployed_contract::DeployedContract;
use self::request::DeploymentRequest;

/// The default interval between transaction receipt polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

///
/// The contract deployer.
///
/// Holds the web3 provider and the file manager artifacts are read through.
/// Every `deploy` call is independent; the deployer keeps no state between
/// calls.
///
pub struct Deployer<T: web3::Transport> {
    /// The web3 provider.
    web3: web3::Web3<T>,
    /// The artifact source.
    file_manager: Arc<dyn FileManager>,
    /// The interval between transaction receipt polls.
    poll_interval: Duration,
}

impl<T: web3::Transport> std::fmt::Debug for Deployer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deployer")
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl<T: web3::Transport> Deployer<T> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(web3: web3::Web3<T>, file_manager: impl FileManager + 'static) -> Self {
        Self {
            web3,
            file_manager: Arc::new(file_manager),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    ///
    /// Returns a builder assembling a deployer from optional parts.
    ///
    pub fn builder() -> DeployerBuilder<T> {
        DeployerBuilder::new()
    }

    ///
    /// Deploys the contract described by `request` and returns its on-chain
    /// handle.
    ///
    /// The artifact is loaded and validated before any provider request is
    /// made. When the request omits the sender, the provider's first account
    /// is used; when it omits the gas limit, `DEFAULT_GAS_LIMIT` is used.
    /// Submission failures are logged and propagated; nothing is retried.
    ///
    pub async fn deploy(&self, request: DeploymentRequest) -> Result<DeployedContract, Error> {
        let path = crate::artifact::artifact_path(request.contract_name.as_str());
        tracing::info!(contract = %request.contract_name, path = %path, "deploying contract");

        let artifact = self.load_artifact(path.as_str()).await?;

        let sender = self.resolve_sender(request.sender).await?;
        let gas_limit = request
            .gas_limit
            .unwrap_or_else(|| U256::from(crate::DEFAULT_GAS_LIMIT));
        tracing::debug!(sender = ?sender, %gas_limit, "resolved deployment parameters");

        match self
            .submit(
                &artifact,
                request.constructor_args.as_slice(),
                sender,
                gas_limit,
            )
            .await
        {
            Ok(deployed) => {
                tracing::info!(
                    contract = %request.contract_name,
                    address = ?deployed.address,
                    "contract deployed"
                );
                Ok(deployed)
            }
            Err(error) => {
                tracing::error!(contract = %request.contract_name, %error, "deployment failed");
                Err(Error::Submission(error))
            }
        }
    }

    ///
    /// Loads and validates the artifact at the workspace `path`.
    ///
    async fn load_artifact(&self, path: &str) -> Result<ContractArtifact, Error> {
        let content =
            self.file_manager
                .get_file(path)
                .await
                .map_err(|error| Error::ArtifactLoad {
                    path: path.to_owned(),
                    source: error.into(),
                })?;
        ContractArtifact::parse(content.as_str(), path)
    }

    ///
    /// Resolves the sender: an explicit address wins, otherwise the first
    /// account exposed by the provider. An empty account list without an
    /// explicit sender is an error.
    ///
    async fn resolve_sender(&self, sender: Option<Address>) -> Result<Address, Error> {
        match sender {
            Some(address) => Ok(address),
            None => {
                let accounts = self
                    .web3
                    .eth()
                    .accounts()
                    .await
                    .map_err(|error| Error::Submission(SubmissionError::Provider(error)))?;
                accounts.first().copied().ok_or(Error::NoSenderAccount)
            }
        }
    }

    ///
    /// Submits the deployment transaction and awaits its receipt.
    ///
    async fn submit(
        &self,
        artifact: &ContractArtifact,
        constructor_args: &[Token],
        sender: Address,
        gas_limit: U256,
    ) -> Result<DeployedContract, SubmissionError> {
        let init_code = artifact.init_code(constructor_args)?;

        let transaction = TransactionRequest {
            from: sender,
            gas: Some(gas_limit),
            data: Some(Bytes(init_code)),
            ..Default::default()
        };
        let transaction_hash = self.web3.eth().send_transaction(transaction).await?;

        let receipt = self.wait_for_receipt(transaction_hash).await?;
        if receipt.status.map_or(false, |status| status.is_zero()) {
            return Err(SubmissionError::Reverted(transaction_hash));
        }
        let address = receipt
            .contract_address
            .ok_or(SubmissionError::NoContractAddress(transaction_hash))?;

        Ok(DeployedContract::new(address, &receipt))
    }

    ///
    /// Polls the provider until the transaction receipt is available.
    ///
    /// No timeout is enforced here: a transaction the provider never mines
    /// blocks the calling workflow, like any other hung provider request.
    ///
    async fn wait_for_receipt(
        &self,
        transaction_hash: H256,
    ) -> Result<TransactionReceipt, SubmissionError> {
        loop {
            if let Some(receipt) = self.web3.eth().transaction_receipt(transaction_hash).await? {
                return Ok(receipt);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
