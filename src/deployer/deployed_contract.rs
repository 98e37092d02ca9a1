//!
//! The deployed contract handle.
//!

use web3::types::Address;
use web3::types::TransactionReceipt;
use web3::types::H256;
use web3::types::U256;
use web3::types::U64;

///
/// The handle of a newly deployed contract.
///
/// Ownership passes entirely to the caller; the deployer keeps nothing.
///
#[derive(Debug, Clone)]
pub struct DeployedContract {
    /// The on-chain contract address.
    pub address: Address,
    /// The hash of the deployment transaction.
    pub transaction_hash: H256,
    /// The block the deployment was included in.
    pub block_number: Option<U64>,
    /// The gas spent on the deployment.
    pub gas_used: Option<U256>,
}

impl DeployedContract {
    ///
    /// Builds the handle from the deployment receipt.
    ///
    pub fn new(address: Address, receipt: &TransactionReceipt) -> Self {
        Self {
            address,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        }
    }
}
