//!
//! The deployment request.
//!

use web3::ethabi::Token;
use web3::types::Address;
use web3::types::U256;

///
/// A single contract deployment request.
///
/// Consumed once by `Deployer::deploy`. The sender and gas limit are
/// optional and fall back to the provider's first account and
/// `DEFAULT_GAS_LIMIT`.
///
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    /// The name of the contract whose artifact is deployed.
    pub contract_name: String,
    /// The constructor arguments, in declaration order.
    pub constructor_args: Vec<Token>,
    /// The sender address, if not the provider's first account.
    pub sender: Option<Address>,
    /// The gas limit, if not the default.
    pub gas_limit: Option<U256>,
}

impl DeploymentRequest {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract_name: impl Into<String>, constructor_args: Vec<Token>) -> Self {
        Self {
            contract_name: contract_name.into(),
            constructor_args,
            sender: None,
            gas_limit: None,
        }
    }

    ///
    /// Sets an explicit sender address.
    ///
    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    ///
    /// Sets an explicit gas limit.
    ///
    pub fn with_gas_limit(mut self, gas_limit: impl Into<U256>) -> Self {
        self.gas_limit = Some(gas_limit.into());
        self
    }
}
