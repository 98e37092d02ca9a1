//!
//! The compiled contract artifact.
//!

pub mod schema;


use web3::ethabi;

use crate::error::Error;

///
/// Returns the well-known artifact path for a contract name.
///
pub fn artifact_path(contract_name: &str) -> String {
    format!("{}/{}.json", crate::ARTIFACTS_DIRECTORY, contract_name)
}

///
/// The validated compiled contract artifact.
///
/// Produced from the raw JSON document once both required fields are known to
/// be present and well-formed.
///
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// The contract interface description.
    pub abi: ethabi::Contract,
    /// The contract deploy bytecode.
    pub bytecode: Vec<u8>,
}

impl ContractArtifact {
    ///
    /// Parses and validates the artifact document read from `path`.
    ///
    /// An unparseable document is a load failure; a parsed document lacking
    /// the interface description or the bytecode is a validation failure
    /// naming the field. An empty interface array is accepted; an empty
    /// bytecode string is not.
    ///
    pub fn parse(content: &str, path: &str) -> Result<Self, Error> {
        let artifact: schema::Artifact =
            serde_json::from_str(content).map_err(|error| Error::ArtifactLoad {
                path: path.to_owned(),
                source: Box::new(error),
            })?;

        let abi = match artifact.abi {
            Some(abi) if !abi.is_null() => abi,
            _ => {
                return Err(Error::ArtifactInvalid {
                    path: path.to_owned(),
                    field: "abi",
                })
            }
        };
        let abi: ethabi::Contract =
            serde_json::from_value(abi).map_err(|_| Error::ArtifactInvalid {
                path: path.to_owned(),
                field: "abi",
            })?;

        let object = artifact
            .data
            .and_then(|data| data.bytecode)
            .and_then(|bytecode| bytecode.object)
            .filter(|object| !object.is_empty())
            .ok_or_else(|| Error::ArtifactInvalid {
                path: path.to_owned(),
                field: "data.bytecode.object",
            })?;
        let bytecode = hex::decode(object.strip_prefix("0x").unwrap_or(object.as_str())).map_err(
            |_| Error::ArtifactInvalid {
                path: path.to_owned(),
                field: "data.bytecode.object",
            },
        )?;

        Ok(Self { abi, bytecode })
    }

    ///
    /// Returns the init code of the deployment transaction: the bytecode with
    /// the ABI-encoded constructor arguments appended.
    ///
    pub fn init_code(&self, constructor_args: &[ethabi::Token]) -> Result<Vec<u8>, ethabi::Error> {
        match (self.abi.constructor(), constructor_args.is_empty()) {
            (Some(constructor), _) => {
                constructor.encode_input(self.bytecode.clone(), constructor_args)
            }
            (None, true) => Ok(self.bytecode.clone()),
            (None, false) => Err(ethabi::Error::Other(
                "constructor arguments were provided, but the interface defines no constructor"
                    .into(),
            )),
        }
    }
}
