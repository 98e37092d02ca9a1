//!
//! The contract artifact compiler output data.
//!

pub mod bytecode;

use serde::Deserialize;

use self::bytecode::Bytecode;

///
/// The contract artifact compiler output data.
///
#[derive(Debug, Deserialize)]
pub struct Data {
    /// The contract bytecode.
    #[serde(default)]
    pub bytecode: Option<Bytecode>,
}
