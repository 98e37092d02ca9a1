//!
//! The contract artifact bytecode.
//!

use serde::Deserialize;

///
/// The contract artifact bytecode.
///
#[derive(Debug, Deserialize)]
pub struct Bytecode {
    /// The hex-encoded bytecode object.
    #[serde(default)]
    pub object: Option<String>,
}
