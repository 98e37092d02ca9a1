//!
//! The contract artifact JSON schema.
//!

pub mod data;

use serde::Deserialize;

use self::data::Data;

///
/// The contract artifact JSON document.
///
/// Mirrors the layout the IDE writes next to compiled contracts. Fields are
/// optional at this level so their presence is checked during validation
/// instead of failing inside the JSON parser.
///
#[derive(Debug, Deserialize)]
pub struct Artifact {
    /// The contract interface description.
    #[serde(default)]
    pub abi: Option<serde_json::Value>,
    /// The compiler output data.
    #[serde(default)]
    pub data: Option<Data>,
}
