//! Tree configuration

use crate::digest::{DigestFunction, HashAlgorithm};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Settings a [`MerkleTree`](crate::MerkleTree) is created with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Hash primitive used for leaves and internal nodes
    pub algorithm: HashAlgorithm,
}

impl TreeConfig {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        TreeConfig { algorithm }
    }

    /// Parse a config from JSON, e.g. `{"algorithm": "blake3"}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn digest_function(&self) -> DigestFunction {
        DigestFunction::new(self.algorithm)
    }
}
