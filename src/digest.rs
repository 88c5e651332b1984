//! Hex digest function used for both leaves and internal nodes

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Length in characters of every hex digest produced here
pub const HEX_DIGEST_LEN: usize = 64;

/// The hash primitive behind a [`DigestFunction`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Blake3,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(crate::Error::Config(format!(
                "unknown hash algorithm: {}",
                other
            ))),
        }
    }
}

/// Stateless digest function producing lowercase hex strings
///
/// Hasher state lives on the stack of each call, so a single value can be
/// shared freely between trees and threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigestFunction {
    algorithm: HashAlgorithm,
}

impl DigestFunction {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        DigestFunction { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash a raw data block
    pub fn hash(&self, data: &[u8]) -> String {
        self.hash_parts(&[data])
    }

    /// Hash the text concatenation of two hex digests
    ///
    /// The strings are concatenated as text, not decoded back to bytes.
    pub fn hash_pair(&self, left: &str, right: &str) -> String {
        self.hash_parts(&[left.as_bytes(), right.as_bytes()])
    }

    fn hash_parts(&self, parts: &[&[u8]]) -> String {
        match self.algorithm {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                for part in parts {
                    hasher.update(part);
                }
                hex::encode(hasher.finalize())
            }
            HashAlgorithm::Blake3 => {
                let mut hasher = blake3::Hasher::new();
                for part in parts {
                    hasher.update(part);
                }
                hex::encode(hasher.finalize().as_bytes())
            }
        }
    }
}

/// SHA-256 hex digest of `data`
pub fn sha256_hex(data: &[u8]) -> String {
    DigestFunction::default().hash(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_pair_is_text_concatenation() {
        let f = DigestFunction::default();
        let a = f.hash(b"a");
        let b = f.hash(b"b");
        let joined = format!("{}{}", a, b);
        assert_eq!(f.hash_pair(&a, &b), f.hash(joined.as_bytes()));
        assert_ne!(f.hash_pair(&a, &b), f.hash_pair(&b, &a));
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
            let digest = DigestFunction::new(algorithm).hash(b"hello");
            assert_eq!(digest.len(), HEX_DIGEST_LEN);
            assert!(digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn test_algorithms_differ() {
        let sha = DigestFunction::new(HashAlgorithm::Sha256).hash(b"data");
        let b3 = DigestFunction::new(HashAlgorithm::Blake3).hash(b"data");
        assert_ne!(sha, b3);
        assert_eq!(b3, blake3::hash(b"data").to_hex().to_string());
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("SHA256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("blake3".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Blake3);
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }
}
