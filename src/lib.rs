//! # hexmerkle
//!
//! A binary merkle tree over an ordered sequence of opaque data blocks.
//!
//! Each leaf holds the hex digest of one block and each internal node holds
//! the digest of its two children's hex digests concatenated as text. The
//! root digest summarizes the entire data set, so two data sets can be
//! checked for integrity by comparing root digests alone.
//!
//! ## Example
//!
//! ```
//! use hexmerkle::MerkleTree;
//!
//! let blocks: [&[u8]; 3] = [b"alpha", b"beta", b"gamma"];
//! let tree = MerkleTree::from_blocks(&blocks)?;
//!
//! assert_eq!(tree.get_size(), 5);
//! assert_eq!(tree.get_all_hashes_preorder()?[0], tree.get_root_hash());
//! # Ok::<(), hexmerkle::Error>(())
//! ```

pub mod config;
pub mod digest;
pub mod tree;

mod error;

pub use config::TreeConfig;
pub use digest::{sha256_hex, DigestFunction, HashAlgorithm, HEX_DIGEST_LEN};
pub use error::{Error, Result};
pub use tree::{MerkleTree, Node, Preorder};
