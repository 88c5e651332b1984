//! Binary merkle tree over ordered data blocks
//!
//! - Leaves hold the digest of one raw block
//! - Internal nodes hold the digest of their children's hex digests
//! - The root digest summarizes the whole ordered data set

mod builder;
mod merkle;
mod node;
mod traversal;

pub use builder::{build, Built};
pub use merkle::MerkleTree;
pub use node::Node;
pub use traversal::{collect_preorder, Preorder};
