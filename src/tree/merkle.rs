//! Merkle tree that owns its nodes

use super::builder::{build, Built};
use super::traversal::{collect_preorder, Preorder};
use super::Node;
use crate::config::TreeConfig;
use crate::digest::DigestFunction;
use crate::{Error, Result};
use tracing::{debug, trace};

/// A merkle tree over an ordered sequence of data blocks
///
/// The tree owns every node exclusively. `clone()` makes a deep copy and
/// [`MerkleTree::take`] moves the contents out, leaving an empty tree behind.
/// Two trees compare equal when both are empty or when their root digests
/// match.
#[derive(Clone, Debug, Default)]
pub struct MerkleTree {
    root: Option<Node>,
    /// Nodes created by the last build, leaves and internal nodes alike
    size: usize,
    digest: DigestFunction,
}

impl MerkleTree {
    /// Create an empty tree hashing with SHA-256
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with the given config
    pub fn with_config(config: TreeConfig) -> Self {
        MerkleTree {
            root: None,
            size: 0,
            digest: config.digest_function(),
        }
    }

    /// Build a SHA-256 tree over `blocks`
    pub fn from_blocks<B: AsRef<[u8]>>(blocks: &[B]) -> Result<Self> {
        let mut tree = Self::new();
        tree.create_merkle_tree(blocks)?;
        Ok(tree)
    }

    /// Build a tree over `blocks` and install it, dropping any previous nodes
    ///
    /// Fails with [`Error::EmptyInput`] on an empty slice, in which case the
    /// tree is left untouched.
    pub fn create_merkle_tree<B: AsRef<[u8]>>(&mut self, blocks: &[B]) -> Result<()> {
        let Built { root, node_count } = build(blocks, self.digest)?;

        debug!(
            blocks = blocks.len(),
            nodes = node_count,
            algorithm = %self.digest.algorithm(),
            root = root.digest().get(..7).unwrap_or_default(),
            "built merkle tree"
        );

        if let Some(old) = self.root.replace(root) {
            trace!(nodes = self.size, root = old.digest(), "dropping previous tree");
        }
        self.size = node_count;
        Ok(())
    }

    /// Root digest, or an empty string for an empty tree
    pub fn get_root_hash(&self) -> String {
        self.root
            .as_ref()
            .map(|root| root.digest().to_string())
            .unwrap_or_default()
    }

    pub fn get_root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Total number of nodes, not just leaves
    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn config(&self) -> TreeConfig {
        TreeConfig::new(self.digest.algorithm())
    }

    /// All node digests in preorder, root first
    pub fn get_all_hashes_preorder(&self) -> Result<Vec<String>> {
        let root = self.root.as_ref().ok_or(Error::EmptyTree)?;
        Ok(collect_preorder(root))
    }

    /// Iterate over nodes in preorder; yields nothing for an empty tree
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self.root.as_ref())
    }

    /// Drop every node and reset to empty
    pub fn clear(&mut self) {
        if self.root.take().is_some() {
            trace!(nodes = self.size, "cleared merkle tree");
        }
        self.size = 0;
    }

    /// Move the nodes out into a new tree, leaving this one empty
    ///
    /// The returned tree keeps this tree's config, and so does `self`.
    pub fn take(&mut self) -> MerkleTree {
        MerkleTree {
            root: self.root.take(),
            size: std::mem::take(&mut self.size),
            digest: self.digest,
        }
    }
}

impl PartialEq for MerkleTree {
    fn eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => a.digest() == b.digest(),
            _ => false,
        }
    }
}

impl Eq for MerkleTree {}
