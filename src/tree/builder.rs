//! Recursive bottom-up construction of a node tree from data blocks

use super::Node;
use crate::digest::DigestFunction;
use crate::{Error, Result};

/// A freshly built subtree and the number of nodes created for it
#[derive(Debug)]
pub struct Built {
    pub root: Node,
    pub node_count: usize,
}

/// Build a tree over `blocks`, preserving their order
///
/// The slice is halved positionally at `len / 2`, so for an odd count the
/// right half is one block larger. Shape depends only on the block count.
pub fn build<B: AsRef<[u8]>>(blocks: &[B], digest: DigestFunction) -> Result<Built> {
    if blocks.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut node_count = 0;
    let root = build_node(blocks, digest, &mut node_count);
    Ok(Built { root, node_count })
}

fn build_node<B: AsRef<[u8]>>(
    blocks: &[B],
    digest: DigestFunction,
    node_count: &mut usize,
) -> Node {
    let node = if let [block] = blocks {
        Node::leaf(digest.hash(block.as_ref()))
    } else {
        let (left_blocks, right_blocks) = blocks.split_at(blocks.len() / 2);
        let left = build_node(left_blocks, digest, node_count);
        let right = build_node(right_blocks, digest, node_count);
        let hash = digest.hash_pair(left.digest(), right.digest());
        Node::internal(left, right, hash)
    };

    *node_count += 1;
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        let blocks: Vec<&[u8]> = Vec::new();
        let err = build(&blocks, DigestFunction::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_single_block_is_leaf() {
        let f = DigestFunction::default();
        let built = build(&[b"only"], f).unwrap();
        assert_eq!(built.node_count, 1);
        assert!(built.root.is_leaf());
        assert_eq!(built.root.digest(), f.hash(b"only"));
    }

    #[test]
    fn test_odd_count_puts_extra_block_right() {
        let f = DigestFunction::default();
        let built = build(&[b"a", b"b", b"c"], f).unwrap();
        assert_eq!(built.node_count, 5);

        let (left, right) = built.root.children().unwrap();
        assert!(left.is_leaf());
        assert_eq!(left.digest(), f.hash(b"a"));
        assert_eq!(right.subtree_size(), 3);

        let bc = f.hash_pair(&f.hash(b"b"), &f.hash(b"c"));
        assert_eq!(right.digest(), bc);
        assert_eq!(built.root.digest(), f.hash_pair(&f.hash(b"a"), &bc));
    }

    #[test]
    fn test_node_count_is_two_n_minus_one() {
        for n in 1..=40usize {
            let blocks: Vec<Vec<u8>> = (0..n).map(|i| vec![i as u8]).collect();
            let built = build(&blocks, DigestFunction::default()).unwrap();
            assert_eq!(built.node_count, 2 * n - 1, "n = {}", n);
            assert_eq!(built.root.subtree_size(), built.node_count);
        }
    }
}
