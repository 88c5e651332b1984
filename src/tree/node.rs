//! Tree node type

/// A node in the merkle tree
///
/// A leaf holds the digest of one data block. An internal node owns exactly
/// two children and holds the digest of their concatenated digests. The
/// children live in a single box so a node with one child cannot exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    digest: String,
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    /// Create a leaf node
    pub fn leaf(digest: String) -> Self {
        Node {
            digest,
            children: None,
        }
    }

    /// Create an internal node that takes ownership of both children
    pub fn internal(left: Node, right: Node, digest: String) -> Self {
        Node {
            digest,
            children: Some(Box::new((left, right))),
        }
    }

    /// Hex digest stored in this node
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn left(&self) -> Option<&Node> {
        self.children.as_deref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Node> {
        self.children.as_deref().map(|(_, right)| right)
    }

    /// Both children, if this is an internal node
    pub fn children(&self) -> Option<(&Node, &Node)> {
        self.children.as_deref().map(|(left, right)| (left, right))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of nodes in the subtree rooted here, this node included
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some((left, right)) = node.children() {
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }

    /// Number of levels in the subtree rooted here (a leaf has height 1)
    pub fn height(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => 1 + left.height().max(right.height()),
        }
    }
}
