//! Preorder traversal over a node tree

use super::Node;

/// Iterator over nodes in preorder: node, left subtree, right subtree
///
/// Uses an explicit stack instead of recursion.
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Preorder<'a> {
    pub fn new(root: Option<&'a Node>) -> Self {
        Preorder {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some((left, right)) = node.children() {
            // Right goes on first so left comes off first
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Collect the digests of every node under `root` in preorder
pub fn collect_preorder(root: &Node) -> Vec<String> {
    Preorder::new(Some(root))
        .map(|node| node.digest().to_string())
        .collect()
}
