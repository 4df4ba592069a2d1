//! Work-list based tree iterators.
//!
//! Both iterators borrow the tree and keep an explicit stack instead of
//! recursing, so traversal depth does not grow the call stack.

use crate::tree::RoseTree;

impl<A> RoseTree<A> {
    /// Pre-order, left-to-right iterator over subtree references,
    /// starting with the tree itself.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter { stack: vec![self] }
    }

    /// Post-order iterator: every subtree is yielded after all of its
    /// branches.
    pub fn iter_postorder(&self) -> PostOrderIter<'_, A> {
        PostOrderIter {
            stack: vec![(self, false)],
        }
    }
}

pub struct Iter<'a, A> {
    stack: Vec<&'a RoseTree<A>>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a RoseTree<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push branches in reverse for left-to-right traversal
        for branch in node.branches.iter().rev() {
            self.stack.push(branch);
        }
        Some(node)
    }
}

pub struct PostOrderIter<'a, A> {
    stack: Vec<(&'a RoseTree<A>, bool)>,
}

impl<'a, A> Iterator for PostOrderIter<'a, A> {
    type Item = &'a RoseTree<A>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            for branch in node.branches.iter().rev() {
                self.stack.push((branch, false));
            }
        }
        None
    }
}
