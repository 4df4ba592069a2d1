//! Derived views: edge pairs and root-to-leaf paths.

use crate::tree::RoseTree;

impl<A: Clone> RoseTree<A> {
    /// The ordered `(parent, child)` pairs for every direct edge,
    /// visiting nodes pre-order left-to-right. Each endpoint is a
    /// singleton leaf carrying only the endpoint value.
    pub fn to_pairs(&self) -> Vec<(RoseTree<A>, RoseTree<A>)> {
        self.reshape(Vec::new(), &mut |mut pairs, node| {
            for branch in &node.branches {
                pairs.push((
                    RoseTree::of(node.value.clone()),
                    RoseTree::of(branch.value.clone()),
                ));
            }
            pairs
        })
    }

    /// For every leaf, the value sequence from the root down to it, in
    /// left-to-right leaf order.
    pub fn to_paths(&self) -> Vec<Vec<A>> {
        self.fold(&|value: &A, branch_paths: Vec<Vec<Vec<A>>>| {
            if branch_paths.is_empty() {
                vec![vec![value.clone()]]
            } else {
                branch_paths
                    .into_iter()
                    .flatten()
                    .map(|path| {
                        let mut full = Vec::with_capacity(path.len() + 1);
                        full.push(value.clone());
                        full.extend(path);
                        full
                    })
                    .collect()
            }
        })
    }
}
