//! Core rose tree model and structural transforms.

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// An ordered sequence of subtrees.
pub type Branches<A> = Vec<RoseTree<A>>;

/// A multi-way tree: a value plus zero or more ordered child subtrees.
///
/// Empty `branches` denotes a leaf. The derived `PartialEq`/`Eq` compare
/// the full structure; the shallow combinators live in
/// [`crate::equivalence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoseTree<A> {
    pub value: A,
    pub branches: Branches<A>,
}

impl<A> RoseTree<A> {
    /// Builds a node from a value and already-built child subtrees.
    pub fn make(value: A, branches: Branches<A>) -> Self {
        Self { value, branches }
    }

    /// A leaf: `make(value, vec![])`.
    pub fn of(value: A) -> Self {
        Self::make(value, Vec::new())
    }

    /// The root value.
    pub fn extract(&self) -> &A {
        &self.value
    }

    pub fn is_leaf(&self) -> bool {
        self.branches.is_empty()
    }

    /// Builds a tree top-down from a seed.
    ///
    /// `gen` maps a seed to the node value and the child seeds, which are
    /// unfolded the same way. Termination is the generator's contract: a
    /// generator that never returns an empty seed list recurses without
    /// bound. See [`RoseTree::try_unfold`] for a guarded variant.
    #[instrument(level = "trace", skip_all)]
    pub fn unfold<B>(seed: B, gen: &impl Fn(B) -> (A, Vec<B>)) -> Self {
        let (value, seeds) = gen(seed);
        Self {
            value,
            branches: Self::unfold_branches(seeds, gen),
        }
    }

    /// Unfolds each seed into a subtree, preserving seed order.
    pub fn unfold_branches<B>(seeds: Vec<B>, gen: &impl Fn(B) -> (A, Vec<B>)) -> Branches<A> {
        seeds.into_iter().map(|seed| Self::unfold(seed, gen)).collect()
    }

    /// Like [`RoseTree::unfold`], but fails once the tree grows deeper
    /// than `max_depth` levels (the root counts as level 1).
    #[instrument(level = "trace", skip_all)]
    pub fn try_unfold<B>(
        seed: B,
        gen: &impl Fn(B) -> (A, Vec<B>),
        max_depth: usize,
    ) -> TreeResult<Self> {
        Self::try_unfold_at(seed, gen, max_depth, 1)
    }

    fn try_unfold_at<B>(
        seed: B,
        gen: &impl Fn(B) -> (A, Vec<B>),
        limit: usize,
        depth: usize,
    ) -> TreeResult<Self> {
        if depth > limit {
            return Err(TreeError::DepthLimitExceeded { limit });
        }
        let (value, seeds) = gen(seed);
        let mut branches = Vec::with_capacity(seeds.len());
        for seed in seeds {
            branches.push(Self::try_unfold_at(seed, gen, limit, depth + 1)?);
        }
        Ok(Self { value, branches })
    }

    /// Applies `f` to every value, rebuilding an isomorphic tree.
    pub fn map<B>(&self, f: &impl Fn(&A) -> B) -> RoseTree<B> {
        RoseTree {
            value: f(&self.value),
            branches: self.branches.iter().map(|branch| branch.map(f)).collect(),
        }
    }

    /// Grafts a replacement tree into every node.
    ///
    /// For each node, `f(&value)` yields a tree whose value replaces the
    /// node's value and whose branches are spliced in ahead of the
    /// node's own (recursively chained) branches.
    pub fn chain<B>(&self, f: &impl Fn(&A) -> RoseTree<B>) -> RoseTree<B> {
        let RoseTree { value, mut branches } = f(&self.value);
        branches.extend(self.branches.iter().map(|branch| branch.chain(f)));
        RoseTree { value, branches }
    }

    /// Applies a tree of functions to a tree of values.
    ///
    /// `self` is the function tree; the function at each node is mapped
    /// over `fb`, threading the grafting rule of [`RoseTree::chain`].
    pub fn ap<B, C>(&self, fb: &RoseTree<B>) -> RoseTree<C>
    where
        A: Fn(&B) -> C,
    {
        self.chain(&|f| fb.map(f))
    }

    /// Comonadic extension: every node's new value is `f` applied to the
    /// entire subtree rooted there. Shape is preserved.
    pub fn extend<B>(&self, f: &impl Fn(&RoseTree<A>) -> B) -> RoseTree<B> {
        RoseTree {
            value: f(self),
            branches: self.branches.iter().map(|branch| branch.extend(f)).collect(),
        }
    }

    /// `extend` with the identity: a tree of subtrees.
    pub fn duplicate(&self) -> RoseTree<RoseTree<A>>
    where
        A: Clone,
    {
        self.extend(&|subtree| subtree.clone())
    }

    /// Number of levels; 1 for a leaf.
    #[instrument(level = "trace", skip_all)]
    pub fn depth(&self) -> usize {
        1 + self
            .branches
            .iter()
            .map(|branch| branch.depth())
            .max()
            .unwrap_or(0)
    }

    /// Leaf values, left-to-right.
    #[instrument(level = "trace", skip_all)]
    pub fn leaves(&self) -> Vec<&A> {
        if self.branches.is_empty() {
            vec![&self.value]
        } else {
            let mut leaves = Vec::new();
            for branch in &self.branches {
                leaves.extend(branch.leaves());
            }
            leaves
        }
    }

    /// Whether any node value satisfies `pred`.
    pub fn exists(&self, pred: &impl Fn(&A) -> bool) -> bool {
        pred(&self.value) || self.branches.iter().any(|branch| branch.exists(pred))
    }

    /// Membership under a caller-supplied equivalence.
    pub fn contains(&self, a: &A, eq: &impl Fn(&A, &A) -> bool) -> bool {
        self.exists(&|value| eq(a, value))
    }

    /// Total node count.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl<A: Clone> RoseTree<RoseTree<A>> {
    /// Collapses one level of a tree of trees via the grafting rule.
    pub fn flatten(&self) -> RoseTree<A> {
        self.chain(&|subtree| subtree.clone())
    }
}
