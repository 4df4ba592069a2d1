//! Multi-way (rose) trees and their traversal algebra.
//!
//! A [`RoseTree`] is a finite, rooted, ordered tree in which every node
//! carries a value and any number of ordered child subtrees. Trees are
//! immutable values: every operation builds a new tree, so holders of
//! the original never observe a change.
//!
//! Construction is either explicit ([`RoseTree::make`], [`RoseTree::of`])
//! or top-down from a seed ([`RoseTree::unfold`]); collapsing is
//! bottom-up via [`RoseTree::fold`]. In between sit the structural
//! transforms: [`RoseTree::map`], grafting with [`RoseTree::chain`], and
//! comonadic extension with [`RoseTree::extend`].
//!
//! ```
//! use rstree::RoseTree;
//!
//! let tree = RoseTree::make("a", vec![
//!     RoseTree::of("b"),
//!     RoseTree::of("c"),
//!     RoseTree::make("d", vec![RoseTree::of("e"), RoseTree::of("f")]),
//! ]);
//! assert_eq!(tree.draw(), "a\n├─ b\n├─ c\n└─ d\n   ├─ e\n   └─ f");
//! ```
//!
//! Recursive operations grow the call stack proportionally to tree
//! depth. For untrusted inputs use [`RoseTree::try_unfold`] and the
//! work-list based iterators ([`RoseTree::iter`],
//! [`RoseTree::iter_postorder`]), which do not recurse.

pub mod algebra;
pub mod draw;
pub mod equivalence;
pub mod errors;
pub mod fold;
pub mod iter;
pub mod tree;
pub mod util;
mod views;

pub use algebra::{bool_algebra, f64_field, BooleanAlgebra, Field};
pub use draw::draw_branches;
pub use equivalence::{branch_equivalence, root_equivalence};
pub use errors::{TreeError, TreeResult};
pub use fold::Monoid;
pub use iter::{Iter, PostOrderIter};
pub use tree::{Branches, RoseTree};
