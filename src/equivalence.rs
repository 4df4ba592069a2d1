//! Equivalence combinators over trees.
//!
//! Both combinators take the value equivalence as an explicit capability
//! and return an equivalence on trees.

use itertools::{EitherOrBoth, Itertools};

use crate::tree::RoseTree;

/// Trees are equivalent iff their root values are, ignoring branches
/// entirely (the shallow, root-only equivalence).
pub fn root_equivalence<A, E>(eq: E) -> impl Fn(&RoseTree<A>, &RoseTree<A>) -> bool
where
    E: Fn(&A, &A) -> bool,
{
    move |x, y| eq(&x.value, &y.value)
}

/// Trees are equivalent iff their root values are and their immediate
/// branch root values match pairwise, position by position. Differing
/// branch counts are never equivalent; deeper structure is ignored.
pub fn branch_equivalence<A, E>(eq: E) -> impl Fn(&RoseTree<A>, &RoseTree<A>) -> bool
where
    E: Fn(&A, &A) -> bool,
{
    move |x, y| {
        eq(&x.value, &y.value)
            && x.branches
                .iter()
                .zip_longest(y.branches.iter())
                .all(|pair| match pair {
                    EitherOrBoth::Both(bx, by) => eq(&bx.value, &by.value),
                    EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => false,
                })
    }
}
