//! 2-dimensional text rendering of trees.

use std::fmt;

use crate::tree::RoseTree;

fn draw<A: fmt::Display>(indentation: &str, branches: &[RoseTree<A>]) -> String {
    let mut rendered = String::new();
    let len = branches.len();
    for (i, branch) in branches.iter().enumerate() {
        let is_last = i == len - 1;
        rendered.push_str(indentation);
        rendered.push_str(if is_last { "└" } else { "├" });
        rendered.push_str("─ ");
        rendered.push_str(&branch.value.to_string());
        let continuation = if len > 1 && !is_last { "│  " } else { "   " };
        rendered.push_str(&draw(
            &format!("{indentation}{continuation}"),
            &branch.branches,
        ));
    }
    rendered
}

/// Renders a branch list, each branch on its own `\n`-prefixed line.
pub fn draw_branches<A: fmt::Display>(branches: &[RoseTree<A>]) -> String {
    draw("\n", branches)
}

impl<A: fmt::Display> RoseTree<A> {
    /// Neat 2-dimensional drawing of the tree.
    ///
    /// ```
    /// use rstree::RoseTree;
    ///
    /// let tree = RoseTree::make('a', vec![
    ///     RoseTree::of('b'),
    ///     RoseTree::make('c', vec![RoseTree::of('d')]),
    /// ]);
    /// assert_eq!(tree.draw(), "a\n├─ b\n└─ c\n   └─ d");
    /// ```
    pub fn draw(&self) -> String {
        format!("{}{}", self.value, draw_branches(&self.branches))
    }
}

impl<A: fmt::Display> fmt::Display for RoseTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.draw())
    }
}

impl<A> RoseTree<A> {
    /// `make(value, [..])`-style debug representation, recursively
    /// applying the supplied value renderer.
    pub fn show_with(&self, show: &impl Fn(&A) -> String) -> String {
        if self.branches.is_empty() {
            format!("make({})", show(&self.value))
        } else {
            let inner: Vec<String> = self
                .branches
                .iter()
                .map(|branch| branch.show_with(show))
                .collect();
            format!("make({}, [{}])", show(&self.value), inner.join(", "))
        }
    }
}
