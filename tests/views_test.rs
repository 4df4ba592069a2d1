//! Tests for the edge-pair and root-to-leaf path views

use rstest::{fixture, rstest};

use rstree::util::testing;
use rstree::RoseTree;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn countdown(n: u32) -> (u32, Vec<u32>) {
    (n, if n > 1 { (1..n).collect() } else { Vec::new() })
}

#[fixture]
fn countdown_tree() -> RoseTree<u32> {
    RoseTree::unfold(5, &countdown)
}

// ============================================================
// Pair Tests
// ============================================================

#[test]
fn given_small_tree_when_listing_pairs_then_preorder_edge_list() {
    let tree = RoseTree::make(
        1,
        vec![RoseTree::of(2), RoseTree::make(3, vec![RoseTree::of(4)])],
    );

    let pairs = tree.to_pairs();

    assert_eq!(
        pairs,
        vec![
            (RoseTree::of(1), RoseTree::of(2)),
            (RoseTree::of(1), RoseTree::of(3)),
            (RoseTree::of(3), RoseTree::of(4)),
        ]
    );
}

#[rstest]
fn given_countdown_tree_when_listing_pairs_then_one_pair_per_edge(
    countdown_tree: RoseTree<u32>,
) {
    let pairs = countdown_tree.to_pairs();

    // every node except the root has exactly one incoming edge
    assert_eq!(pairs.len(), countdown_tree.count() - 1);

    // endpoints are singleton leaves carrying only the edge values
    assert!(pairs
        .iter()
        .all(|(parent, child)| parent.is_leaf() && child.is_leaf()));

    // the root's edges come first, left-to-right
    let root_children: Vec<u32> = pairs
        .iter()
        .take(4)
        .map(|(_, child)| child.value)
        .collect();
    assert_eq!(root_children, vec![1, 2, 3, 4]);
    assert!(pairs.iter().take(4).all(|(parent, _)| parent.value == 5));
}

#[test]
fn given_leaf_when_listing_pairs_then_no_edges() {
    assert_eq!(RoseTree::of(1).to_pairs(), vec![]);
}

// ============================================================
// Path Tests
// ============================================================

#[test]
fn given_small_tree_when_listing_paths_then_one_per_leaf() {
    let tree = RoseTree::make(
        1,
        vec![RoseTree::of(2), RoseTree::make(3, vec![RoseTree::of(4)])],
    );

    assert_eq!(tree.to_paths(), vec![vec![1, 2], vec![1, 3, 4]]);
}

#[rstest]
fn given_countdown_tree_when_listing_paths_then_all_run_root_to_leaf(
    countdown_tree: RoseTree<u32>,
) {
    let paths = countdown_tree.to_paths();

    assert_eq!(paths.len(), countdown_tree.leaves().len());
    for path in &paths {
        assert_eq!(path[0], 5, "every path starts at the root");
        assert_eq!(
            *path.last().unwrap(),
            1,
            "every path ends where the generator stops producing seeds"
        );
    }

    // leftmost leaf first, rightmost leaf last
    assert_eq!(paths[0], vec![5, 1]);
    assert_eq!(*paths.last().unwrap(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn given_leaf_when_listing_paths_then_single_singleton_path() {
    assert_eq!(RoseTree::of('a').to_paths(), vec![vec!['a']]);
}
