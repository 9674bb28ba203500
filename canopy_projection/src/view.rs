// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top view, bottom view, and vertical order.
//!
//! Each projection performs one full level-order walk and folds the visits
//! into a column index keyed by horizontal offset. Nothing is kept between
//! calls and the tree is only borrowed.

use alloc::vec::Vec;

use canopy_tree::Node;

use crate::backend::Backend;
use crate::backends::Ordered;
use crate::column::Column;
use crate::walk::walk;

/// Values of the first node reached at each horizontal offset, leftmost column
/// first.
///
/// Because the walk is level order with left children queued before right
/// children, "first reached" means the shallowest node of the column, and the
/// leftmost one in level order if several share that depth.
///
/// ```rust
/// use canopy_projection::top_view;
/// use canopy_tree::from_level_order;
///
/// let literal: Vec<_> = (1..=7).map(Some).collect();
/// let root = from_level_order(&literal).unwrap();
/// assert_eq!(top_view(root.as_ref()), [4, 2, 1, 3, 7]);
/// assert!(top_view::<i32>(None).is_empty());
/// ```
pub fn top_view<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    top_view_with(root, Ordered::new())
}

/// [`top_view`] accumulated in the given backend.
///
/// The backend is cleared before use.
pub fn top_view_with<T, B>(root: Option<&Node<T>>, mut index: B) -> Vec<T>
where
    T: Clone,
    B: Backend<T>,
{
    index.clear();
    let mut nodes = 0_usize;
    for visit in walk(root) {
        nodes += 1;
        index.insert_if_vacant(visit.offset(), visit.value().clone());
    }
    tracing::debug!(view = "top", columns = index.len(), nodes, "projected");
    index.into_sorted_values()
}

/// Values of the last node reached at each horizontal offset, leftmost column
/// first.
///
/// "Last reached" is the deepest node of the column, and the rightmost one in
/// level order if several share that depth.
///
/// ```rust
/// use canopy_projection::bottom_view;
/// use canopy_tree::from_level_order;
///
/// let literal: Vec<_> = (1..=7).map(Some).collect();
/// let root = from_level_order(&literal).unwrap();
/// assert_eq!(bottom_view(root.as_ref()), [4, 2, 6, 3, 7]);
/// ```
pub fn bottom_view<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    bottom_view_with(root, Ordered::new())
}

/// [`bottom_view`] accumulated in the given backend.
///
/// The backend is cleared before use.
pub fn bottom_view_with<T, B>(root: Option<&Node<T>>, mut index: B) -> Vec<T>
where
    T: Clone,
    B: Backend<T>,
{
    index.clear();
    let mut nodes = 0_usize;
    for visit in walk(root) {
        nodes += 1;
        index.insert(visit.offset(), visit.value().clone());
    }
    tracing::debug!(view = "bottom", columns = index.len(), nodes, "projected");
    index.into_sorted_values()
}

/// Every value grouped by horizontal offset, leftmost column first.
///
/// Within a column, values are ordered by depth and then by value, so nodes
/// that share both offset and depth come out in ascending order regardless of
/// the order they were visited in.
///
/// ```rust
/// use canopy_projection::vertical_order;
/// use canopy_tree::Node;
///
/// //      1
/// //    /   \
/// //   2     3
/// //    \   / \
/// //     4 5   6
/// let root = Node::leaf(1)
///     .with_left(Node::leaf(2).with_right(Node::leaf(4)))
///     .with_right(Node::leaf(3).with_left(Node::leaf(5)).with_right(Node::leaf(6)));
///
/// assert_eq!(
///     vertical_order(Some(&root)),
///     [vec![2], vec![1, 4, 5], vec![3], vec![6]]
/// );
/// ```
pub fn vertical_order<T: Ord + Clone>(root: Option<&Node<T>>) -> Vec<Vec<T>> {
    vertical_order_with(root, Ordered::new())
}

/// [`vertical_order`] accumulated in the given backend.
///
/// The backend is cleared before use.
pub fn vertical_order_with<T, B>(root: Option<&Node<T>>, mut index: B) -> Vec<Vec<T>>
where
    T: Ord + Clone,
    B: Backend<Column<T>>,
{
    index.clear();
    let mut nodes = 0_usize;
    for visit in walk(root) {
        nodes += 1;
        index
            .entry_or_insert_with(visit.offset(), Column::new)
            .push(visit.depth(), visit.value().clone());
    }
    tracing::debug!(view = "vertical", columns = index.len(), nodes, "projected");
    index
        .into_sorted_values()
        .into_iter()
        .map(Column::into_values)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{bottom_view, top_view, vertical_order};
    use alloc::vec;
    use alloc::vec::Vec;
    use canopy_tree::Node;

    fn balanced() -> Node<i32> {
        Node::leaf(1)
            .with_left(Node::leaf(2).with_left(Node::leaf(4)).with_right(Node::leaf(5)))
            .with_right(Node::leaf(3).with_left(Node::leaf(6)).with_right(Node::leaf(7)))
    }

    //        1
    //      /   \
    //     2     3
    //    /     / \
    //   4     5   6
    //  /         / \
    // 7         8   9
    fn complex() -> Node<i32> {
        Node::leaf(1)
            .with_left(Node::leaf(2).with_left(Node::leaf(4).with_left(Node::leaf(7))))
            .with_right(
                Node::leaf(3)
                    .with_left(Node::leaf(5))
                    .with_right(Node::leaf(6).with_left(Node::leaf(8)).with_right(Node::leaf(9))),
            )
    }

    //      1
    //    /   \
    //   2     3
    //    \   /
    //     4 7
    //    / \
    //   5   6
    fn stacked_column() -> Node<i32> {
        Node::leaf(1)
            .with_left(
                Node::leaf(2)
                    .with_right(Node::leaf(4).with_left(Node::leaf(5)).with_right(Node::leaf(6))),
            )
            .with_right(Node::leaf(3).with_left(Node::leaf(7)))
    }

    fn signed() -> Node<i32> {
        Node::leaf(0)
            .with_left(Node::leaf(-1).with_left(Node::leaf(-2)))
            .with_right(Node::leaf(1).with_right(Node::leaf(2)))
    }

    #[test]
    fn empty_tree() {
        assert!(top_view::<i32>(None).is_empty());
        assert!(bottom_view::<i32>(None).is_empty());
        assert!(vertical_order::<i32>(None).is_empty());
    }

    #[test]
    fn single_node() {
        let root = Node::leaf(1);
        assert_eq!(top_view(Some(&root)), [1]);
        assert_eq!(bottom_view(Some(&root)), [1]);
        assert_eq!(vertical_order(Some(&root)), [vec![1]]);
    }

    #[test]
    fn balanced_tree() {
        let root = balanced();
        assert_eq!(top_view(Some(&root)), [4, 2, 1, 3, 7]);
        assert_eq!(bottom_view(Some(&root)), [4, 2, 6, 3, 7]);
        assert_eq!(
            vertical_order(Some(&root)),
            [vec![4], vec![2], vec![1, 5, 6], vec![3], vec![7]]
        );
    }

    #[test]
    fn complex_tree() {
        let root = complex();
        assert_eq!(top_view(Some(&root)), [7, 4, 2, 1, 3, 6, 9]);
        assert_eq!(bottom_view(Some(&root)), [7, 4, 2, 5, 8, 6, 9]);
    }

    #[test]
    fn first_and_last_reached_at_a_shared_column() {
        let root = stacked_column();
        assert_eq!(top_view(Some(&root)), [2, 1, 3]);
        // 4 and 7 share offset 0 at depth 2; 7 is reached later.
        assert_eq!(bottom_view(Some(&root)), [5, 7, 6]);
    }

    #[test]
    fn leftmost_path_wins_a_tie_at_the_shallowest_depth() {
        //   1
        //    \
        //     2
        //    / \
        //   6   3
        //    \  /
        //    7 4
        //   /  /
        //  8  5
        //  /  /
        // 20 10
        //
        // Column -1 is first reached at depth 5, by 20 (R,L,R,L,L) and then
        // by 10 (R,R,L,L,L).
        let root = Node::leaf(1).with_right(
            Node::leaf(2)
                .with_left(
                    Node::leaf(6)
                        .with_right(Node::leaf(7).with_left(Node::leaf(8).with_left(Node::leaf(20)))),
                )
                .with_right(
                    Node::leaf(3)
                        .with_left(Node::leaf(4).with_left(Node::leaf(5).with_left(Node::leaf(10)))),
                ),
        );
        assert_eq!(top_view(Some(&root)), [20, 1, 2, 3]);
        assert_eq!(bottom_view(Some(&root)), [10, 5, 4, 3]);
        assert_eq!(
            vertical_order(Some(&root)),
            [vec![10, 20], vec![1, 6, 5, 8], vec![2, 4, 7], vec![3]]
        );
    }

    #[test]
    fn single_child_per_level() {
        let root = Node::leaf(1)
            .with_right(Node::leaf(2).with_left(Node::leaf(3).with_right(Node::leaf(4))));
        assert_eq!(top_view(Some(&root)), [1, 2]);
        assert_eq!(bottom_view(Some(&root)), [3, 4]);
        assert_eq!(vertical_order(Some(&root)), [vec![1, 3], vec![2, 4]]);
    }

    #[test]
    fn skewed_trees_look_the_same_from_top_and_bottom() {
        let left = Node::leaf(1).with_left(Node::leaf(2).with_left(Node::leaf(3)));
        let right = Node::leaf(1).with_right(Node::leaf(2).with_right(Node::leaf(3)));
        assert_eq!(top_view(Some(&left)), [3, 2, 1]);
        assert_eq!(bottom_view(Some(&left)), [3, 2, 1]);
        assert_eq!(vertical_order(Some(&left)), [vec![3], vec![2], vec![1]]);
        assert_eq!(top_view(Some(&right)), [1, 2, 3]);
        assert_eq!(bottom_view(Some(&right)), [1, 2, 3]);
        assert_eq!(vertical_order(Some(&right)), [vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn shared_offset_and_depth_sorted_by_value() {
        let root = Node::leaf(1)
            .with_left(Node::leaf(2).with_right(Node::leaf(4)))
            .with_right(Node::leaf(3).with_left(Node::leaf(5)).with_right(Node::leaf(6)));
        assert_eq!(
            vertical_order(Some(&root)),
            [vec![2], vec![1, 4, 5], vec![3], vec![6]]
        );

        // Same shape with the tied values swapped: visit order now disagrees
        // with value order, and value order must win.
        let root = Node::leaf(1)
            .with_left(Node::leaf(2).with_right(Node::leaf(5)))
            .with_right(Node::leaf(3).with_left(Node::leaf(4)).with_right(Node::leaf(6)));
        assert_eq!(
            vertical_order(Some(&root)),
            [vec![2], vec![1, 4, 5], vec![3], vec![6]]
        );
    }

    #[test]
    fn deeper_columns_keep_depth_before_value() {
        let mut root = balanced();
        if let Some(left) = root.left.as_deref_mut()
            && let Some(right) = left.right.as_deref_mut()
        {
            right.left = Some(alloc::boxed::Box::new(Node::leaf(8)));
            right.right = Some(alloc::boxed::Box::new(Node::leaf(9)));
        }
        assert_eq!(
            vertical_order(Some(&root)),
            [vec![4], vec![2, 8], vec![1, 5, 6], vec![3, 9], vec![7]]
        );
    }

    #[test]
    fn negative_values() {
        let root = signed();
        let flattened: Vec<i32> = vertical_order(Some(&root)).into_iter().flatten().collect();
        assert_eq!(top_view(Some(&root)), [-2, -1, 0, 1, 2]);
        assert_eq!(bottom_view(Some(&root)), [-2, -1, 0, 1, 2]);
        assert_eq!(flattened, [-2, -1, 0, 1, 2]);
    }

    #[test]
    fn generic_over_ordered_values() {
        let root = Node::leaf("m")
            .with_left(Node::leaf("b").with_right(Node::leaf("z")))
            .with_right(Node::leaf("q").with_left(Node::leaf("a")));
        assert_eq!(
            vertical_order(Some(&root)),
            [vec!["b"], vec!["m", "a", "z"], vec!["q"]]
        );
    }

    #[cfg(feature = "backend_hash")]
    #[test]
    fn hashed_backend_matches_ordered() {
        use super::{bottom_view_with, top_view_with, vertical_order_with};
        use crate::backends::Hashed;

        for root in [balanced(), complex(), stacked_column(), signed()] {
            let root = Some(&root);
            assert_eq!(top_view_with(root, Hashed::new()), top_view(root));
            assert_eq!(bottom_view_with(root, Hashed::new()), bottom_view(root));
            assert_eq!(vertical_order_with(root, Hashed::new()), vertical_order(root));
        }
    }

    #[test]
    fn backends_are_cleared_before_use() {
        use super::top_view_with;
        use crate::Backend;
        use crate::backends::Ordered;

        let mut stale = Ordered::new();
        stale.insert(0, 99);
        stale.insert(-5, 98);
        let root = balanced();
        assert_eq!(top_view_with(Some(&root), stale), [4, 2, 1, 3, 7]);
    }
}
