use conv::ValueFrom;
use tinyvec::TinyVec;

use super::{node::Node, presort::PreSorted};
use crate::{
    distance::squared_euclidean,
    error::{KdTreeError, Result},
    index::RangeIndex,
};

/// Where a freshly split median gets attached during a bulk build.
#[derive(Clone, Copy)]
enum Link {
    Root,
    Left(usize),
    Right(usize),
}

/// A k-d tree over `K`-dimensional points.
///
/// Nodes are stored in a slot vector and refer to their children by slot id.
/// A node's slot id is the handle returned by [`KdTree::insert`] and reported
/// by [`KdTree::in_range`]; for [`KdTree::build`] it is the position of the
/// point in the input.
///
/// For every node splitting on dimension `d`, all points in its left subtree
/// have a `d` coordinate strictly smaller than the node's, and all points in its
/// right subtree have one greater or equal.
#[derive(Clone, Debug)]
pub struct KdTree<const K: usize> {
    root: usize,
    nodes: Vec<Node<K>>,
}

impl<const K: usize> Default for KdTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize> KdTree<K> {
    /// Create an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if `K` is zero.
    #[must_use]
    pub fn new() -> Self {
        assert!(K > 0, "a k-d tree needs at least one dimension");
        KdTree {
            root: usize::MAX,
            nodes: Vec::new(),
        }
    }

    /// Build a balanced tree from `points`.
    ///
    /// Each coordinate ordering is sorted once; every level then only splits
    /// the orderings around the median of its dimension, so the whole build
    /// costs O(n log n). Slot ids follow the input order.
    ///
    /// # Panics
    ///
    /// Panics if `K` is zero.
    #[must_use]
    pub fn build(points: Vec<[f64; K]>) -> Self {
        let mut tree = Self::new();
        tree.nodes = points
            .iter()
            .enumerate()
            .map(|(slot_id, &point)| Node::new(slot_id, point))
            .collect();
        if points.is_empty() {
            return tree;
        }

        // Highly duplicated input degenerates into a chain, so walk an explicit
        // stack instead of recursing.
        let mut pending = vec![(PreSorted::new(&points), 0, Link::Root)];
        while let Some((sorted, depth, link)) = pending.pop() {
            let split = depth % K;
            let (median, left, right) = sorted.split(&points, split);
            tree.nodes[median].split = split;
            match link {
                Link::Root => tree.root = median,
                Link::Left(parent) => tree.nodes[parent].left = median,
                Link::Right(parent) => tree.nodes[parent].right = median,
            }

            if !left.is_empty() {
                pending.push((left, depth + 1, Link::Left(median)));
            }
            if !right.is_empty() {
                pending.push((right, depth + 1, Link::Right(median)));
            }
        }
        tree
    }

    /// Build a balanced tree from interleaved coordinates `x0, y0, x1, y1, ...`.
    ///
    /// # Errors
    ///
    /// Returns [`KdTreeError::InterleavedLength`] if `coords` does not hold a
    /// whole number of points.
    ///
    /// # Panics
    ///
    /// Panics if `K` is zero.
    pub fn from_interleaved(coords: &[f64]) -> Result<Self> {
        assert!(K > 0, "a k-d tree needs at least one dimension");
        if coords.len() % K != 0 {
            return Err(KdTreeError::InterleavedLength {
                len: coords.len(),
                dimension: K,
            });
        }
        let points = coords
            .chunks_exact(K)
            .map(|chunk| std::array::from_fn(|dim| chunk[dim]))
            .collect();
        Ok(Self::build(points))
    }

    /// Insert a point below the existing nodes and return its slot id.
    ///
    /// The point descends left while its coordinate on the current split
    /// dimension is strictly smaller, right otherwise, and is attached at the
    /// first empty child slot with the next split dimension. The tree is never
    /// rebalanced, so sorted input produces a linear chain.
    pub fn insert(&mut self, point: [f64; K]) -> usize {
        let slot_id = self.nodes.len();
        let mut node = Node::new(slot_id, point);

        if self.root == usize::MAX {
            self.nodes.push(node);
            self.root = slot_id;
            return slot_id;
        }

        let mut parent = self.root;
        let mut goes_left = self.nodes[parent].goes_left(&point);
        loop {
            let current = &self.nodes[parent];
            let next = if goes_left { current.left } else { current.right };
            if next == usize::MAX {
                break;
            }
            parent = next;
            goes_left = self.nodes[parent].goes_left(&point);
        }

        node.split = (self.nodes[parent].split + 1) % K;
        self.nodes.push(node);
        if goes_left {
            self.nodes[parent].left = slot_id;
        } else {
            self.nodes[parent].right = slot_id;
        }
        slot_id
    }

    /// Append the slot ids of all points within `radius` of `point` to `result`.
    ///
    /// The bound is inclusive, so a radius of zero reports exact matches.
    /// Existing entries of `result` are left alone; clear it between calls to
    /// reuse its allocation. A negative or NaN radius matches nothing. Results
    /// come in traversal order.
    pub fn in_range(&self, point: &[f64; K], radius: f64, result: &mut Vec<usize>) {
        if self.root == usize::MAX || !(radius >= 0.0) {
            return;
        }
        let radius_squared = radius * radius;

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[usize; 33]> = TinyVec::new();
        stack.push(self.root);
        while let Some(slot_id) = stack.pop() {
            let node = &self.nodes[slot_id];
            if squared_euclidean(point, &node.point) <= radius_squared {
                result.push(slot_id);
            }

            let (near, far) = if node.goes_left(point) {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };

            // The far side can only hold matches if the query ball crosses
            // the splitting hyperplane.
            let plane = point[node.split] - node.point[node.split];
            if far != usize::MAX && plane * plane <= radius_squared {
                stack.push(far);
            }
            if near != usize::MAX {
                stack.push(near);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> Option<usize> {
        (self.root != usize::MAX).then_some(self.root)
    }

    #[must_use]
    pub fn node(&self, slot_id: usize) -> &Node<K> {
        &self.nodes[slot_id]
    }

    #[must_use]
    pub fn point(&self, slot_id: usize) -> &[f64; K] {
        &self.nodes[slot_id].point
    }

    /// Iterate over `(slot_id, point)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f64; K])> + '_ {
        self.nodes.iter().map(|node| (node.slot_id, &node.point))
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn height(&self) -> usize {
        self.depths().max().unwrap_or(0)
    }

    /// Mean number of nodes on the path from the root to each node, or `None`
    /// for an empty tree.
    #[must_use]
    pub fn average_depth(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let total: usize = self.depths().sum();
        let total = f64::value_from(total).ok()?;
        let count = f64::value_from(self.len()).ok()?;
        Some(total / count)
    }

    /// Depth of every node, root counted as 1.
    fn depths(&self) -> impl Iterator<Item = usize> + '_ {
        let mut stack = Vec::new();
        if self.root != usize::MAX {
            stack.push((self.root, 1));
        }
        std::iter::from_fn(move || {
            let (slot_id, depth) = stack.pop()?;
            let node = &self.nodes[slot_id];
            for child in [node.left, node.right] {
                if child != usize::MAX {
                    stack.push((child, depth + 1));
                }
            }
            Some(depth)
        })
    }
}

impl<const K: usize> From<Vec<[f64; K]>> for KdTree<K> {
    fn from(points: Vec<[f64; K]>) -> Self {
        Self::build(points)
    }
}

impl<const K: usize> FromIterator<[f64; K]> for KdTree<K> {
    fn from_iter<I: IntoIterator<Item = [f64; K]>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

impl<const K: usize> RangeIndex<K> for KdTree<K> {
    fn insert(&mut self, point: [f64; K]) -> usize {
        KdTree::insert(self, point)
    }

    fn in_range(&self, point: &[f64; K], radius: f64, result: &mut Vec<usize>) {
        KdTree::in_range(self, point, radius, result);
    }

    fn num_points(&self) -> usize {
        self.len()
    }
}
