/// A single point stored in a [`KdTree`](crate::KdTree).
///
/// Children are referenced by slot id into the owning tree; `usize::MAX` marks
/// an absent child.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<const K: usize> {
    pub slot_id: usize,
    pub point: [f64; K],
    pub split: usize,
    pub left: usize,
    pub right: usize,
}

impl<const K: usize> Node<K> {
    #[must_use]
    pub(crate) fn new(slot_id: usize, point: [f64; K]) -> Node<K> {
        Node {
            slot_id,
            point,
            split: 0,
            left: usize::MAX,
            right: usize::MAX,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left == usize::MAX && self.right == usize::MAX
    }

    #[must_use]
    pub fn left(&self) -> Option<usize> {
        (self.left != usize::MAX).then_some(self.left)
    }

    #[must_use]
    pub fn right(&self) -> Option<usize> {
        (self.right != usize::MAX).then_some(self.right)
    }

    /// Whether `point` belongs to the left subtree of this node.
    #[inline]
    #[must_use]
    pub fn goes_left(&self, point: &[f64; K]) -> bool {
        point[self.split] < self.point[self.split]
    }
}
