//! A k-d tree over fixed-dimension points.
//!
//! Trees grow one point at a time with [`KdTree::insert`] or are built
//! balanced in one pass with [`KdTree::build`]. Either shape answers radius
//! queries through [`KdTree::in_range`], which appends into a caller-owned
//! buffer so repeated queries can reuse one allocation.
//!
//! ```
//! use kdtree::KdTree;
//!
//! let tree = KdTree::build(vec![[0.1, 0.2], [0.4, 0.4], [0.9, 0.9]]);
//!
//! let mut found = Vec::with_capacity(tree.len());
//! tree.in_range(&[0.0, 0.0], 0.25, &mut found);
//! assert_eq!(found, vec![0]);
//!
//! found.clear();
//! tree.in_range(&[0.0, 0.0], 0.6, &mut found);
//! found.sort_unstable();
//! assert_eq!(found, vec![0, 1]);
//! ```
mod distance;
mod error;
mod index;
#[allow(clippy::module_name_repetitions)]
mod linear;
mod tree;

pub use distance::{euclidean, squared_euclidean};
pub use error::{KdTreeError, Result};
pub use index::RangeIndex;
pub use linear::LinearIndex;
pub use tree::kdtree::KdTree;
pub use tree::Node;
