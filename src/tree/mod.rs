pub mod kdtree;
mod node;
mod presort;

pub use node::Node;
