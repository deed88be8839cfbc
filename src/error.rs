use thiserror::Error;

/// Errors raised while turning raw coordinate buffers into a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    #[error("interleaved buffer of length {len} is not a multiple of dimension {dimension}")]
    InterleavedLength { len: usize, dimension: usize },
}

pub type Result<T> = std::result::Result<T, KdTreeError>;
