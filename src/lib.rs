pub mod groups;

#[cfg(test)]
mod bench;
mod error;
mod fenwick_tree;
mod prefix_sum_index;

pub use error::{Error, Result};
pub use fenwick_tree::{lowbit, FenwickTree, QueryPath, UpdatePath};
pub use prefix_sum_index::PrefixSumIndex;
