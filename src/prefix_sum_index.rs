use std::fmt;

use crate::error::Result;
use crate::fenwick_tree::FenwickTree;
use crate::groups::WrappingAdditive;

/// Prefix sums over `len` unsigned 64-bit cells, indexed from 1.
///
/// All arithmetic wraps modulo 2^64. As long as every logical cell stays non-negative, sums over
/// any range are exact even when negative deltas make intermediate tree cells wrap. Keeping sums
/// below 2^64 is up to the caller.
///
/// Out-of-range indices panic. Validate untrusted input before calling.
#[derive(Clone, Debug)]
pub struct PrefixSumIndex {
    tree: FenwickTree<WrappingAdditive<u64>>,
}

impl PrefixSumIndex {
    /// `len` zeroed cells. Panics if `len == 0`.
    pub fn new(len: usize) -> Self {
        Self {
            tree: FenwickTree::new(WrappingAdditive::new(), len),
        }
    }

    /// Like [`PrefixSumIndex::new`], but allocation failure is returned instead of aborting.
    pub fn try_new(len: usize) -> Result<Self> {
        Ok(Self {
            tree: FenwickTree::try_new(WrappingAdditive::new(), len)?,
        })
    }

    /// An index whose cell `i` starts at `values[i - 1]`. Panics if `values` is empty.
    pub fn from_values(values: &[u64]) -> Result<Self> {
        Ok(Self {
            tree: FenwickTree::build(WrappingAdditive::new(), values.iter().cloned())?,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Tree cells `T[1..=len]`, each the sum of the `lowbit(i)` cells ending at `i`.
    #[inline]
    pub fn storage(&self) -> &[u64] {
        self.tree.storage()
    }

    /// `A[i] += delta`
    #[inline]
    pub fn add(&mut self, i: usize, delta: i64) {
        self.tree.add(i, delta as u64);
    }

    /// `A[1] + ... + A[k]`, zero for `k == 0`.
    #[inline]
    pub fn prefix_sum(&self, k: usize) -> u64 {
        self.tree.prefix_sum(k)
    }

    /// `A[l] + ... + A[r]` for `1 <= l <= r <= len`.
    #[inline]
    pub fn range_sum(&self, l: usize, r: usize) -> u64 {
        self.tree.range_sum(l, r)
    }

    #[inline]
    pub fn get(&self, i: usize) -> u64 {
        self.tree.get(i)
    }

    /// `A[i] = value`, leaving every other cell as it was.
    pub fn set(&mut self, i: usize, value: u64) {
        let delta = (value as i64).wrapping_sub(self.get(i) as i64);
        self.add(i, delta);
    }
}

impl fmt::Display for PrefixSumIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fenwick Tree (size={}):", self.len())?;
        for (i, t) in self.storage().iter().enumerate() {
            writeln!(f, "  index {}: {}", i + 1, t)?;
        }
        Ok(())
    }
}
