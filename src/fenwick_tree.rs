use std::iter::FusedIterator;

use log::{debug, trace};
use num::traits::WrappingNeg;

use crate::error::{Error, Result};
use crate::groups::{AbelianGroup, CommutativeMonoid};

/// Value of the lowest set bit of `n`, zero for zero.
#[inline]
pub fn lowbit<I: num::PrimInt + WrappingNeg>(n: I) -> I {
    n & n.wrapping_neg()
}

/// Storage cells an update of logical cell `i` has to touch: `i, i + lowbit(i), ...` while `<= len`.
///
/// Every step clears the lowest set bit and carries into a higher one, so the walk is at most
/// `bits(len)` long.
#[derive(Clone, Debug)]
pub struct UpdatePath {
    i: usize,
    len: usize,
}

impl UpdatePath {
    #[inline]
    pub fn new(i: usize, len: usize) -> Self {
        // lowbit(0) == 0 would never advance
        assert!(i != 0, "update path must start at a 1-based index");
        Self { i, len }
    }
}

impl Iterator for UpdatePath {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.i > self.len {
            return None;
        }
        let i = self.i;
        self.i = i.saturating_add(lowbit(i));
        Some(i)
    }
}

impl FusedIterator for UpdatePath {}

/// Storage cells whose ranges tile the prefix `1..=k`, one per set bit of `k`, highest index first.
#[derive(Clone, Debug)]
pub struct QueryPath {
    j: usize,
}

impl QueryPath {
    #[inline]
    pub fn new(k: usize) -> Self {
        Self { j: k }
    }
}

impl Iterator for QueryPath {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.j == 0 {
            return None;
        }
        let j = self.j;
        self.j = j - lowbit(j);
        Some(j)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.j.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for QueryPath {}
impl FusedIterator for QueryPath {}

/// Fixed-length Fenwick tree over the cells `1..=len`.
///
/// Indices are 1-based. Any index outside the documented range is a caller bug and panics.
#[derive(Clone, Debug)]
pub struct FenwickTree<G: CommutativeMonoid> {
    group: G,
    // data[i] = A[i - lowbit(i) + 1] + ... + A[i]; data[0] is never read
    data: Vec<G::Elem>,
}

impl<G: CommutativeMonoid> FenwickTree<G> {
    /// All cells start at the identity.
    ///
    /// O(n)
    pub fn new(group: G, len: usize) -> Self {
        assert!(len != 0, "a Fenwick tree needs at least one cell");
        let mut data = Vec::new();
        data.resize_with(len + 1, || group.id());
        debug!("new Fenwick tree with {} cells", len);
        Self { group, data }
    }

    /// Like [`FenwickTree::new`], but reports allocation failure instead of aborting.
    pub fn try_new(group: G, len: usize) -> Result<Self> {
        assert!(len != 0, "a Fenwick tree needs at least one cell");
        let cells = len.checked_add(1).ok_or(Error::CapacityOverflow { len })?;

        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|source| Error::Alloc { len, source })?;
        data.resize_with(cells, || group.id());
        debug!("new Fenwick tree with {} cells", len);

        Ok(Self { group, data })
    }

    /// Builds the tree whose logical cells are `values`, in order.
    ///
    /// O(n), cheaper than `len` calls to `add`.
    pub fn build<I: IntoIterator<Item = G::Elem>>(group: G, values: I) -> Result<Self> {
        let values = values.into_iter();
        let hint = values.size_hint().0;
        let cells = hint
            .checked_add(1)
            .ok_or(Error::CapacityOverflow { len: hint })?;

        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|source| Error::Alloc { len: hint, source })?;
        data.push(group.id());
        data.extend(values);

        let len = data.len() - 1;
        assert!(len != 0, "a Fenwick tree needs at least one cell");

        // each cell is final once every smaller index has been folded into it
        for i in 1..=len {
            let parent = i + lowbit(i);
            if parent <= len {
                data[parent] = group.add(data[parent].clone(), data[i].clone());
            }
        }
        debug!("built Fenwick tree with {} cells", len);

        Ok(Self { group, data })
    }

    /// Number of logical cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    /// Tree cells `T[1..=len]`.
    #[inline]
    pub fn storage(&self) -> &[G::Elem] {
        &self.data[1..]
    }

    #[inline]
    fn check_index(&self, i: usize) {
        assert!(
            (1..=self.len()).contains(&i),
            "index {} out of range 1..={}",
            i,
            self.len()
        );
    }

    /// `A[i] += dx`
    ///
    /// O(log n)
    pub fn add(&mut self, i: usize, dx: G::Elem) {
        self.check_index(i);
        for k in UpdatePath::new(i, self.len()) {
            trace!("update index: {}, lowbit {}", k, lowbit(k));
            self.data[k] = self.group.add(self.data[k].clone(), dx.clone());
        }
    }

    /// `A[1] + ... + A[k]`, the identity for `k == 0`.
    ///
    /// O(log n)
    pub fn prefix_sum(&self, k: usize) -> G::Elem {
        assert!(
            k <= self.len(),
            "prefix length {} exceeds {}",
            k,
            self.len()
        );
        let mut ps = self.group.id();
        for j in QueryPath::new(k) {
            trace!("sum index: {}, lowbit {}", j, lowbit(j));
            ps = self.group.add(self.data[j].clone(), ps); // j is to the left of `ps`
        }
        ps
    }
}

impl<G: AbelianGroup> FenwickTree<G> {
    /// `A[l] + ... + A[r]`
    ///
    /// O(log n)
    pub fn range_sum(&self, l: usize, r: usize) -> G::Elem {
        assert!(
            1 <= l && l <= r && r <= self.len(),
            "range {}..={} out of 1..={}",
            l,
            r,
            self.len()
        );
        if l == 1 {
            self.prefix_sum(r)
        } else {
            self.group.sub(self.prefix_sum(r), self.prefix_sum(l - 1))
        }
    }

    /// Same value as `range_sum(i, i)`, but only walks the cells under `T[i]`.
    ///
    /// Avg: O(1), Worst case: O(log i)
    pub fn get(&self, i: usize) -> G::Elem {
        self.check_index(i);
        let mut x = self.data[i].clone();
        let bottom = i - lowbit(i);
        for j in QueryPath::new(i - 1).take_while(|&j| j > bottom) {
            x = self.group.sub(x, self.data[j].clone());
        }
        x
    }

    /// `A[i] = x`. Prefer `add` when the delta is already known, this has to `get` first.
    ///
    /// O(log n)
    pub fn set(&mut self, i: usize, x: G::Elem) {
        let dx = self.group.sub(x, self.get(i));
        self.add(i, dx);
    }
}
