//! Fenwick tree (binary indexed tree) over a fixed-size logical array.
//!
//! Supports point updates and inclusive prefix sums in $O(\log n)$ without
//! ever materializing the array itself.
//!
//! # Layout
//!
//! Accumulators are stored 1-indexed in a `Vec<T>` of length `n + 1`. Slot 0
//! is a sentinel that always holds zero. Slot `i` holds the sum of the
//! logical elements at 1-based positions `(i - lowbit(i), i]`, where
//! `lowbit(i) = i & -i`.
//!
//! ```text
//! slot:    1    2    3    4    5    6    7    8
//! covers: [1] [1,2] [3] [1,4] [5] [5,6] [7] [1,8]
//! ```
//!
//! An update at position `p` touches `p, p + lowbit(p), ...` until it leaves
//! the array. A prefix query at `p` reads `p, p - lowbit(p), ...` down to 0.
//! Both walks visit at most $\lfloor \log_2 n \rfloor + 1$ slots.

use crate::accumulator::Accumulator;
use crate::error::{Error, Result};

/// Fixed-capacity prefix-sum store.
#[derive(Clone)]
pub struct FenwickTree<T = i64> {
    /// 1-indexed accumulators; `tree[0]` is the zero sentinel.
    tree: Vec<T>,
    len: usize,
}

impl<T: Accumulator> std::fmt::Debug for FenwickTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FenwickTree")
            .field("len", &self.len)
            .field("total", &self.total().ok())
            .finish()
    }
}

impl<T: Accumulator> Default for FenwickTree<T> {
    fn default() -> Self {
        Self {
            tree: vec![T::ZERO],
            len: 0,
        }
    }
}

impl<T: Accumulator> FenwickTree<T> {
    /// Create a zero-filled tree over `capacity` logical elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity + 1` accumulators cannot be allocated. Use
    /// [`FenwickTree::try_new`] to handle that case.
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Create a zero-filled tree over `capacity` logical elements.
    ///
    /// Fails with [`Error::InvalidCapacity`] if `capacity + 1` slots overflow
    /// `usize` or the allocation is refused.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let slots = capacity
            .checked_add(1)
            .ok_or(Error::InvalidCapacity(capacity as i128))?;

        let mut tree = Vec::new();
        if tree.try_reserve_exact(slots).is_err() {
            tracing::debug!(capacity, "accumulator allocation refused");
            return Err(Error::InvalidCapacity(capacity as i128));
        }
        tree.resize(slots, T::ZERO);

        tracing::trace!(capacity, "constructed fenwick tree");
        Ok(Self {
            tree,
            len: capacity,
        })
    }

    /// Create a zero-filled tree from a signed capacity.
    ///
    /// A negative capacity fails with [`Error::InvalidCapacity`] before
    /// anything is allocated.
    pub fn try_from_signed(capacity: i64) -> Result<Self> {
        let Ok(unsigned) = usize::try_from(capacity) else {
            tracing::debug!(capacity, "rejected negative capacity");
            return Err(Error::InvalidCapacity(capacity.into()));
        };
        Self::try_new(unsigned)
    }

    /// Build a tree whose logical elements start at `values`.
    ///
    /// Whenever `new(values.len())` followed by `update(i, values[i])` for
    /// every `i` succeeds, this returns the same tree, usually in $O(n)$.
    /// Summing bottom-up reorders the additions, so when that meets an
    /// intermediate overflow the values are replayed in index order and the
    /// replay decides the outcome.
    pub fn from_values(values: &[T]) -> Result<Self> {
        let mut this = Self::try_new(values.len())?;
        if this.build_bottom_up(values).is_err() {
            tracing::debug!(
                len = values.len(),
                "bulk build overflowed, replaying updates"
            );
            this.tree.fill(T::ZERO);
            for (i, &v) in values.iter().enumerate() {
                this.update(i, v)?;
            }
        }
        Ok(this)
    }

    fn build_bottom_up(&mut self, values: &[T]) -> Result<()> {
        let n = self.len;
        self.tree[1..].copy_from_slice(values);

        // Each slot pushes its finished sum into its parent.
        for pos in 1..=n {
            let Some(parent) = parent_of(pos) else {
                continue;
            };
            if parent <= n {
                let child = self.tree[pos];
                self.tree[parent] = self.tree[parent]
                    .checked_add(child)
                    .ok_or(Error::Overflow { index: parent - 1 })?;
            }
        }
        Ok(())
    }

    /// Return the logical element count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the tree covers 0 elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.tree.capacity() * std::mem::size_of::<T>()
    }

    /// Add `delta` to the logical element at `index` (0-indexed). $O(\log n)$.
    ///
    /// Every later `query(k)` with `k >= index` reflects `delta`; queries
    /// below `index` are unaffected. Fails with [`Error::IndexOutOfBounds`],
    /// or with [`Error::Overflow`] when any slot on the path cannot hold its
    /// new range sum. Slots cover ranges rather than single elements, so an
    /// update can be refused even though the element and every prefix sum
    /// would fit in `T`. On failure nothing is modified.
    pub fn update(&mut self, index: usize, delta: T) -> Result<()> {
        self.check_index(index)?;

        // Stage every new value first so an overflow leaves no partial update.
        // The trailing-zero count rises on each step, which bounds the path.
        let mut staged = [(0usize, T::ZERO); usize::BITS as usize + 1];
        let mut steps = 0;
        let mut pos = Some(index + 1);
        while let Some(p) = pos.filter(|&p| p <= self.len) {
            let Some(sum) = self.tree[p].checked_add(delta) else {
                tracing::debug!(index, slot = p, "update overflowed");
                return Err(Error::Overflow { index });
            };
            staged[steps] = (p, sum);
            steps += 1;
            pos = parent_of(p);
        }

        for &(p, sum) in &staged[..steps] {
            self.tree[p] = sum;
        }
        Ok(())
    }

    /// Return the sum of the logical elements `0..=index`. $O(\log n)$.
    ///
    /// Slots are added from the highest position down; if a partial sum
    /// leaves `T` this fails with [`Error::Overflow`].
    pub fn query(&self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let mut sum = T::ZERO;
        let mut pos = index + 1;
        while pos > 0 {
            sum = sum.checked_add(self.tree[pos]).ok_or_else(|| {
                tracing::debug!(index, slot = pos, "query overflowed");
                Error::Overflow { index }
            })?;
            pos -= lowbit(pos);
        }
        Ok(sum)
    }

    /// Return the sum of every logical element, or zero when empty.
    pub fn total(&self) -> Result<T> {
        match self.len {
            0 => Ok(T::ZERO),
            n => self.query(n - 1),
        }
    }

    /// [`FenwickTree::update`] for a signed index.
    pub fn update_signed(&mut self, index: i64, delta: T) -> Result<()> {
        let index = self.signed_index(index)?;
        self.update(index, delta)
    }

    /// [`FenwickTree::query`] for a signed index.
    pub fn query_signed(&self, index: i64) -> Result<T> {
        let index = self.signed_index(index)?;
        self.query(index)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "index out of bounds");
            return Err(Error::IndexOutOfBounds {
                index: index as i128,
                len: self.len,
            });
        }
        Ok(())
    }

    fn signed_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index).map_err(|_| {
            tracing::debug!(index, len = self.len, "index out of bounds");
            Error::IndexOutOfBounds {
                index: index.into(),
                len: self.len,
            }
        })
    }
}

/// Value of the lowest set bit of `i`.
#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Next slot on an update path, or `None` past `usize::MAX`.
#[inline]
fn parent_of(pos: usize) -> Option<usize> {
    pos.checked_add(lowbit(pos))
}
