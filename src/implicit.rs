//! Implicit prefix sums: the raw array with no index.
//!
//! Point updates are $O(1)$ and prefix queries rescan in $O(n)$. This is the
//! baseline the Fenwick tree is measured and checked against.

use crate::accumulator::Accumulator;
use crate::error::{Error, Result};

/// A plain array of logical elements with linear-time prefix sums.
///
/// Mirrors the [`crate::FenwickTree`] interface and error variants. Overflow
/// is checked per element rather than per range slot.
#[derive(Clone, Debug)]
pub struct PrefixArray<T = i64> {
    data: Vec<T>,
}

impl<T: Accumulator> PrefixArray<T> {
    /// Create a zero-filled array of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::ZERO; len],
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return true if the array has 0 elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Add `delta` to element `index`. O(1).
    pub fn update(&mut self, index: usize, delta: T) -> Result<()> {
        let len = self.data.len();
        let slot = self.data.get_mut(index).ok_or(Error::IndexOutOfBounds {
            index: index as i128,
            len,
        })?;
        *slot = slot
            .checked_add(delta)
            .ok_or(Error::Overflow { index })?;
        Ok(())
    }

    /// Linear-time prefix sum over `0..=index`: O(N).
    pub fn query(&self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index: index as i128,
                len: self.data.len(),
            });
        }
        self.data[..=index]
            .iter()
            .try_fold(T::ZERO, |acc, &v| acc.checked_add(v))
            .ok_or(Error::Overflow { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_array_basic() {
        let mut pa = PrefixArray::<i64>::new(4);
        pa.update(1, 5).unwrap();
        pa.update(3, -2).unwrap();
        assert_eq!(pa.query(0).unwrap(), 0);
        assert_eq!(pa.query(1).unwrap(), 5);
        assert_eq!(pa.query(3).unwrap(), 3);
        assert_eq!(
            pa.query(4),
            Err(Error::IndexOutOfBounds { index: 4, len: 4 })
        );
    }
}
