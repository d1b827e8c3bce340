//! Element types a prefix-sum structure can accumulate.

use std::fmt::Debug;

/// A signed integer that supports overflow-checked addition.
///
/// Implemented for every primitive signed integer. `ZERO` is the additive
/// identity and the value of the sentinel slot.
pub trait Accumulator: Copy + Debug + PartialEq {
    /// The additive identity.
    const ZERO: Self;

    /// `self + rhs`, or `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_accumulator {
    ($($t:ty),* $(,)?) => {
        $(
            impl Accumulator for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_accumulator!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_detects_overflow() {
        assert_eq!(Accumulator::checked_add(2i8, 3), Some(5));
        assert_eq!(Accumulator::checked_add(i8::MAX, 1), None);
        assert_eq!(Accumulator::checked_add(i64::MIN, -1), None);
        assert_eq!(<i32 as Accumulator>::ZERO, 0);
    }
}
