//! Storage words.
//!
//! A [`Word`] is one block of the bitset's backing buffer. Only the primitive
//! unsigned integers implement it, so `BITS` is always a power of two and the
//! block/offset split can use shifts and masks instead of division.

use bytemuck::Pod;
use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Not};

mod private {
    pub trait Sealed {}
}

pub trait Word:
    private::Sealed
    + Pod
    + Debug
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    /// Number of bits in one word.
    const BITS: usize;
    /// `log2(BITS)`, used to split a bit index into block and offset.
    const LOG2_BITS: u32;
    const ZERO: Self;
    const MAX: Self;

    /// Mask selecting the `offset`-th bit counted from the most significant end.
    ///
    /// `offset` must be below `BITS`.
    fn msb_mask(offset: usize) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Word for $t {
                const BITS: usize = <$t>::BITS as usize;
                const LOG2_BITS: u32 = {
                    assert!(<$t>::BITS.is_power_of_two(), "word width must be a power of two");
                    <$t>::BITS.trailing_zeros()
                };
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;

                #[inline(always)]
                fn msb_mask(offset: usize) -> Self {
                    debug_assert!(offset < <Self as Word>::BITS);
                    (1 as $t) << (<Self as Word>::BITS - 1 - offset)
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log2_matches_width() {
        assert_eq!(<u8 as Word>::LOG2_BITS, 3);
        assert_eq!(<u16 as Word>::LOG2_BITS, 4);
        assert_eq!(<u32 as Word>::LOG2_BITS, 5);
        assert_eq!(<u64 as Word>::LOG2_BITS, 6);
        assert_eq!(<u128 as Word>::LOG2_BITS, 7);
        assert_eq!(1usize << <usize as Word>::LOG2_BITS, <usize as Word>::BITS);
    }

    #[test]
    fn msb_mask_counts_from_the_top() {
        assert_eq!(u8::msb_mask(0), 0b1000_0000);
        assert_eq!(u8::msb_mask(7), 0b0000_0001);
        assert_eq!(u16::msb_mask(4), 0x0800);
        assert_eq!(u64::msb_mask(63), 1);
    }
}
