//! Fixed-width integers that can be embedded into a bitset.
//!
//! # Examples
//!
//! ```rust
//! use dyn_bitset::Bitset;
//!
//! let mut bits = Bitset::<u8>::with_len(24);
//! bits.set_number(0x0FFFu16, 4).unwrap();
//! assert_eq!(bits.to_string(), "000000001111111111110000");
//! assert_eq!(bits.number::<u16>(4), Some(0x0FFF));
//! ```

mod private {
    pub trait Sealed {}
}

/// An integer with a fixed bit width.
///
/// Signed types embed their two's-complement bit pattern.
pub trait FixedWidth: private::Sealed + Copy {
    const BITS: u32;

    /// Bit pattern of the value, zero-extended.
    fn to_bits(self) -> u128;

    /// Rebuilds a value from the low `BITS` bits of `bits`.
    fn from_bits(bits: u128) -> Self;
}

macro_rules! impl_fixed_width {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl FixedWidth for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_bits(self) -> u128 {
                    self as $u as u128
                }

                #[inline]
                fn from_bits(bits: u128) -> Self {
                    bits as $u as $t
                }
            }
        )*
    };
}

impl_fixed_width!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_values_keep_their_pattern() {
        assert_eq!((-1i8).to_bits(), 0xFF);
        assert_eq!(i8::from_bits(0xFF), -1);
        assert_eq!((-2i16).to_bits(), 0xFFFE);
        assert_eq!(i64::from_bits(i64::MIN.to_bits()), i64::MIN);
    }

    #[test]
    fn from_bits_drops_high_bits() {
        assert_eq!(u8::from_bits(0x1_23), 0x23);
        assert_eq!(u16::from_bits(0xDEAD_BEEF), 0xBEEF);
    }
}
