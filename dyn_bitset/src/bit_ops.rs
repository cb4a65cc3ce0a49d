//! MSB-first bit primitives over word slices.
//!
//! Callers check bounds; these index the slice directly.

use crate::index::BitIndex;
use crate::word::Word;

#[inline(always)]
pub fn set_bit<W: Word>(slice: &mut [W], pos: usize) {
    let addr = BitIndex(pos).addr::<W>();
    slice[addr.block] = slice[addr.block] | W::msb_mask(addr.offset);
}

#[inline(always)]
pub fn reset_bit<W: Word>(slice: &mut [W], pos: usize) {
    let addr = BitIndex(pos).addr::<W>();
    slice[addr.block] = slice[addr.block] & !W::msb_mask(addr.offset);
}

#[inline(always)]
pub fn test_bit<W: Word>(slice: &[W], pos: usize) -> bool {
    let addr = BitIndex(pos).addr::<W>();
    (slice[addr.block] & W::msb_mask(addr.offset)) != W::ZERO
}

#[inline(always)]
pub fn write_bit<W: Word>(slice: &mut [W], pos: usize, bit: bool) {
    if bit {
        set_bit(slice, pos);
    } else {
        reset_bit(slice, pos);
    }
}

#[inline]
fn low_mask(bit_width: usize) -> u128 {
    if bit_width >= 128 {
        u128::MAX
    } else {
        (1u128 << bit_width) - 1
    }
}

// per-bit, slow but simple
/// Writes the low `bit_width` bits of `value` so that its most significant
/// bit lands on `bit_offset`.
pub fn set_bits<W: Word>(slice: &mut [W], bit_offset: usize, bit_width: usize, value: u128) {
    let masked = value & low_mask(bit_width);
    let last = bit_offset + bit_width - 1;

    for k in 0..bit_width {
        write_bit(slice, last - k, (masked >> k) & 1 == 1);
    }
}

/// Reads `bit_width` bits starting at `bit_offset`, the first one becoming the
/// most significant bit of the result.
pub fn get_bits<W: Word>(slice: &[W], bit_offset: usize, bit_width: usize) -> u128 {
    let mut value = 0u128;

    for i in 0..bit_width {
        value = (value << 1) | test_bit(slice, bit_offset + i) as u128;
    }

    value
}

/// Moves every bit of `[0, len)` toward index 0 by `shift` and zeroes the
/// vacated tail.
pub fn shift_toward_start<W: Word>(slice: &mut [W], len: usize, shift: usize) {
    let shift = shift.min(len);
    for curr in shift..len {
        let bit = test_bit(slice, curr);
        write_bit(slice, curr - shift, bit);
    }
    for pos in (len - shift)..len {
        reset_bit(slice, pos);
    }
}

/// Moves every bit of `[0, len)` toward the end by `shift` and zeroes the
/// vacated head.
pub fn shift_toward_end<W: Word>(slice: &mut [W], len: usize, shift: usize) {
    let shift = shift.min(len);
    for curr in (0..len - shift).rev() {
        let bit = test_bit(slice, curr);
        write_bit(slice, curr + shift, bit);
    }
    for pos in 0..shift {
        reset_bit(slice, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_bits() {
        let mut buf = [0u8; 8];
        set_bits(&mut buf, 3, 5, 0b10101);
        assert_eq!(get_bits(&buf, 3, 5), 0b10101);
        assert_eq!(buf[0], 0b0001_0101);
    }

    #[test]
    fn field_straddles_words() {
        let mut buf = [0u8; 2];
        set_bits(&mut buf, 4, 8, 0xAB);
        assert_eq!(buf, [0x0A, 0xB0]);
        assert_eq!(get_bits(&buf, 4, 8), 0xAB);
    }

    #[test]
    fn full_width_u128_field() {
        let mut buf = [0u64; 3];
        set_bits(&mut buf, 32, 128, u128::MAX - 1);
        assert_eq!(get_bits(&buf, 32, 128), u128::MAX - 1);
        assert_eq!(buf[0], 0x0000_0000_FFFF_FFFF);
    }

    #[test]
    fn shifts_fill_with_zeros() {
        let mut buf = [0b1011_0001u8];
        shift_toward_start(&mut buf, 8, 2);
        assert_eq!(buf[0], 0b1100_0100);

        let mut buf = [0b1011_0001u8];
        shift_toward_end(&mut buf, 8, 3);
        assert_eq!(buf[0], 0b0001_0110);
    }

    #[test]
    fn shift_past_length_clears() {
        let mut buf = [0xFFu8, 0xFF];
        shift_toward_start(&mut buf, 12, 40);
        assert_eq!(buf, [0x00, 0x0F]);

        let mut buf = [0xFFu8, 0xFF];
        shift_toward_end(&mut buf, 12, 12);
        assert_eq!(buf, [0x00, 0x0F]);
    }
}
