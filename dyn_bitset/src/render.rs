//! Text rendering: one `'1'`/`'0'` per bit, MSB-first within each block.

use crate::bitset::Bitset;
use crate::bit_ops;
use crate::word::Word;
use core::fmt::{self, Write};

#[cfg(not(feature = "std"))]
use alloc::string::String;

const SEPARATOR: char = ' ';

impl<W: Word> Bitset<W> {
    /// Renders `[0, len)` with a space after every complete block.
    ///
    /// ```
    /// use dyn_bitset::Bitset;
    ///
    /// let mut bits = Bitset::<u8>::with_len(12);
    /// bits.set(0).unwrap();
    /// bits.set(11).unwrap();
    /// assert_eq!(bits.to_separated_string(), "10000000 0001");
    /// ```
    pub fn to_separated_string(&self) -> String {
        render_separated(self.blocks(), self.len())
    }

    /// Renders every allocated bit, padding included, a space after each block.
    ///
    /// ```
    /// use dyn_bitset::Bitset;
    ///
    /// let mut bits = Bitset::<u8>::with_len(12);
    /// bits.set_all();
    /// assert_eq!(bits.to_separated_string_full(), "11111111 11111111 ");
    /// ```
    pub fn to_separated_string_full(&self) -> String {
        render_separated(self.blocks(), self.capacity_bits())
    }
}

fn render_separated<W: Word>(blocks: &[W], bits: usize) -> String {
    let mut out = String::with_capacity(bits + bits / W::BITS);
    for pos in 0..bits {
        out.push(bit_char(bit_ops::test_bit(blocks, pos)));
        if (pos + 1) % W::BITS == 0 {
            out.push(SEPARATOR);
        }
    }
    out
}

#[inline]
fn bit_char(bit: bool) -> char {
    if bit { '1' } else { '0' }
}

impl<W: Word> fmt::Display for Bitset<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(bit_char(bit))?;
        }
        Ok(())
    }
}
