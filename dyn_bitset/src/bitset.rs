//! Resizable bit sequence packed into storage words.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use dyn_bitset::Bitset;
//!
//! let mut bits = Bitset::<u8>::with_len(16);
//! bits.set(7).unwrap();
//! bits.set(0).unwrap();
//!
//! assert!(bits.test(7));
//! assert_eq!(bits.block(0), Some(0b1000_0001));
//! assert_eq!(bits.len(), 16);
//! ```
//!
//! ## Shifting
//!
//! ```rust
//! use dyn_bitset::Bitset;
//!
//! let mut bits = Bitset::<u16>::with_len(8);
//! bits.set_number(0b1001_0110u8, 0).unwrap();
//! bits <<= 2;
//! assert_eq!(bits.to_string(), "01011000");
//! bits >>= 4;
//! assert_eq!(bits.to_string(), "00000101");
//! ```
//!
//! A `Bitset` is a plain owned value with no interior mutability. Sharing one
//! across threads for mutation needs external synchronization, for example a
//! `Mutex<Bitset<W>>`.

use crate::BitsetError;
use crate::bit_ops;
use crate::index::blocks_for;
use crate::number::FixedWidth;
use crate::word::Word;
use core::ops::{Index, ShlAssign, ShrAssign};
use tracing::{debug, trace};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

type Result<T> = core::result::Result<T, BitsetError>;

/// A resizable sequence of bits stored in `W` words.
///
/// Bit 0 is the most significant bit of block 0. Only `[0, len)` carries
/// meaning; padding bits in the last block are whatever the last full-buffer
/// operation left there.
///
/// Equality compares the raw storage, padding included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitset<W: Word = u8> {
    blocks: Vec<W>,
    len: usize,
}

impl<W: Word> Bitset<W> {
    /// Creates an empty bitset with no storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::Bitset;
    ///
    /// let bits = Bitset::<u32>::new();
    /// assert_eq!(bits.len(), 0);
    /// assert_eq!(bits.size_in_bytes(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Creates a zeroed bitset of `len` bits using the minimal number of blocks.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::Bitset;
    ///
    /// let bits = Bitset::<u8>::with_len(17);
    /// assert_eq!(bits.block_count(), 3);
    /// assert_eq!(bits.to_string(), "0".repeat(17));
    /// ```
    pub fn with_len(len: usize) -> Self {
        let mut bits = Self::new();
        bits.set_len(len);
        bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of bits the allocated blocks can hold.
    #[inline]
    pub fn capacity_bits(&self) -> usize {
        self.blocks.len() * W::BITS
    }

    /// Allocated storage in bytes.
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.blocks.len() * core::mem::size_of::<W>()
    }

    /// Returns the raw word at `index`, or `None` past the last block.
    pub fn block(&self, index: usize) -> Option<W> {
        self.blocks.get(index).copied()
    }

    /// Overwrites a whole storage word, padding bits included.
    pub fn set_block(&mut self, index: usize, word: W) -> Result<()> {
        let count = self.blocks.len();
        let slot = self
            .blocks
            .get_mut(index)
            .ok_or(BitsetError::BlockOutOfBounds(index, count))?;
        *slot = word;
        Ok(())
    }

    pub fn blocks(&self) -> &[W] {
        &self.blocks
    }

    /// Native-endian byte view of the storage.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }

    #[inline(always)]
    fn check(&self, pos: usize) -> Result<()> {
        if pos < self.len {
            Ok(())
        } else {
            Err(BitsetError::IndexOutOfBounds(pos, self.len))
        }
    }

    /// Sets the bit at `pos`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `pos >= len()`; the bitset is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::{Bitset, BitsetError};
    ///
    /// let mut bits = Bitset::<u8>::with_len(16);
    /// bits.set(6).unwrap();
    /// assert_eq!(bits.block(0), Some(0b0000_0010));
    /// assert_eq!(bits.set(16), Err(BitsetError::IndexOutOfBounds(16, 16)));
    /// ```
    pub fn set(&mut self, pos: usize) -> Result<()> {
        self.check(pos)?;
        bit_ops::set_bit(&mut self.blocks, pos);
        Ok(())
    }

    /// Clears the bit at `pos`.
    pub fn reset(&mut self, pos: usize) -> Result<()> {
        self.check(pos)?;
        bit_ops::reset_bit(&mut self.blocks, pos);
        Ok(())
    }

    /// Returns `true` if `pos` is in range and set.
    #[inline]
    pub fn test(&self, pos: usize) -> bool {
        self.get(pos).unwrap_or(false)
    }

    /// Returns the bit at `pos`, or `None` if `pos >= len()`.
    pub fn get(&self, pos: usize) -> Option<bool> {
        if pos < self.len {
            Some(bit_ops::test_bit(&self.blocks, pos))
        } else {
            None
        }
    }

    /// Sets every bit of every allocated block.
    pub fn set_all(&mut self) {
        self.blocks.fill(W::MAX);
    }

    /// Clears every bit of every allocated block.
    pub fn reset_all(&mut self) {
        self.blocks.fill(W::ZERO);
    }

    /// Changes the logical length.
    ///
    /// Growing keeps existing blocks and appends zeroed ones. Shrinking drops
    /// whole blocks past the new length but leaves stale bits in the last
    /// retained block. If the block count does not change, only the length is
    /// updated. A length of zero releases the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::Bitset;
    ///
    /// let mut bits = Bitset::<u8>::with_len(4);
    /// bits.set(3).unwrap();
    /// bits.set_len(20);
    /// assert_eq!(bits.block_count(), 3);
    /// assert!(bits.test(3));
    ///
    /// bits.set_len(0);
    /// assert_eq!(bits.size_in_bytes(), 0);
    /// ```
    pub fn set_len(&mut self, new_len: usize) {
        if new_len == 0 {
            if !self.blocks.is_empty() {
                trace!(blocks = self.blocks.len(), "releasing bitset storage");
            }
            self.blocks = Vec::new();
            self.len = 0;
            return;
        }

        let old_blocks = self.blocks.len();
        let new_blocks = blocks_for(new_len, W::BITS);
        self.len = new_len;

        if new_blocks == old_blocks {
            return;
        }

        trace!(old_blocks, new_blocks, new_len, "reallocating bitset storage");
        if new_blocks > old_blocks {
            self.blocks.resize(new_blocks, W::ZERO);
        } else {
            self.blocks.truncate(new_blocks);
            self.blocks.shrink_to_fit();
        }
    }

    /// Writes `value` most-significant-bit first so that its top bit lands on
    /// `pos` and its bottom bit on `pos + N::BITS - 1`.
    ///
    /// A negative `pos` drops the value's top `-pos` bits and writes the rest
    /// from index 0.
    ///
    /// # Errors
    ///
    /// `InsufficientCapacity` if the value would run past `len()` or if none
    /// of its bits would land in the bitset. Nothing is written on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::Bitset;
    ///
    /// let mut bits = Bitset::<u8>::with_len(10);
    /// bits.set_number(0b1100_1010u8, 2).unwrap();
    /// assert_eq!(bits.to_string(), "0011001010");
    ///
    /// bits.reset_all();
    /// bits.set_number(0b1100_1010u8, -3).unwrap();
    /// assert_eq!(bits.to_string(), "0101000000");
    ///
    /// assert!(bits.set_number(0u8, 3).is_err());
    /// ```
    pub fn set_number<N: FixedWidth>(&mut self, value: N, pos: isize) -> Result<()> {
        let width = N::BITS as usize;
        let end = pos as i128 + width as i128;
        if end > self.len as i128 || end <= 0 {
            trace!(width, pos, len = self.len, "rejected number write");
            return Err(BitsetError::InsufficientCapacity {
                width: N::BITS,
                pos,
                len: self.len,
            });
        }

        if pos >= 0 {
            bit_ops::set_bits(&mut self.blocks, pos as usize, width, value.to_bits());
        } else {
            let kept = end as usize;
            bit_ops::set_bits(&mut self.blocks, 0, kept, value.to_bits());
        }
        Ok(())
    }

    /// Reads an `N` back from the `N::BITS` bits starting at `pos`.
    ///
    /// Returns `None` if the window does not fit in `[0, len)`.
    pub fn number<N: FixedWidth>(&self, pos: usize) -> Option<N> {
        let width = N::BITS as usize;
        if pos.checked_add(width)? > self.len {
            return None;
        }
        Some(N::from_bits(bit_ops::get_bits(&self.blocks, pos, width)))
    }

    /// Moves every bit toward index 0 by `shift`, shifting zeros in at the end.
    pub fn shift_left(&mut self, shift: usize) {
        if shift >= self.len {
            debug!(shift, len = self.len, "shift clears the whole bitset");
        }
        bit_ops::shift_toward_start(&mut self.blocks, self.len, shift);
    }

    /// Moves every bit away from index 0 by `shift`, shifting zeros in at the start.
    pub fn shift_right(&mut self, shift: usize) {
        if shift >= self.len {
            debug!(shift, len = self.len, "shift clears the whole bitset");
        }
        bit_ops::shift_toward_end(&mut self.blocks, self.len, shift);
    }

    pub fn iter(&self) -> Iter<'_, W> {
        Iter {
            bitset: self,
            index: 0,
        }
    }
}

impl<W: Word> ShlAssign<usize> for Bitset<W> {
    fn shl_assign(&mut self, shift: usize) {
        self.shift_left(shift);
    }
}

impl<W: Word> ShrAssign<usize> for Bitset<W> {
    fn shr_assign(&mut self, shift: usize) {
        self.shift_right(shift);
    }
}

/// Out-of-range positions read as `false`, the same as [`Bitset::test`].
impl<W: Word> Index<usize> for Bitset<W> {
    type Output = bool;

    fn index(&self, pos: usize) -> &bool {
        if self.test(pos) { &true } else { &false }
    }
}

pub struct Iter<'a, W: Word> {
    bitset: &'a Bitset<W>,
    index: usize,
}

impl<'a, W: Word> Iterator for Iter<'a, W> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.bitset.get(self.index)?;
        self.index += 1;
        Some(bit)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bitset.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, W: Word> ExactSizeIterator for Iter<'a, W> {}

impl<'a, W: Word> IntoIterator for &'a Bitset<W> {
    type Item = bool;
    type IntoIter = Iter<'a, W>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
