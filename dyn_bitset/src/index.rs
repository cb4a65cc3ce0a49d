use crate::word::Word;

/// Logical bit position inside a bitset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitIndex(pub usize);

/// Physical location of a bit: the block holding it and its MSB-first offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitAddr {
    pub block: usize,
    pub offset: usize,
}

impl BitIndex {
    #[inline(always)]
    pub fn addr<W: Word>(self) -> BitAddr {
        let block = self.0 >> W::LOG2_BITS;
        BitAddr {
            block,
            offset: self.0 - (block << W::LOG2_BITS),
        }
    }
}

/// Number of `W` blocks needed to hold `len` bits.
#[inline]
pub const fn blocks_for(len: usize, bits_per_word: usize) -> usize {
    len.div_ceil(bits_per_word)
}
