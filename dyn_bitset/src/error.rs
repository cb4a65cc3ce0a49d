#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsetError {
    #[cfg_attr(feature = "std", error("Bit index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Block index {0} is out of bounds for {1} allocated blocks")
    )]
    BlockOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("A {width}-bit value at position {pos} does not fit in length {len}")
    )]
    InsufficientCapacity { width: u32, pos: isize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitsetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitsetError::IndexOutOfBounds(i, l) => {
                write!(f, "Bit index {} is out of bounds for length {}", i, l)
            }
            BitsetError::BlockOutOfBounds(i, n) => {
                write!(f, "Block index {} is out of bounds for {} allocated blocks", i, n)
            }
            BitsetError::InsufficientCapacity { width, pos, len } => write!(
                f,
                "A {}-bit value at position {} does not fit in length {}",
                width, pos, len
            ),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = BitsetError::IndexOutOfBounds(17, 16);
        assert_eq!(err.to_string(), "Bit index 17 is out of bounds for length 16");

        let err = BitsetError::InsufficientCapacity {
            width: 8,
            pos: 3,
            len: 10,
        };
        assert_eq!(
            err.to_string(),
            "A 8-bit value at position 3 does not fit in length 10"
        );
    }
}
