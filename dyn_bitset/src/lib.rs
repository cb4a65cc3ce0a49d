//! # dyn_bitset
//!
//! A `no_std` compatible resizable bitset packed into unsigned storage words.
//!
//! Bit 0 is the most significant bit of the first word, so a bitset renders
//! and embeds numbers most-significant-bit first.
//!
//! ```rust
//! use dyn_bitset::Bitset;
//!
//! let mut bits = Bitset::<u8>::with_len(16);
//! bits.set_number(0xA5u8, 4).unwrap();
//! assert_eq!(bits.to_separated_string(), "00001010 01010000 ");
//!
//! bits <<= 4;
//! assert_eq!(bits.block(0), Some(0xA5));
//! ```
//!
//! ## Choosing a word
//!
//! ```rust
//! use dyn_bitset::Bitset;
//!
//! // 100 bits in u8 blocks: 13 blocks, 13 bytes
//! let small = Bitset::<u8>::with_len(100);
//! assert_eq!(small.size_in_bytes(), 13);
//!
//! // 100 bits in u64 blocks: 2 blocks, 16 bytes
//! let wide = Bitset::<u64>::with_len(100);
//! assert_eq!(wide.size_in_bytes(), 16);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitsetError;

mod bit_ops;
mod index;
mod render;

pub mod bitset;
pub mod number;
pub mod word;

pub use bitset::Bitset;
pub use number::FixedWidth;
pub use word::Word;
