#![cfg_attr(not(test), no_std)]
//! Word arrays and the belt block cipher.
//!
//! - [`ww`]: fixed-length binary words stored as arrays of machine [`Word`]s:
//!   copies, comparisons (each in a constant-time and a `_fast` flavour), bit
//!   access, shifts, and the NAF / odd-digit recodings used by scalar
//!   multiplication.
//! - [`words`]: octet buffers processed a word at a time.
//! - [`belt`]: the STB 34.101.31 block transforms, key expansion, CTR mode
//!   and wide-block encryption.
//!
//! The word width is fixed at build time (features `u16`, `u32`, `u64`,
//! defaulting to the target's pointer width). Nothing allocates.
//!
//! Preconditions (lengths, bit positions, oddness) are the caller's to
//! uphold; they are checked with `debug_assert!` only. The checked entry
//! points at the boundary return [`Result`].

mod error;
pub use error::{Error, Result};
pub mod word;
pub use word::{Word, WORD_BITS, WORD_OCTETS};
pub mod ww;
pub mod words;
pub mod belt;

#[cfg(test)]
mod fixtures;
