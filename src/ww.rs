//! Binary words of arbitrary (fixed) length.
//!
//! A word array `a: &[Word]` of length `n` represents an element of $\{0,1\}^{nB}$,
//! where $B$ is [`WORD_BITS`]: bits of `a[0]` are numbered `0` (lowest) to `B - 1`,
//! bits of `a[1]` are numbered `B` to `2B - 1`, and so on. Read as a number,
//! `a[0]` is the least significant limb.
//!
//! Nothing here allocates; all functions work in place or write into a
//! caller-supplied buffer. Length relationships (equal lengths, output sizes,
//! bit positions within range) are preconditions, checked only by `debug_assert!`
//! and the usual slice bounds checks.
//!
//! Predicates and comparisons come in pairs: the plain name is constant time in
//! the length (inspects every limb, no data-dependent branches), the `_fast` twin
//! returns as soon as the answer is known. Use the latter only on public data.

use crate::word::{self, Word, WORD_BITS, WORD_OCTETS};

mod bits;
mod cmp;
mod naf;
mod odd;
mod shift;

pub use bits::{bit_size, flip_bit, get_bits, hi_zero_bits, lo_zero_bits, set_bit, set_bits, test_bit};
pub use cmp::{
    cmp, cmp2, cmp2_fast, cmp_fast, cmp_word, cmp_word_fast, eq, eq_fast, is_rep_word,
    is_rep_word_fast, is_word, is_word_fast, is_zero, is_zero_fast,
};
pub use naf::{naf, naf_capacity, NafSymbols};
pub use odd::{odd_recording, odd_recording_size, owf, owf_size, recording_capacity, OddSymbols};
pub use shift::{sh_hi, sh_hi_carry, sh_lo, sh_lo_carry, trim_hi, trim_lo};

/// `dest <- src`.
#[inline]
pub fn copy(dest: &mut [Word], src: &[Word]) {
    debug_assert_eq!(dest.len(), src.len());
    dest.copy_from_slice(src);
}

/// `a <-> b`.
#[inline]
pub fn swap(a: &mut [Word], b: &mut [Word]) {
    debug_assert_eq!(a.len(), b.len());
    a.swap_with_slice(b);
}

/// `dest <- a ^ b`.
pub fn xor(dest: &mut [Word], a: &[Word], b: &[Word]) {
    debug_assert!(dest.len() == a.len() && a.len() == b.len());
    for ((d, a), b) in dest.iter_mut().zip(a).zip(b) {
        *d = a ^ b;
    }
}

/// `dest <- dest ^ a`.
pub fn xor_assign(dest: &mut [Word], a: &[Word]) {
    debug_assert_eq!(dest.len(), a.len());
    for (d, a) in dest.iter_mut().zip(a) {
        *d ^= a;
    }
}

/// `a <- 0`.
#[inline]
pub fn set_zero(a: &mut [Word]) {
    a.fill(0);
}

/// `a[0] <- w, a[1] <- 0, ..., a[n - 1] <- 0`.
///
/// Precondition: `n > 0` or `w == 0`.
pub fn set_word(a: &mut [Word], w: Word) {
    debug_assert!(!a.is_empty() || w == 0);
    if let Some((first, rest)) = a.split_first_mut() {
        *first = w;
        rest.fill(0);
    }
}

/// `a[0] <- w, a[1] <- w, ..., a[n - 1] <- w`.
#[inline]
pub fn fill_word(a: &mut [Word], w: Word) {
    a.fill(w);
}

/// 0 if zero, else index + 1 of last non-zero limb.
///
/// Not constant time: scans from the top.
pub fn word_size(a: &[Word]) -> usize {
    a.iter()
        .rposition(|&x| x != 0)
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// 0 if zero, else index + 1 of last non-zero octet (little-endian octet order).
///
/// Not constant time.
pub fn octet_size(a: &[Word]) -> usize {
    match word_size(a) {
        0 => 0,
        n => {
            let top = a[n - 1];
            let top_octets = (WORD_BITS - top.leading_zeros() as usize + 7) / 8;
            (n - 1) * WORD_OCTETS + top_octets
        }
    }
}

/// Little-endian octets into words: `dest <- src`, zero-padded.
///
/// Precondition: `src.len() <= dest.len() * WORD_OCTETS`.
pub fn from_octets(dest: &mut [Word], src: &[u8]) {
    debug_assert!(src.len() <= dest.len() * WORD_OCTETS);
    let chunks = src.chunks_exact(WORD_OCTETS);
    let remainder = chunks.remainder();
    let mut i = 0;
    for chunk in chunks {
        dest[i] = word::load(chunk);
        i += 1;
    }
    if !remainder.is_empty() {
        let mut last = [0u8; WORD_OCTETS];
        last[..remainder.len()].copy_from_slice(remainder);
        dest[i] = Word::from_le_bytes(last);
        i += 1;
    }
    dest[i..].fill(0);
}

/// Words into little-endian octets: the first `dest.len()` octets of `src`.
///
/// Precondition: `dest.len() <= src.len() * WORD_OCTETS`.
pub fn to_octets(dest: &mut [u8], src: &[Word]) {
    debug_assert!(dest.len() <= src.len() * WORD_OCTETS);
    for (chunk, &w) in dest.chunks_mut(WORD_OCTETS).zip(src) {
        let bytes = w.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

/// Debug adapter for word arrays: most significant limb first.
pub struct Hex<'a>(pub &'a [Word]);

impl core::fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        #[cfg(feature = "hex-debug")]
        {
            f.write_str("0x")?;
            for w in self.0.iter().rev() {
                write!(f, "{}", delog::hex_str!(&w.to_be_bytes()[..]))?;
            }
            Ok(())
        }

        #[cfg(not(feature = "hex-debug"))]
        {
            f.debug_list().entries(self.0.iter().rev()).finish()
        }
    }
}
