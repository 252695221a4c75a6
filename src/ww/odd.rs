//! Signed odd-digit recodings of odd numbers.
//!
//! An odd `a` is written as `a = a_0 + a_1 2^w + ... + a_{k-1} 2^((k-1)w)` with
//! every digit in `{±1, ±3, ..., ±(2^w - 1)}` and `a_{k-1} > 0`. Unlike NAF,
//! the digit count is fixed by the length of `a` and every digit is nonzero,
//! which suits fixed-pattern (regular) scalar multiplication.
//!
//! Two flavours:
//! - [`odd_recording`] with `k = odd_recording_size(n, w) = ceil(n * WORD_BITS / w)`,
//!   valid for every odd `a`;
//! - [`owf`] (odd windowed form) with `k = owf_size(n, w) = floor(n * WORD_BITS / w)`,
//!   one digit shorter whenever `w` does not divide the length, valid for
//!   `a < 2^(kw)`.
//!
//! ## Code
//! Each digit takes `w + 1` bits: magnitude in the low `w` bits, sign in bit `w`.
//! `a_{k-1}` sits at bit 0 of the output, `a_0` at bit `(k - 1)(w + 1)`.
//!
//! Recoding is constant time in the value of `a`.

use crate::word::{self, Word, WORD_BITS};

use super::bits::{get_bits, get_bits_padded, low_mask, set_bits};

/// Digit count of [`odd_recording`] for an `n`-limb input.
#[inline]
pub const fn odd_recording_size(n: usize, w: usize) -> usize {
    (n * WORD_BITS + w - 1) / w
}

/// Digit count of [`owf`] for an `n`-limb input.
#[inline]
pub const fn owf_size(n: usize, w: usize) -> usize {
    n * WORD_BITS / w
}

/// Number of words the code of `k` digits of width `w` occupies.
#[inline]
pub const fn recording_capacity(k: usize, w: usize) -> usize {
    word::words_for_bits(k * (w + 1))
}

fn record(out: &mut [Word], a: &[Word], k: usize, w: usize) {
    debug_assert!(1 <= w && w < WORD_BITS);
    debug_assert!(k >= 1);
    debug_assert!(a.first().map_or(false, |&x| x & 1 == 1));
    debug_assert!(out.len() >= recording_capacity(k, w));
    out.fill(0);

    let top: Word = 1 << w;
    let field = w + 1;
    for i in 0..k - 1 {
        // v odd in [1, 2^(w+1)), digit v - 2^w
        let v = get_bits_padded(a, i * w, field) | 1;
        let neg = (v >> w) ^ 1;
        let mask = neg.wrapping_neg();
        let mag = ((v.wrapping_sub(top) ^ mask).wrapping_sub(mask)) & low_mask(w);
        set_bits(out, (k - 1 - i) * field, field, mag | (neg << w));
    }
    let last = get_bits_padded(a, (k - 1) * w, w) | 1;
    set_bits(out, 0, field, last);
}

/// Writes the `k`-digit odd recoding of `a` to `out`.
///
/// Preconditions: `a` odd, `1 <= w < WORD_BITS`, `k * w >= n * WORD_BITS`
/// (usually `k == odd_recording_size(n, w)`), `out.len() >= recording_capacity(k, w)`.
pub fn odd_recording(out: &mut [Word], a: &[Word], k: usize, w: usize) {
    debug_assert!(k * w >= a.len() * WORD_BITS);
    record(out, a, k, w);
}

/// Writes the odd windowed form of `a` to `out`: `owf_size(n, w)` digits.
///
/// Preconditions: `a` odd, `1 <= w < WORD_BITS`, `a < 2^(owf_size(n, w) w)`,
/// `out.len() >= recording_capacity(owf_size(n, w), w)`.
pub fn owf(out: &mut [Word], a: &[Word], w: usize) {
    let k = owf_size(a.len(), w);
    debug_assert!(super::bit_size(a) <= k * w);
    record(out, a, k, w);
}

/// Digits of an odd recoding, most significant first.
#[derive(Clone, Debug)]
pub struct OddSymbols<'a> {
    code: &'a [Word],
    w: usize,
    cursor: usize,
    left: usize,
}

impl<'a> OddSymbols<'a> {
    /// Reads `k` digits of width `w` from `code`.
    pub fn new(code: &'a [Word], k: usize, w: usize) -> Self {
        debug_assert!(1 <= w && w < WORD_BITS);
        Self { code, w, cursor: 0, left: k }
    }
}

impl Iterator for OddSymbols<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;

        let field = get_bits(self.code, self.cursor, self.w + 1);
        self.cursor += self.w + 1;
        let mag = (field & low_mask(self.w)) as i64;
        Some(if field >> self.w == 1 { -mag } else { mag })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl ExactSizeIterator for OddSymbols<'_> {}
