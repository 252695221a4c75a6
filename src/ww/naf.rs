//! Windowed non-adjacent form (NAF).
//!
//! The width-`w` NAF of `a` is a sequence of digits `a_0, ..., a_{l-1}`,
//! each zero or odd with `|a_i| < 2^(w-1)`, such that
//! `a = a_0 + a_1 2 + ... + a_{l-1} 2^(l-1)` and among any `w` consecutive
//! digits at most one is nonzero. The top digit is positive.
//!
//! A trailing pattern `α, 0^(w-1), 1` with `α < 0` is rewritten to the
//! shorter `β, 0^(w-2), 1` with `β = 2^(w-1) + α`, saving one symbol. In this
//! case the top two nonzero digits are only `w - 1` positions apart.
//!
//! ## Code
//! Symbols are concatenated starting at bit 0 of the output, most significant
//! symbol first. A zero digit is a single 0 bit; a nonzero digit is a `w`-bit
//! field with `|a_i|` in its low `w - 1` bits (so its lowest bit is set) and
//! the sign in its top bit.

use crate::word::{Word, WORD_BITS};

use super::bits::{bit_size, get_bits, get_bits_padded, low_mask, set_bits, test_bit};

/// Number of words `naf` may write for an `n`-limb input.
#[inline]
pub const fn naf_capacity(n: usize) -> usize {
    2 * n + 1
}

#[derive(Clone, Copy, Debug)]
struct Digit {
    pos: usize,
    neg: bool,
    mag: Word,
}

/// Nonzero NAF digits of `a`, lowest position first.
struct Digits<'a> {
    a: &'a [Word],
    w: usize,
    len: usize,
    pos: usize,
    carry: Word,
}

impl<'a> Digits<'a> {
    fn new(a: &'a [Word], w: usize) -> Self {
        Self { a, w, len: bit_size(a), pos: 0, carry: 0 }
    }
}

impl Iterator for Digits<'_> {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        let half: Word = 1 << (self.w - 1);
        while self.pos < self.len || self.carry != 0 {
            let window = self.carry + get_bits_padded(self.a, self.pos, self.w);
            if window & 1 == 0 {
                self.pos += 1;
                continue;
            }

            let pos = self.pos;
            self.pos += self.w;
            let digit = if window & half != 0 {
                // window - 2^w, borrowing from the next window
                self.carry = 1;
                Digit { pos, neg: true, mag: (half << 1) - window }
            } else {
                self.carry = 0;
                Digit { pos, neg: false, mag: window }
            };
            return Some(digit);
        }
        None
    }
}

/// Writes the width-`w` NAF code of `a` to `out` and returns the number of
/// symbols `l` (zero for `a == 0`).
///
/// Preconditions: `2 <= w < WORD_BITS`, `out.len() >= naf_capacity(a.len())`.
/// Not constant time.
pub fn naf(out: &mut [Word], a: &[Word], w: usize) -> usize {
    debug_assert!(2 <= w && w < WORD_BITS);
    debug_assert!(out.len() >= naf_capacity(a.len()));
    out.fill(0);

    let (mut count, mut prev, mut last) = (0usize, None, None);
    for digit in Digits::new(a, w) {
        count += 1;
        prev = last;
        last = Some(digit);
    }
    let top: Digit = match last {
        Some(top) => top,
        None => return 0,
    };

    let shrink = top.mag == 1
        && matches!(prev, Some(Digit { pos, neg: true, .. }) if pos + w == top.pos);
    let l = top.pos + 1 - shrink as usize;

    // a_{l-1} goes first, so fill in backwards from the end of the code
    let mut end = l + (w - 1) * count;
    let mut next = 0;
    for (i, mut digit) in Digits::new(a, w).enumerate() {
        if shrink && i + 2 == count {
            digit.neg = false;
            digit.mag = (1 << (w - 1)) - digit.mag;
        }
        if shrink && i + 1 == count {
            digit.pos -= 1;
        }
        // zero symbols below this digit, then the digit itself
        end -= (digit.pos - next) + w;
        set_bits(out, end, w, digit.mag | ((digit.neg as Word) << (w - 1)));
        next = digit.pos + 1;
    }
    debug_assert_eq!(end, 0);

    l
}

/// Digits of a NAF code, most significant first.
#[derive(Clone, Debug)]
pub struct NafSymbols<'a> {
    code: &'a [Word],
    w: usize,
    cursor: usize,
    left: usize,
}

impl<'a> NafSymbols<'a> {
    /// Reads `l` symbols of width-`w` NAF from `code`.
    pub fn new(code: &'a [Word], l: usize, w: usize) -> Self {
        debug_assert!(2 <= w && w < WORD_BITS);
        Self { code, w, cursor: 0, left: l }
    }
}

impl Iterator for NafSymbols<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;

        if !test_bit(self.code, self.cursor) {
            self.cursor += 1;
            return Some(0);
        }
        let field = get_bits(self.code, self.cursor, self.w);
        self.cursor += self.w;
        let mag = (field & low_mask(self.w - 1)) as i64;
        Some(if field >> (self.w - 1) == 1 { -mag } else { mag })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl ExactSizeIterator for NafSymbols<'_> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::word::WORD_MAX;

    fn recode(a: &[Word], w: usize) -> ([Word; 9], usize) {
        let mut out = [0 as Word; 9];
        let l = naf(&mut out[..naf_capacity(a.len())], a, w);
        (out, l)
    }

    fn value(out: &[Word], l: usize, w: usize) -> i128 {
        NafSymbols::new(out, l, w).fold(0i128, |acc, d| 2 * acc + d as i128)
    }

    #[test]
    fn zero_and_one() {
        assert_eq!(recode(&[0], 3).1, 0);
        assert_eq!(recode(&[], 3).1, 0);

        let (out, l) = recode(&[1], 4);
        assert_eq!(l, 1);
        assert_eq!(out[0], 1);
        assert_eq!(NafSymbols::new(&out, l, 4).collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn known_codes() {
        // 9 = 1 + 2^3, zeros in between
        let (out, l) = recode(&[9], 2);
        assert_eq!((l, out[0]), (4, 0b01_0_0_01));
        assert_eq!(NafSymbols::new(&out, l, 2).collect::<Vec<_>>(), [1, 0, 0, 1]);

        // 23 = -1 + 3 * 2^3
        let (out, l) = recode(&[23], 3);
        assert_eq!((l, out[0]), (4, 0b101_0_0_011));
        assert_eq!(NafSymbols::new(&out, l, 3).collect::<Vec<_>>(), [3, 0, 0, -1]);
    }

    #[test]
    fn shortened_suffix() {
        // 3 = -1 + 2^2 becomes 1 + 2
        let (out, l) = recode(&[3], 2);
        assert_eq!((l, out[0]), (2, 0b01_01));

        // 7 = -1 + 2^3 becomes 3 + 2^2
        let (out, l) = recode(&[7], 3);
        assert_eq!(l, 3);
        assert_eq!(NafSymbols::new(&out, l, 3).collect::<Vec<_>>(), [1, 0, 3]);
    }

    #[test]
    fn digits_and_values() {
        let samples = [5 as Word, 0x3B, 0xFFF, WORD_MAX, WORD_MAX >> 1, WORD_MAX - 2];
        for &x in samples.iter() {
            for w in 2..8 {
                let (out, l) = recode(&[x], w);
                assert_eq!(value(&out, l, w), x as i128);

                let digits: Vec<i64> = NafSymbols::new(&out, l, w).collect();
                assert_eq!(digits.len(), l);
                assert!(digits[0] > 0);
                let bound = (1i64 << (w - 1)) - 1;
                assert!(digits.iter().all(|&d| d == 0 || (d % 2 != 0 && d.abs() <= bound)));
            }
        }
    }

    #[test]
    fn multi_limb() {
        let a = [WORD_MAX, WORD_MAX, 1];
        let (out, l) = recode(&a, 5);
        assert!(l <= 3 * WORD_BITS + 1);
        let digits: Vec<i64> = NafSymbols::new(&out, l, 5).collect();
        // 2^(2W+1) - 1, a single borrow all the way up
        assert_eq!(digits[0], 1);
        assert_eq!(digits.iter().filter(|&&d| d != 0).count(), 2);
        assert_eq!(*digits.last().unwrap(), -1);
    }
}
