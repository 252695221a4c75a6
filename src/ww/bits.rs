//! Bit-level access to word arrays.
//!
//! Bit `pos` lives in limb `pos / WORD_BITS`, at offset `pos % WORD_BITS`.
//! The caller reserves `words_for_bits(pos + width)` limbs.

use crate::word::{Word, WORD_BITS, WORD_MAX};

/// Mask of the lowest `width` bits, `width <= WORD_BITS`.
#[inline]
pub(crate) fn low_mask(width: usize) -> Word {
    debug_assert!(width <= WORD_BITS);
    if width == WORD_BITS {
        WORD_MAX
    } else {
        ((1 as Word) << width) - 1
    }
}

/// Is bit `pos` of `a` set?
#[inline]
pub fn test_bit(a: &[Word], pos: usize) -> bool {
    (a[pos / WORD_BITS] >> (pos % WORD_BITS)) & 1 == 1
}

/// Bits `pos` (lowest), ..., `pos + width - 1` (highest) of `a`, as a word.
///
/// Precondition: `width <= WORD_BITS`.
pub fn get_bits(a: &[Word], pos: usize, width: usize) -> Word {
    debug_assert!(width <= WORD_BITS);
    if width == 0 {
        return 0;
    }
    let (n, s) = (pos / WORD_BITS, pos % WORD_BITS);
    let mut bits = a[n] >> s;
    if s + width > WORD_BITS {
        bits |= a[n + 1] << (WORD_BITS - s);
    }
    bits & low_mask(width)
}

/// Like [`get_bits`], but bits beyond the end of `a` read as zero.
pub(crate) fn get_bits_padded(a: &[Word], pos: usize, width: usize) -> Word {
    debug_assert!(width <= WORD_BITS);
    if width == 0 {
        return 0;
    }
    let (n, s) = (pos / WORD_BITS, pos % WORD_BITS);
    let mut bits = a.get(n).map_or(0, |&x| x >> s);
    if s + width > WORD_BITS {
        bits |= a.get(n + 1).map_or(0, |&x| x << (WORD_BITS - s));
    }
    bits & low_mask(width)
}

/// Sets bit `pos` of `a` to `val`.
#[inline]
pub fn set_bit(a: &mut [Word], pos: usize, val: bool) {
    let (n, s) = (pos / WORD_BITS, pos % WORD_BITS);
    a[n] = (a[n] & !((1 as Word) << s)) | ((val as Word) << s);
}

/// Sets bits `pos`, ..., `pos + width - 1` of `a` to the consecutive
/// bits of `val` (lowest first). Bits of `val` above `width` are ignored.
///
/// Precondition: `width <= WORD_BITS`.
pub fn set_bits(a: &mut [Word], pos: usize, width: usize, val: Word) {
    debug_assert!(width <= WORD_BITS);
    if width == 0 {
        return;
    }
    let mask = low_mask(width);
    let val = val & mask;
    let (n, s) = (pos / WORD_BITS, pos % WORD_BITS);
    a[n] = (a[n] & !(mask << s)) | (val << s);
    if s + width > WORD_BITS {
        let r = WORD_BITS - s;
        a[n + 1] = (a[n + 1] & !(mask >> r)) | (val >> r);
    }
}

/// Inverts bit `pos` of `a`.
#[inline]
pub fn flip_bit(a: &mut [Word], pos: usize) {
    a[pos / WORD_BITS] ^= (1 as Word) << (pos % WORD_BITS);
}

/// Length of the run of zero bits at the start (lowest end) of `a`.
///
/// Not constant time.
pub fn lo_zero_bits(a: &[Word]) -> usize {
    match a.iter().position(|&x| x != 0) {
        Some(i) => i * WORD_BITS + a[i].trailing_zeros() as usize,
        None => a.len() * WORD_BITS,
    }
}

/// Length of the run of zero bits at the end (highest end) of `a`.
///
/// Not constant time.
pub fn hi_zero_bits(a: &[Word]) -> usize {
    match a.iter().rposition(|&x| x != 0) {
        Some(i) => (a.len() - 1 - i) * WORD_BITS + a[i].leading_zeros() as usize,
        None => a.len() * WORD_BITS,
    }
}

/// 0 if zero, else index + 1 of the highest set bit.
///
/// If `bit_size(a) == m > 0`, then $2^{m-1} \le a \le 2^m - 1$.
/// Not constant time.
pub fn bit_size(a: &[Word]) -> usize {
    a.len() * WORD_BITS - hi_zero_bits(a)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_bits() {
        let mut a = [0 as Word; 3];
        set_bit(&mut a, 0, true);
        set_bit(&mut a, WORD_BITS + 1, true);
        set_bit(&mut a, 3 * WORD_BITS - 1, true);
        assert_eq!(a, [1, 2, (1 as Word) << (WORD_BITS - 1)]);
        assert!(test_bit(&a, WORD_BITS + 1));
        assert!(!test_bit(&a, WORD_BITS));

        set_bit(&mut a, WORD_BITS + 1, false);
        assert_eq!(a[1], 0);
        flip_bit(&mut a, WORD_BITS + 1);
        flip_bit(&mut a, 0);
        assert_eq!(a[..2], [0, 2]);
    }

    #[test]
    fn bit_fields_across_limbs() {
        let mut a = [0 as Word; 2];
        let pos = WORD_BITS - 3;
        set_bits(&mut a, pos, 7, 0b101_1011);
        assert_eq!(get_bits(&a, pos, 7), 0b101_1011);
        assert_eq!(a[0] >> pos, 0b011);
        assert_eq!(a[1], 0b1011);

        // ignored excess bits of val, untouched neighbours
        let mut b = [WORD_MAX; 2];
        set_bits(&mut b, pos, 4, 0xF0);
        assert_eq!(get_bits(&b, pos, 4), 0);
        assert_eq!(get_bits(&b, pos + 4, WORD_BITS - 1), WORD_MAX >> 1);
        assert_eq!(get_bits(&b, 0, pos), low_mask(pos));

        let mut c = [0 as Word; 2];
        set_bits(&mut c, 0, WORD_BITS, WORD_MAX);
        assert_eq!(c, [WORD_MAX, 0]);
        assert_eq!(get_bits(&c, 1, WORD_BITS), WORD_MAX >> 1);
        assert_eq!(get_bits(&c, 5, 0), 0);
    }

    #[test]
    fn padded_reads() {
        let a = [WORD_MAX];
        assert_eq!(get_bits_padded(&a, WORD_BITS - 2, 4), 0b11);
        assert_eq!(get_bits_padded(&a, 5 * WORD_BITS, 4), 0);
    }

    #[test]
    fn zero_runs() {
        assert_eq!(lo_zero_bits(&[]), 0);
        assert_eq!(hi_zero_bits(&[0, 0]), 2 * WORD_BITS);
        assert_eq!(lo_zero_bits(&[0, 0]), 2 * WORD_BITS);

        let a = [0 as Word, 0b1000, 0];
        assert_eq!(lo_zero_bits(&a), WORD_BITS + 3);
        assert_eq!(hi_zero_bits(&a), 2 * WORD_BITS - 4);
        assert_eq!(bit_size(&a), WORD_BITS + 4);

        assert_eq!(bit_size(&[]), 0);
        assert_eq!(bit_size(&[0]), 0);
        assert_eq!(bit_size(&[1]), 1);
        assert_eq!(bit_size(&[WORD_MAX, 0]), WORD_BITS);
    }
}
