//! Equality and ordering of word arrays.
//!
//! Since we store little-endian, comparison needs to start at the last
//! limb, instead of at the first as the derived / default implementation
//! on slices would.

use core::cmp::Ordering;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater};

use crate::word::Word;

#[inline]
fn ordering(sign: i8) -> Ordering {
    sign.cmp(&0)
}

/// `a == b`, constant time in `n`.
pub fn eq(a: &[Word], b: &[Word]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.ct_eq(b).into()
}

/// `a == b`, returns at the first differing limb.
pub fn eq_fast(a: &[Word], b: &[Word]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a == b
}

/// Running comparison of equal-length limbs, lowest to highest, so that
/// higher limbs override lower ones. Returns -1, 0 or 1.
fn ct_sign<'a>(pairs: impl Iterator<Item = (&'a Word, &'a Word)>) -> i8 {
    let mut sign = 0i8;
    for (a, b) in pairs {
        let greater: Choice = a.ct_gt(b);
        let less: Choice = b.ct_gt(a);
        sign.conditional_assign(&1, greater);
        sign.conditional_assign(&-1, less);
    }
    sign
}

/// Compares `a` and `b` as numbers, constant time in `n`.
pub fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    ordering(ct_sign(a.iter().zip(b)))
}

/// Compares `a` and `b` as numbers, most significant limb first, returns early.
pub fn cmp_fast(a: &[Word], b: &[Word]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (a, b) in a.iter().rev().zip(b.iter().rev()) {
        match a.cmp(b) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

/// Compares `a` of length `n` with `b` of length `m`, as if the shorter
/// one were zero-extended. Constant time in `n` and `m`.
pub fn cmp2(a: &[Word], b: &[Word]) -> Ordering {
    if a.len() >= b.len() {
        let (lo, hi) = a.split_at(b.len());
        let mut sign = ct_sign(lo.iter().zip(b));
        sign.conditional_assign(&1, !is_zero_choice(hi));
        ordering(sign)
    } else {
        cmp2(b, a).reverse()
    }
}

/// Fast variant of [`cmp2`].
pub fn cmp2_fast(a: &[Word], b: &[Word]) -> Ordering {
    if a.len() >= b.len() {
        let (lo, hi) = a.split_at(b.len());
        if !is_zero_fast(hi) {
            return Ordering::Greater;
        }
        cmp_fast(lo, b)
    } else {
        cmp2_fast(b, a).reverse()
    }
}

/// Compares `a` with the one-limb number `w`, constant time in `n`.
pub fn cmp_word(a: &[Word], w: Word) -> Ordering {
    match a.split_first() {
        None => ordering(-(w.ct_gt(&0).unwrap_u8() as i8)),
        Some((first, rest)) => {
            let mut sign = ct_sign(core::iter::once((first, &w)));
            sign.conditional_assign(&1, !is_zero_choice(rest));
            ordering(sign)
        }
    }
}

/// Fast variant of [`cmp_word`].
pub fn cmp_word_fast(a: &[Word], w: Word) -> Ordering {
    match a.split_first() {
        None => (0 as Word).cmp(&w),
        Some((first, rest)) => {
            if !is_zero_fast(rest) {
                return Ordering::Greater;
            }
            first.cmp(&w)
        }
    }
}

fn is_zero_choice(a: &[Word]) -> Choice {
    let mut acc: Word = 0;
    for x in a {
        acc |= x;
    }
    acc.ct_eq(&0)
}

/// `a == 0`, constant time in `n`. The empty array is zero.
pub fn is_zero(a: &[Word]) -> bool {
    is_zero_choice(a).into()
}

/// `a == 0`, returns at the first non-zero limb.
pub fn is_zero_fast(a: &[Word]) -> bool {
    a.iter().all(|&x| x == 0)
}

/// `a[0] == w && a[1] == ... == a[n - 1] == 0`, constant time in `n`.
///
/// The empty array takes the value 0.
pub fn is_word(a: &[Word], w: Word) -> bool {
    match a.split_first() {
        None => w.ct_eq(&0).into(),
        Some((first, rest)) => (first.ct_eq(&w) & is_zero_choice(rest)).into(),
    }
}

/// Fast variant of [`is_word`].
pub fn is_word_fast(a: &[Word], w: Word) -> bool {
    match a.split_first() {
        None => w == 0,
        Some((first, rest)) => *first == w && is_zero_fast(rest),
    }
}

/// `a[0] == w && ... && a[n - 1] == w`, constant time in `n`.
///
/// The empty array repeats the value 0.
pub fn is_rep_word(a: &[Word], w: Word) -> bool {
    if a.is_empty() {
        return w == 0;
    }
    let mut diff: Word = 0;
    for x in a {
        diff |= x ^ w;
    }
    diff.ct_eq(&0).into()
}

/// Fast variant of [`is_rep_word`].
pub fn is_rep_word_fast(a: &[Word], w: Word) -> bool {
    if a.is_empty() {
        return w == 0;
    }
    a.iter().all(|&x| x == w)
}
