//! Shifts and trims.
//!
//! Note that "lo" means "lower bit positions" (division by a power of two),
//! "hi" means "higher bit positions" (multiplication). All shifts truncate
//! to the `n * WORD_BITS` bits of the array.

use crate::word::{Word, WORD_BITS};

use super::bits::low_mask;

/// `WORD_BITS` bits of `a` starting at the (possibly negative) bit position `pos`,
/// with `below` acting as limb `-1`, `above` as limb `n`, and zeros beyond.
fn window(a: &[Word], below: Word, above: Word, pos: isize) -> Word {
    let limb = |j: isize| -> Word {
        if j == -1 {
            below
        } else if j >= 0 && (j as usize) < a.len() {
            a[j as usize]
        } else if j >= 0 && j as usize == a.len() {
            above
        } else {
            0
        }
    };
    let bits = WORD_BITS as isize;
    let (j, s) = (pos.div_euclid(bits), pos.rem_euclid(bits) as usize);
    if s == 0 {
        limb(j)
    } else {
        (limb(j) >> s) | (limb(j + 1) << (WORD_BITS - s))
    }
}

/// Past this, every bit of the result (and the returned carry) is zero anyway.
#[inline]
fn clamp(a: &[Word], shift: usize) -> isize {
    shift.min((a.len() + 2) * WORD_BITS) as isize
}

/// Shifts `a` by `shift` positions towards the low end, filling the vacated
/// top bits from `carry`, which acts as limb `n`.
///
/// Returns the `WORD_BITS` bits that were shifted out last, i.e. bits
/// `shift - WORD_BITS, ..., shift - 1` of the input (zero below bit 0).
pub fn sh_lo_carry(a: &mut [Word], shift: usize, carry: Word) -> Word {
    let shift = clamp(a, shift);
    let bits = WORD_BITS as isize;
    let out = window(a, 0, carry, shift - bits);

    // source positions are never below the destination, so go upwards
    for i in 0..a.len() {
        a[i] = window(a, 0, carry, shift + i as isize * bits);
    }
    out
}

/// Shifts `a` by `shift` positions towards the high end, filling the vacated
/// low bits from `carry`, which acts as limb `-1`.
///
/// Returns the `WORD_BITS` bits that were shifted out last, i.e. the
/// `WORD_BITS` bits directly above the top of the shifted (untruncated) value.
pub fn sh_hi_carry(a: &mut [Word], shift: usize, carry: Word) -> Word {
    let shift = clamp(a, shift);
    let bits = WORD_BITS as isize;
    let total = (a.len() * WORD_BITS) as isize;
    let out = window(a, carry, 0, total - shift);

    // source positions are never above the destination, so go downwards
    for i in (0..a.len()).rev() {
        a[i] = window(a, carry, 0, i as isize * bits - shift);
    }
    out
}

/// `a <- a >> shift`, i.e. `a / 2^shift`.
#[inline]
pub fn sh_lo(a: &mut [Word], shift: usize) {
    sh_lo_carry(a, shift, 0);
}

/// `a <- a << shift`, i.e. `a * 2^shift mod 2^(n * WORD_BITS)`.
#[inline]
pub fn sh_hi(a: &mut [Word], shift: usize) {
    sh_hi_carry(a, shift, 0);
}

/// Zeros bits `0, ..., min(pos, n * WORD_BITS) - 1`.
pub fn trim_lo(a: &mut [Word], pos: usize) {
    let (n, s) = (pos / WORD_BITS, pos % WORD_BITS);
    if n >= a.len() {
        a.fill(0);
        return;
    }
    a[..n].fill(0);
    a[n] &= !low_mask(s);
}

/// Zeros bits `pos, ..., n * WORD_BITS - 1`, i.e. `a <- a mod 2^pos`.
///
/// Nothing happens for `pos >= n * WORD_BITS`.
pub fn trim_hi(a: &mut [Word], pos: usize) {
    let (n, s) = (pos / WORD_BITS, pos % WORD_BITS);
    if n >= a.len() {
        return;
    }
    a[n] &= low_mask(s);
    a[n + 1..].fill(0);
}
