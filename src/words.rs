//! Octet buffers, processed a word at a time.
//!
//! The bulk of each buffer is loaded into [`Word`]s (little-endian, no alignment
//! requirement), the `len % WORD_OCTETS` trailing octets are handled one by one.
//! Read as numbers, buffers are little-endian: the last octet is most significant.

use core::cmp::Ordering;

use crate::word::{self, Word, WORD_OCTETS};

/// Zero-padded word from at most `WORD_OCTETS` trailing octets.
#[inline]
fn load_tail(tail: &[u8]) -> Word {
    let mut bytes = [0u8; WORD_OCTETS];
    bytes[..tail.len()].copy_from_slice(tail);
    Word::from_le_bytes(bytes)
}

/// `buf <- !buf`.
pub fn neg(buf: &mut [u8]) {
    let mut chunks = buf.chunks_exact_mut(WORD_OCTETS);
    for chunk in &mut chunks {
        let w = word::load(chunk);
        word::save(chunk, !w);
    }
    for octet in chunks.into_remainder() {
        *octet = !*octet;
    }
}

/// `dest <- a ^ b`.
pub fn xor(dest: &mut [u8], a: &[u8], b: &[u8]) {
    debug_assert!(dest.len() == a.len() && a.len() == b.len());
    let mut chunks = dest.chunks_exact_mut(WORD_OCTETS);
    let mut a = a.chunks_exact(WORD_OCTETS);
    let mut b = b.chunks_exact(WORD_OCTETS);
    for ((d, a), b) in (&mut chunks).zip(&mut a).zip(&mut b) {
        word::save(d, word::load(a) ^ word::load(b));
    }
    let tails = a.remainder().iter().zip(b.remainder());
    for (d, (a, b)) in chunks.into_remainder().iter_mut().zip(tails) {
        *d = a ^ b;
    }
}

/// `dest <- dest ^ src`.
pub fn xor_assign(dest: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dest.len(), src.len());
    let mut chunks = dest.chunks_exact_mut(WORD_OCTETS);
    let mut src = src.chunks_exact(WORD_OCTETS);
    for (d, s) in (&mut chunks).zip(&mut src) {
        let w = word::load(d) ^ word::load(s);
        word::save(d, w);
    }
    for (d, s) in chunks.into_remainder().iter_mut().zip(src.remainder()) {
        *d ^= s;
    }
}

/// `a <-> b`.
#[inline]
pub fn swap(a: &mut [u8], b: &mut [u8]) {
    debug_assert_eq!(a.len(), b.len());
    a.swap_with_slice(b);
}

/// Folds `f` over corresponding words of `a` and `b`, the zero-padded tail last.
fn fold_words<T>(a: &[u8], b: &[u8], init: T, mut f: impl FnMut(T, Word, Word) -> T) -> T {
    let chunks = a.chunks_exact(WORD_OCTETS).zip(b.chunks_exact(WORD_OCTETS));
    let mut acc = chunks.fold(init, |acc, (a, b)| f(acc, word::load(a), word::load(b)));
    let tail = a.len() - a.len() % WORD_OCTETS;
    if tail < a.len() {
        acc = f(acc, load_tail(&a[tail..]), load_tail(&b[tail..]));
    }
    acc
}

/// `a == b`, constant time in the length.
pub fn eq(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let diff = fold_words(a, b, 0, |acc, a, b| acc | (a ^ b));
    word::eq_mask(diff, 0) != 0
}

/// `a == b`, returns at the first difference.
pub fn eq_fast(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a == b
}

/// `buf == 0`, constant time in the length. The empty buffer is zero.
pub fn is_zero(buf: &[u8]) -> bool {
    let acc = fold_words(buf, buf, 0, |acc, a, _| acc | a);
    word::eq_mask(acc, 0) != 0
}

/// `buf == 0`, returns at the first non-zero octet.
pub fn is_zero_fast(buf: &[u8]) -> bool {
    buf.iter().all(|&x| x == 0)
}

/// Compares `a` and `b` octet by octet, starting from the last one.
///
/// Constant time in the length.
pub fn cmp_rev(a: &[u8], b: &[u8]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    // (less, greater) masks, later (higher) words override
    let (lt, gt) = fold_words(a, b, (0, 0), |(lt, gt), a, b| {
        let same = word::eq_mask(a, b);
        (
            (lt & same) | word::less_mask(a, b),
            (gt & same) | word::less_mask(b, a),
        )
    });
    ((gt & 1) as i8 - (lt & 1) as i8).cmp(&0)
}

/// Fast variant of [`cmp_rev`].
pub fn cmp_rev_fast(a: &[u8], b: &[u8]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter().rev().cmp(b.iter().rev())
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn neg_matches_octetwise() {
        let mut buf = hex!("F0F1F2F3F4F5F6F7F8");
        neg(&mut buf);
        assert_eq!(buf, hex!("0F0E0D0C0B0A090807"));
        neg(&mut buf);
        assert_eq!(buf, hex!("F0F1F2F3F4F5F6F7F8"));

        let mut empty = [0u8; 0];
        neg(&mut empty);
    }

    #[test]
    fn xors() {
        let a = hex!("000102030405060708");
        let b = hex!("F0F1F2F3F4F5F6F7F8");
        let mut c = [0u8; 9];
        xor(&mut c, &a, &b);
        assert_eq!(c, [0xF0; 9]);

        xor_assign(&mut c, &b);
        xor_assign(&mut c[..8], &a[..8]);
        assert!(is_zero(&c[..8]) && is_zero_fast(&c[..8]));
        assert_eq!(c[8], 0x08);
        assert!(!is_zero(&c) && !is_zero_fast(&c));
    }

    #[test]
    fn swap_and_eq() {
        let mut a = hex!("0102030405060708090A");
        let mut b = hex!("0A0908070605040302FF");
        swap(&mut a, &mut b);
        assert_eq!(b, hex!("0102030405060708090A"));
        assert!(!eq(&a, &b) && !eq_fast(&a, &b));
        a.copy_from_slice(&b);
        assert!(eq(&a, &b) && eq_fast(&a, &b));
        assert!(eq(&[], &[]));
    }

    #[test]
    fn reverse_order() {
        // the last octet decides first
        let a = hex!("FF000000000000000001");
        let b = hex!("00000000000000000002");
        assert_eq!(cmp_rev(&a, &b), Ordering::Less);
        assert_eq!(cmp_rev_fast(&a, &b), Ordering::Less);
        assert_eq!(cmp_rev(&b, &a), Ordering::Greater);
        assert_eq!(cmp_rev(&a, &a), Ordering::Equal);

        let c = hex!("01020304050607FF");
        let d = hex!("02020304050607FF");
        assert_eq!(cmp_rev(&c, &d), Ordering::Less);
        assert_eq!(cmp_rev_fast(&c, &d), Ordering::Less);
        assert_eq!(cmp_rev(&[], &[]), Ordering::Equal);
    }

    #[test]
    fn random_buffers() {
        use crate::fixtures::random_octets;
        use rand_core::SeedableRng;
        use rand_chacha::ChaCha20Rng;

        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for len in 0..=20 {
            let a: [u8; 20] = random_octets(&mut rng);
            let mut b: [u8; 20] = random_octets(&mut rng);
            b[len / 2..].copy_from_slice(&a[len / 2..]);
            let (a, b) = (&a[..len], &b[..len]);

            assert_eq!(cmp_rev(a, b), cmp_rev_fast(a, b));
            assert_eq!(eq(a, b), eq_fast(a, b));
            assert_eq!(is_zero(a), is_zero_fast(a));

            let mut c = [0u8; 20];
            c[..len].copy_from_slice(a);
            neg(&mut c[..len]);
            assert!(c[..len].iter().zip(a).all(|(c, a)| *c == !*a));
            neg(&mut c[..len]);
            assert_eq!(&c[..len], a);
        }
    }
}
