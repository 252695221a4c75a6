//! Machine words.
//!
//! The width of a [`Word`] is fixed at build time: feature `u16`, `u32` or `u64`.
//! If none is requested, `build.rs` picks the target's pointer width.
//!
//! Forcing a width other than the native one is mostly useful for testing
//! (typically embedded targets are 32 bit, while desktop/server targets are 64 bit).

/// A word on the machine. Word arrays ([`crate::ww`]) are composed of many of these.
pub type Word = word::Word;

/// Number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of octets in a [`Word`].
pub const WORD_OCTETS: usize = WORD_BITS / 8;

/// All bits set.
pub const WORD_MAX: Word = Word::MAX;

#[cfg(not(any(feature = "u16", feature = "u32", feature = "u64")))]
compile_error!("Either feature u16, u32 or u64!");

#[cfg(any(
    all(feature = "u16", feature = "u32"),
    all(feature = "u16", feature = "u64"),
    all(feature = "u32", feature = "u64"),
))]
compile_error!("Exactly one of features u16, u32, u64!");

#[cfg(feature = "u16")]
mod word {
    pub type Word = u16;
}

#[cfg(feature = "u32")]
mod word {
    pub type Word = u32;
}

#[cfg(feature = "u64")]
mod word {
    pub type Word = u64;
}

/// Number of words needed to hold `bits` bits.
#[inline]
pub const fn words_for_bits(bits: usize) -> usize {
    (bits + WORD_BITS - 1) / WORD_BITS
}

/// Number of words needed to hold `octets` octets.
#[inline]
pub const fn words_for_octets(octets: usize) -> usize {
    (octets + WORD_OCTETS - 1) / WORD_OCTETS
}

/// Word from (possibly unaligned) little-endian octets.
///
/// Panics if `buf` is shorter than [`WORD_OCTETS`].
#[inline]
pub fn load(buf: &[u8]) -> Word {
    let mut bytes = [0u8; WORD_OCTETS];
    bytes.copy_from_slice(&buf[..WORD_OCTETS]);
    Word::from_le_bytes(bytes)
}

/// Word to (possibly unaligned) little-endian octets.
#[inline]
pub fn save(buf: &mut [u8], w: Word) {
    buf[..WORD_OCTETS].copy_from_slice(&w.to_le_bytes());
}

/// `WORD_MAX` if `a == b`, else 0. No branches.
#[inline]
pub fn eq_mask(a: Word, b: Word) -> Word {
    let x = a ^ b;
    // top bit of (x | -x) is set iff x != 0
    let nonzero = (x | x.wrapping_neg()) >> (WORD_BITS - 1);
    nonzero.wrapping_sub(1)
}

/// `WORD_MAX` if `a < b`, else 0. No branches.
///
/// Cf. Hacker's Delight, 2-12.
#[inline]
pub fn less_mask(a: Word, b: Word) -> Word {
    let borrow = ((!a & b) | ((!a | b) & a.wrapping_sub(b))) >> (WORD_BITS - 1);
    borrow.wrapping_neg()
}

/// Number of set bits.
#[inline]
pub fn weight(w: Word) -> usize {
    w.count_ones() as usize
}

/// Is the number of set bits odd?
#[inline]
pub fn parity(w: Word) -> bool {
    w.count_ones() & 1 == 1
}

/// Octets in reverse order.
#[inline]
pub fn rev(w: Word) -> Word {
    w.swap_bytes()
}

/// Number of leading zero bits, `WORD_BITS` for zero. No branches.
pub fn clz_safe(w: Word) -> usize {
    let mut w = w;
    let mut n: Word = 0;
    let mut width = WORD_BITS / 2;
    while width > 0 {
        // top `width` bits zero: count them, move the rest up
        let m = eq_mask(w >> (WORD_BITS - width), 0);
        n += m & width as Word;
        w = (w & !m) | ((w << width) & m);
        width /= 2;
    }
    (n + (eq_mask(w, 0) & 1)) as usize
}

/// Number of trailing zero bits, `WORD_BITS` for zero. No branches.
pub fn ctz_safe(w: Word) -> usize {
    let mut w = w;
    let mut n: Word = 0;
    let mut width = WORD_BITS / 2;
    while width > 0 {
        let m = eq_mask(w << (WORD_BITS - width), 0);
        n += m & width as Word;
        w = (w & !m) | ((w >> width) & m);
        width /= 2;
    }
    (n + (eq_mask(w, 0) & 1)) as usize
}
