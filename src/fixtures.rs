//! Deterministic test data.

use rand_core::RngCore;

use crate::word::{Word, WORD_OCTETS};

pub fn random_word(rng: &mut impl RngCore) -> Word {
    let mut bytes = [0u8; WORD_OCTETS];
    rng.fill_bytes(&mut bytes);
    Word::from_le_bytes(bytes)
}

pub fn random_words<const N: usize>(rng: &mut impl RngCore) -> [Word; N] {
    let mut a = [0 as Word; N];
    for x in a.iter_mut() {
        *x = random_word(rng);
    }
    a
}

pub fn random_octets<const N: usize>(rng: &mut impl RngCore) -> [u8; N] {
    let mut a = [0u8; N];
    rng.fill_bytes(&mut a);
    a
}
