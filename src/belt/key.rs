use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// Key in the form the block transforms consume: eight 32-bit words.
///
/// Shorter keys are stretched to 256 bits (see [`expand_key`]); no key-dependent
/// tables are derived. Zeroized on drop, and `Debug` does not print it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExpandedKey([u32; 8]);

/// Little-endian decodes of the 4-octet chunks of `key`, into the leading words of `k`.
fn load_words(k: &mut [u32; 8], key: &[u8]) {
    for (w, chunk) in k.iter_mut().zip(key.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Expands a 16, 24 or 32 octet key.
///
/// - 16 octets are repeated,
/// - 24 octets get two more words, `k[6] = k[0] ^ k[1] ^ k[2]` and `k[7] = k[3] ^ k[4] ^ k[5]`,
/// - 32 octets are used as they are.
///
/// Words are little-endian decodes of the key octets. Any other length is an [`Error`].
pub fn expand_key(key: &[u8]) -> Result<ExpandedKey> {
    if !matches!(key.len(), 16 | 24 | 32) {
        return Err(Error);
    }

    let mut k = [0u32; 8];
    load_words(&mut k, key);
    match key.len() {
        16 => k.copy_within(..4, 4),
        24 => {
            k[6] = k[0] ^ k[1] ^ k[2];
            k[7] = k[3] ^ k[4] ^ k[5];
        }
        _ => {}
    }
    Ok(ExpandedKey(k))
}

impl ExpandedKey {
    pub fn from_words(words: [u32; 8]) -> Self {
        Self(words)
    }

    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// The expanded key as 32 octets.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut octets = [0u8; 32];
        for (chunk, w) in octets.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&w.to_le_bytes());
        }
        octets
    }
}

impl TryFrom<&[u8]> for ExpandedKey {
    type Error = Error;

    fn try_from(key: &[u8]) -> Result<Self> {
        expand_key(key)
    }
}

impl From<&[u8; 32]> for ExpandedKey {
    fn from(key: &[u8; 32]) -> Self {
        let mut k = [0u32; 8];
        load_words(&mut k, key);
        Self(k)
    }
}

impl ConstantTimeEq for ExpandedKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExpandedKey(<redacted>)")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    const KEY: [u8; 32] = hex!("E9DEE72C8F0C0FA62DDB49F46F73964706075316ED247A3739CBA38303A98BF6");

    #[test]
    fn lengths() {
        for len in [0usize, 1, 15, 17, 23, 25, 31, 33, 64].iter() {
            assert_eq!(expand_key(&[0u8; 64][..*len]).unwrap_err(), Error);
        }
        for len in [16usize, 24, 32].iter() {
            assert!(expand_key(&KEY[..*len]).is_ok());
        }
    }

    #[test]
    fn full_key_is_unchanged() {
        let key = expand_key(&KEY).unwrap();
        assert_eq!(key.to_bytes(), KEY);
        assert_eq!(key.words()[0], 0x2CE7_DEE9);
        assert!(bool::from(key.ct_eq(&ExpandedKey::from(&KEY))));
    }

    #[test]
    fn constructors_decode_alike() {
        let checked = expand_key(&KEY).unwrap();
        let direct = ExpandedKey::from(&KEY);
        assert_eq!(checked.words(), direct.words());
        assert_eq!(direct.words()[7], 0xF68B_A903);
    }

    #[test]
    fn short_key_is_repeated() {
        let key = expand_key(&KEY[..16]).unwrap();
        let k = key.words();
        assert_eq!(k[..4], k[4..]);
        assert_eq!(key.to_bytes()[16..], KEY[..16]);

        let again = ExpandedKey::try_from(&KEY[..16]).unwrap();
        assert!(bool::from(key.ct_eq(&again)));
    }

    #[test]
    fn medium_key_is_folded() {
        let key = expand_key(&KEY[..24]).unwrap();
        let k = key.words();
        assert_eq!(k[6], k[0] ^ k[1] ^ k[2]);
        assert_eq!(k[7], k[3] ^ k[4] ^ k[5]);
        assert_eq!(key.to_bytes()[..24], KEY[..24]);
    }

    #[test]
    fn debug_is_redacted() {
        let key = expand_key(&KEY).unwrap();
        assert_eq!(format!("{:?}", key), "ExpandedKey(<redacted>)");
    }
}
