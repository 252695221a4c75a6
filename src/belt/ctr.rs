use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{expand_key, Block, ExpandedKey};
use crate::{words, Result};

/// Counter mode (belt-ctr) keystream.
///
/// The counter starts at the encrypted IV and is incremented before each
/// keystream block. Encryption and decryption are the same operation, and a
/// message may be processed in pieces of any size.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr {
    key: ExpandedKey,
    counter: Block,
    keystream: Block,
    // octets of `keystream` already used
    used: usize,
}

impl Ctr {
    pub fn new(key: &ExpandedKey, iv: &[u8; 16]) -> Self {
        let mut counter = Block(*iv);
        counter.encrypt(key);
        Self {
            key: key.clone(),
            counter,
            keystream: Block::default(),
            used: Block::LEN,
        }
    }

    /// Like [`Ctr::new`], expanding a 16, 24 or 32 octet `key` first.
    pub fn with_key(key: &[u8], iv: &[u8; 16]) -> Result<Self> {
        Ok(Self::new(&expand_key(key)?, iv))
    }

    /// XORs the next `buf.len()` keystream octets into `buf`.
    pub fn apply(&mut self, buf: &mut [u8]) {
        let mut pos = 0;
        while pos < buf.len() {
            if self.used == Block::LEN {
                self.counter.increment();
                self.keystream = self.counter;
                self.keystream.encrypt(&self.key);
                self.used = 0;
            }
            let n = (Block::LEN - self.used).min(buf.len() - pos);
            words::xor_assign(
                &mut buf[pos..pos + n],
                &self.keystream.0[self.used..self.used + n],
            );
            self.used += n;
            pos += n;
        }
    }
}

impl core::fmt::Debug for Ctr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ctr").field("used", &self.used).finish()
    }
}
