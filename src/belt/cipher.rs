//! The block transforms.
//!
//! The state is four 32-bit registers `a, b, c, d`. Each of the 8 rounds runs
//! the same step sequence on a permutation of the registers; instead of
//! moving values around, a round addresses the registers through an index
//! table. After round 8 one fixed permutation (three swaps) puts the registers
//! into output order.

use ref_cast::RefCast;

use super::tables::{g13, g21, g5};
use super::{Block, ExpandedKey};

/// Register roles `(a, b, c, d)` of encryption rounds 1, 2, 3, 4 (and again 5, ..., 8).
const ENCRYPTION_ORDER: [[usize; 4]; 4] = [[0, 1, 2, 3], [1, 3, 0, 2], [3, 2, 1, 0], [2, 0, 3, 1]];

/// Register roles of decryption rounds 8, 7, 6, 5 (and again 4, ..., 1).
const DECRYPTION_ORDER: [[usize; 4]; 4] = [[0, 1, 2, 3], [2, 0, 3, 1], [3, 2, 1, 0], [1, 3, 0, 2]];

/// Round `i`, with `k(j)` the `j`-th subkey of the round.
#[inline(always)]
fn round(x: &mut [u32; 4], [a, b, c, d]: [usize; 4], i: u32, k: impl Fn(usize) -> u32) {
    x[b] ^= g5(x[a].wrapping_add(k(0)));
    x[c] ^= g21(x[d].wrapping_add(k(1)));
    x[a] = x[a].wrapping_sub(g13(x[b].wrapping_add(k(2))));
    // e = g21(b + c + k3) ^ i is folded into b and c
    x[c] = x[c].wrapping_add(x[b]);
    x[b] = x[b].wrapping_add(g21(x[c].wrapping_add(k(3))) ^ i);
    x[c] = x[c].wrapping_sub(x[b]);
    x[d] = x[d].wrapping_add(g13(x[c].wrapping_add(k(4))));
    x[b] ^= g21(x[a].wrapping_add(k(5)));
    x[c] ^= g5(x[d].wrapping_add(k(6)));
}

/// Encrypts the registers in place.
pub fn encrypt_words(x: &mut [u32; 4], key: &ExpandedKey) {
    let k = key.words();
    for i in 1..=8usize {
        round(x, ENCRYPTION_ORDER[(i - 1) % 4], i as u32, |j| k[(7 * i - 7 + j) % 8]);
    }
    // abcd -> bdac
    x.swap(0, 1);
    x.swap(2, 3);
    x.swap(1, 2);
}

/// Decrypts the registers in place.
pub fn decrypt_words(x: &mut [u32; 4], key: &ExpandedKey) {
    let k = key.words();
    for i in (1..=8usize).rev() {
        round(x, DECRYPTION_ORDER[(8 - i) % 4], i as u32, |j| k[(7 * i - 1 - j) % 8]);
    }
    // abcd -> cadb
    x.swap(0, 1);
    x.swap(2, 3);
    x.swap(0, 3);
}

/// Encrypts a block given as four separate registers.
pub fn encrypt_registers(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, key: &ExpandedKey) {
    let mut x = [*a, *b, *c, *d];
    encrypt_words(&mut x, key);
    let [xa, xb, xc, xd] = x;
    *a = xa;
    *b = xb;
    *c = xc;
    *d = xd;
}

/// Decrypts a block given as four separate registers.
pub fn decrypt_registers(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, key: &ExpandedKey) {
    let mut x = [*a, *b, *c, *d];
    decrypt_words(&mut x, key);
    let [xa, xb, xc, xd] = x;
    *a = xa;
    *b = xb;
    *c = xc;
    *d = xd;
}

impl Block {
    /// Encrypts the block in place.
    pub fn encrypt(&mut self, key: &ExpandedKey) {
        let mut x = self.registers();
        encrypt_words(&mut x, key);
        self.set_registers(x);
    }

    /// Decrypts the block in place.
    pub fn decrypt(&mut self, key: &ExpandedKey) {
        let mut x = self.registers();
        decrypt_words(&mut x, key);
        self.set_registers(x);
    }
}

/// Encrypts 16 octets in place.
#[inline]
pub fn encrypt_block(block: &mut [u8; 16], key: &ExpandedKey) {
    Block::ref_cast_mut(block).encrypt(key);
}

/// Decrypts 16 octets in place.
#[inline]
pub fn decrypt_block(block: &mut [u8; 16], key: &ExpandedKey) {
    Block::ref_cast_mut(block).decrypt(key);
}
