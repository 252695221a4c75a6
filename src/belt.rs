//! belt, the block cipher of STB 34.101.31.
//!
//! 128-bit blocks, 256-bit keys (128 and 192 bit keys are stretched), eight
//! rounds of additions, XORs and the table lookups `G5`, `G13`, `G21`.
//! The transforms have no branches that depend on the key or the block.
//! The table lookups are indexed by key and block data, so their timing may
//! leak through the cache.
//!
//! ```
//! use belt_ww::belt::{encrypt_block, decrypt_block, expand_key, h};
//!
//! let key = expand_key(&h()[128..160]).unwrap();
//! let mut block = [0u8; 16];
//! block.copy_from_slice(&h()[..16]);
//!
//! encrypt_block(&mut block, &key);
//! assert_eq!(block, hex_literal::hex!("69CCA1C93557C9E3D66BC3E0FA88FA6E"));
//! decrypt_block(&mut block, &key);
//! assert_eq!(block[..], h()[..16]);
//! ```

mod block;
mod cipher;
mod ctr;
mod key;
mod tables;
mod wbl;

pub use block::Block;
pub use cipher::{
    decrypt_block, decrypt_registers, decrypt_words, encrypt_block, encrypt_registers,
    encrypt_words,
};
pub use ctr::Ctr;
pub use key::{expand_key, ExpandedKey};
pub use wbl::Wbl;

/// The H box, whose entries also serve as test data in STB 34.101.31.
pub fn h() -> &'static [u8; 256] {
    &tables::H
}
