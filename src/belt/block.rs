use core::fmt;

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::{words, Error, Result};

/// 128-bit block, viewed as octets or as four little-endian `u32` registers.
///
/// A `&mut [u8; 16]` can be used as a `&mut Block` in place via [`RefCast`].
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, PartialEq, RefCast, Zeroize)]
pub struct Block(pub [u8; 16]);

impl Block {
    /// Octets in a block.
    pub const LEN: usize = 16;

    /// Copies a block out of a slice of exactly 16 octets.
    pub fn from_slice(octets: &[u8]) -> Result<Self> {
        if octets.len() != Self::LEN {
            return Err(Error);
        }
        let mut block = Self::default();
        block.0.copy_from_slice(octets);
        Ok(block)
    }

    pub fn from_registers(registers: [u32; 4]) -> Self {
        let mut block = Self::default();
        block.set_registers(registers);
        block
    }

    /// The four registers, each a little-endian decode of four octets.
    pub fn registers(&self) -> [u32; 4] {
        let mut registers = [0u32; 4];
        for (r, chunk) in registers.iter_mut().zip(self.0.chunks_exact(4)) {
            *r = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        registers
    }

    pub fn set_registers(&mut self, registers: [u32; 4]) {
        for (chunk, r) in self.0.chunks_exact_mut(4).zip(registers.iter()) {
            chunk.copy_from_slice(&r.to_le_bytes());
        }
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8; 16] {
        &mut self.0
    }

    /// `self ^ other`.
    pub fn xor(&self, other: &Block) -> Block {
        let mut sum = Block::default();
        words::xor(&mut sum.0, &self.0, &other.0);
        sum
    }

    /// `self <- self ^ other`.
    pub fn xor_assign(&mut self, other: &Block) {
        words::xor_assign(&mut self.0, &other.0);
    }

    /// `self <- !self`.
    pub fn neg(&mut self) {
        words::neg(&mut self.0);
    }

    /// Are the first 64 bits all zero? Constant time.
    pub fn is_half_zero(&self) -> bool {
        words::is_zero(&self.0[..8])
    }

    /// Adds one to the block as a 128-bit little-endian counter of `u32` words,
    /// wrapping around at `2^128`.
    pub fn increment(&mut self) {
        let mut registers = self.registers();
        let mut carry = 1u32;
        for r in registers.iter_mut() {
            let (sum, overflow) = r.overflowing_add(carry);
            *r = sum;
            carry = overflow as u32;
        }
        self.set_registers(registers);
    }
}

impl From<[u8; 16]> for Block {
    fn from(octets: [u8; 16]) -> Self {
        Self(octets)
    }
}

impl From<Block> for [u8; 16] {
    fn from(block: Block) -> Self {
        block.0
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Block {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "hex-debug")]
        {
            write!(f, "Block({})", delog::hex_str!(&self.0[..]))
        }

        #[cfg(not(feature = "hex-debug"))]
        {
            f.debug_tuple("Block").field(&self.0).finish()
        }
    }
}
