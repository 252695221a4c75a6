use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{expand_key, Block, ExpandedKey};
use crate::{words, Error, Result};

/// Wide-block encryption (belt-wblock).
///
/// Encrypts a whole message of at least 32 octets in place, such that every
/// output octet depends on every input octet. The message is split into
/// 16-octet blocks `r_1, ..., r_n`, the last one possibly short. Each of the
/// `2n` rounds
/// - sums `r_1 ^ ... ^ r_{n-1}`,
/// - shifts the message down by one block and appends the sum,
/// - XORs the encrypted sum, offset by the round number, into the 16 octets
///   before the last 16.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Wbl {
    key: ExpandedKey,
}

impl Wbl {
    /// Shortest message, in octets.
    pub const MIN_LEN: usize = 2 * Block::LEN;

    pub fn new(key: &ExpandedKey) -> Self {
        Self { key: key.clone() }
    }

    /// Like [`Wbl::new`], expanding a 16, 24 or 32 octet `key` first.
    pub fn with_key(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&expand_key(key)?))
    }

    fn rounds(buf: &[u8]) -> Result<u64> {
        if buf.len() < Self::MIN_LEN {
            return Err(Error);
        }
        Ok((2 * ((buf.len() + Block::LEN - 1) / Block::LEN)) as u64)
    }

    /// Encrypted sum, offset by the round number.
    fn mask(&self, sum: &mut Block, round: u64) {
        sum.encrypt(&self.key);
        words::xor_assign(&mut sum.0[..8], &round.to_le_bytes());
    }

    /// Encrypts `buf` in place. Messages shorter than 32 octets are an [`Error`].
    pub fn encrypt(&self, buf: &mut [u8]) -> Result<()> {
        let rounds = Self::rounds(buf)?;
        let len = buf.len();
        let mut sum = Block::default();

        for round in 1..=rounds {
            sum.0.copy_from_slice(&buf[..Block::LEN]);
            for i in (Block::LEN..len - Block::LEN).step_by(Block::LEN) {
                words::xor_assign(&mut sum.0, &buf[i..i + Block::LEN]);
            }
            buf.copy_within(Block::LEN.., 0);
            buf[len - Block::LEN..].copy_from_slice(&sum.0);

            self.mask(&mut sum, round);
            words::xor_assign(&mut buf[len - 2 * Block::LEN..len - Block::LEN], &sum.0);
        }
        sum.zeroize();
        Ok(())
    }

    /// Decrypts `buf` in place. Messages shorter than 32 octets are an [`Error`].
    pub fn decrypt(&self, buf: &mut [u8]) -> Result<()> {
        let rounds = Self::rounds(buf)?;
        let len = buf.len();
        let mut sum = Block::default();

        for round in (1..=rounds).rev() {
            sum.0.copy_from_slice(&buf[len - Block::LEN..]);
            buf.copy_within(..len - Block::LEN, Block::LEN);
            buf[..Block::LEN].copy_from_slice(&sum.0);

            self.mask(&mut sum, round);
            words::xor_assign(&mut buf[len - Block::LEN..], &sum.0);

            // recover r_1 from the sum
            let (first, rest) = buf.split_at_mut(Block::LEN);
            for i in (0..len - 2 * Block::LEN).step_by(Block::LEN) {
                words::xor_assign(first, &rest[i..i + Block::LEN]);
            }
        }
        sum.zeroize();
        Ok(())
    }
}

impl fmt::Debug for Wbl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Wbl(<redacted>)")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::belt::h;
    use hex_literal::hex;

    #[test]
    fn encryption_a6() {
        let wbl = Wbl::with_key(&h()[128..160]).unwrap();
        let mut buf = [0u8; 48];
        buf.copy_from_slice(&h()[..48]);
        wbl.encrypt(&mut buf).unwrap();
        assert_eq!(
            buf[..],
            hex!(
                "49A38EE108D6C742E52B774F00A6EF98 B106CBD13EA4FB0680323051BC04DF76
                 E487B055C69BCF541176169F1DC9F6C8"
            )[..]
        );
        wbl.decrypt(&mut buf).unwrap();
        assert_eq!(buf[..], h()[..48]);
    }

    #[test]
    fn decryption_a7() {
        let wbl = Wbl::with_key(&h()[160..192]).unwrap();
        let mut buf = [0u8; 48];
        buf.copy_from_slice(&h()[64..112]);
        wbl.decrypt(&mut buf).unwrap();
        assert_eq!(
            buf[..],
            hex!(
                "92632EE0C21AD9E09A39343E5C07DAA4 889B03F2E6847EB152EC99F7A4D9F154
                 B5EF68D8E4A39E567153DE13D72254EE"
            )[..]
        );

        // short last block
        let mut buf = [0u8; 36];
        buf.copy_from_slice(&h()[64..100]);
        wbl.decrypt(&mut buf).unwrap();
        assert_eq!(
            buf[..],
            hex!("DF3F882230BAAFFC92F0566032117231 0E3CB2182681EF43102E67175E177BD7 5E93E4E8")[..]
        );
        wbl.encrypt(&mut buf).unwrap();
        assert_eq!(buf[..], h()[64..100]);
    }

    #[test]
    fn every_length_round_trips() {
        let wbl = Wbl::with_key(&h()[128..160]).unwrap();
        for len in Wbl::MIN_LEN..=80 {
            let mut buf = [0u8; 80];
            buf[..len].copy_from_slice(&h()[..len]);
            wbl.encrypt(&mut buf[..len]).unwrap();
            assert_ne!(buf[..len], h()[..len]);
            wbl.decrypt(&mut buf[..len]).unwrap();
            assert_eq!(buf[..len], h()[..len]);
        }
    }

    #[test]
    fn short_messages() {
        let wbl = Wbl::with_key(&h()[128..144]).unwrap();
        let mut buf = [0x5Au8; 31];
        assert_eq!(wbl.encrypt(&mut buf), Err(Error));
        assert_eq!(wbl.decrypt(&mut buf), Err(Error));
        assert_eq!(buf, [0x5A; 31]);
        assert!(Wbl::with_key(&[0u8; 20]).is_err());
    }
}
