//! Substitution tables.
//!
//! `H` is the 8-bit S-box. The word tables `H5`, `H13`, `H21`, `H29` hold
//! `H[x]` as `u32` rotated left by 5, 13, 21 and 29 bits, folding the rotation
//! of the round function into the lookup. They are generated at compile time.

/// The H box.
pub(crate) const H: [u8; 256] = [
    0xB1, 0x94, 0xBA, 0xC8, 0x0A, 0x08, 0xF5, 0x3B, 0x36, 0x6D, 0x00, 0x8E, 0x58, 0x4A, 0x5D, 0xE4,
    0x85, 0x04, 0xFA, 0x9D, 0x1B, 0xB6, 0xC7, 0xAC, 0x25, 0x2E, 0x72, 0xC2, 0x02, 0xFD, 0xCE, 0x0D,
    0x5B, 0xE3, 0xD6, 0x12, 0x17, 0xB9, 0x61, 0x81, 0xFE, 0x67, 0x86, 0xAD, 0x71, 0x6B, 0x89, 0x0B,
    0x5C, 0xB0, 0xC0, 0xFF, 0x33, 0xC3, 0x56, 0xB8, 0x35, 0xC4, 0x05, 0xAE, 0xD8, 0xE0, 0x7F, 0x99,
    0xE1, 0x2B, 0xDC, 0x1A, 0xE2, 0x82, 0x57, 0xEC, 0x70, 0x3F, 0xCC, 0xF0, 0x95, 0xEE, 0x8D, 0xF1,
    0xC1, 0xAB, 0x76, 0x38, 0x9F, 0xE6, 0x78, 0xCA, 0xF7, 0xC6, 0xF8, 0x60, 0xD5, 0xBB, 0x9C, 0x4F,
    0xF3, 0x3C, 0x65, 0x7B, 0x63, 0x7C, 0x30, 0x6A, 0xDD, 0x4E, 0xA7, 0x79, 0x9E, 0xB2, 0x3D, 0x31,
    0x3E, 0x98, 0xB5, 0x6E, 0x27, 0xD3, 0xBC, 0xCF, 0x59, 0x1E, 0x18, 0x1F, 0x4C, 0x5A, 0xB7, 0x93,
    0xE9, 0xDE, 0xE7, 0x2C, 0x8F, 0x0C, 0x0F, 0xA6, 0x2D, 0xDB, 0x49, 0xF4, 0x6F, 0x73, 0x96, 0x47,
    0x06, 0x07, 0x53, 0x16, 0xED, 0x24, 0x7A, 0x37, 0x39, 0xCB, 0xA3, 0x83, 0x03, 0xA9, 0x8B, 0xF6,
    0x92, 0xBD, 0x9B, 0x1C, 0xE5, 0xD1, 0x41, 0x01, 0x54, 0x45, 0xFB, 0xC9, 0x5E, 0x4D, 0x0E, 0xF2,
    0x68, 0x20, 0x80, 0xAA, 0x22, 0x7D, 0x64, 0x2F, 0x26, 0x87, 0xF9, 0x34, 0x90, 0x40, 0x55, 0x11,
    0xBE, 0x32, 0x97, 0x13, 0x43, 0xFC, 0x9A, 0x48, 0xA0, 0x2A, 0x88, 0x5F, 0x19, 0x4B, 0x09, 0xA1,
    0x7E, 0xCD, 0xA4, 0xD0, 0x15, 0x44, 0xAF, 0x8C, 0xA5, 0x84, 0x50, 0xBF, 0x66, 0xD2, 0xE8, 0x8A,
    0xA2, 0xD7, 0x46, 0x52, 0x42, 0xA8, 0xDF, 0xB3, 0x69, 0x74, 0xC5, 0x51, 0xEB, 0x23, 0x29, 0x21,
    0xD4, 0xEF, 0xD9, 0xB4, 0x3A, 0x62, 0x28, 0x75, 0x91, 0x14, 0x10, 0xEA, 0x77, 0x6C, 0xDA, 0x1D,
];

const fn rotated(r: u32) -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut x = 0;
    while x < 256 {
        table[x] = (H[x] as u32).rotate_left(r);
        x += 1;
    }
    table
}

static H5: [u32; 256] = rotated(5);
static H13: [u32; 256] = rotated(13);
static H21: [u32; 256] = rotated(21);
static H29: [u32; 256] = rotated(29);

#[inline(always)]
fn lookup(t0: &[u32; 256], t1: &[u32; 256], t2: &[u32; 256], t3: &[u32; 256], x: u32) -> u32 {
    t0[(x & 0xFF) as usize]
        ^ t1[((x >> 8) & 0xFF) as usize]
        ^ t2[((x >> 16) & 0xFF) as usize]
        ^ t3[(x >> 24) as usize]
}

/// Substitution of the four octets of `x`, then rotation by 5.
#[inline(always)]
pub(crate) fn g5(x: u32) -> u32 {
    lookup(&H5, &H13, &H21, &H29, x)
}

/// Substitution of the four octets of `x`, then rotation by 13.
#[inline(always)]
pub(crate) fn g13(x: u32) -> u32 {
    lookup(&H13, &H21, &H29, &H5, x)
}

/// Substitution of the four octets of `x`, then rotation by 21.
#[inline(always)]
pub(crate) fn g21(x: u32) -> u32 {
    lookup(&H21, &H29, &H5, &H13, x)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rotated_tables() {
        assert_eq!(H[0], 0xB1);
        assert_eq!(H[255], 0x1D);
        assert_eq!(H5[0], 0x0000_1620);
        assert_eq!(H13[0], 0x0016_2000);
        assert_eq!(H21[0], 0x1620_0000);
        assert_eq!(H29[0], 0x2000_0016);
        assert_eq!(H29[1], 0x8000_0012);
        assert_eq!(H5[255], 0x0000_03A0);
    }

    #[test]
    fn h_is_a_permutation() {
        let mut seen = [false; 256];
        for &y in H.iter() {
            assert!(!seen[y as usize]);
            seen[y as usize] = true;
        }
    }

    #[test]
    fn g_is_substitute_then_rotate() {
        for &x in [0u32, 1, 0x0102_0304, 0xDEAD_BEEF, u32::MAX].iter() {
            let b = x.to_le_bytes();
            let sub = u32::from_le_bytes([
                H[b[0] as usize],
                H[b[1] as usize],
                H[b[2] as usize],
                H[b[3] as usize],
            ]);
            assert_eq!(g5(x), sub.rotate_left(5));
            assert_eq!(g13(x), sub.rotate_left(13));
            assert_eq!(g21(x), sub.rotate_left(21));
        }
    }
}
