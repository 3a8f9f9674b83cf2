//! Hex codes: a compact, single-integer identity for each hex.
//!
//! A code is built by interleaving the bits of `q` and `r` (a Z-order, or
//! Morton, curve). Bit `i` of `q` lands on bit `2i` of the code and bit `i`
//! of `r` on bit `2i + 1`. Since the axes are signed, each one is first mapped
//! to an unsigned value in sign-magnitude form: non-negative values are left
//! alone, negative values store their magnitude with the axis's top bit set.
//! That keeps small non-negative hexes on small codes, e.g. `(0, 0) => 0`,
//! `(1, 0) => 1`, `(0, 1) => 2`, `(1, 1) => 3`.

use crate::error::HexError;
use crate::hex::Hex;
use derive_more::{Display, From, Into};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ORDERED map of hex codes to some `T`. Lookups are O(1), and iteration
/// follows insertion order.
pub type HexCodeIndexMap<T> = IndexMap<HexCode, T, FnvBuildHasher>;

/// The encoded form of a [Hex]. See the module-level docs for the layout.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct HexCode(pub i64);

/// Encodes and decodes [HexCode]s. The coder is configured with a number of
/// bits per axis, which bounds the hexes it can represent: each axis can hold
/// values with a magnitude up to `2^(bits - 1) - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexCoder {
    bits: u32,
}

impl HexCoder {
    /// Two axes have to fit in one 64-bit code
    pub const MAX_BITS: u32 = 32;

    /// Create a coder that uses `bits` bits per axis. Must be in the range
    /// `[1, 32]`.
    pub fn new(bits: u32) -> Result<Self, HexError> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(HexError::InvalidArgument(format!(
                "bits per axis must be in [1, {}], got {}",
                Self::MAX_BITS,
                bits
            )));
        }
        Ok(Self { bits })
    }

    /// Number of bits used per axis
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The largest magnitude that can be encoded on either axis. The range
    /// is symmetric, so `-max_value()` is the smallest encodable value.
    pub fn max_value(&self) -> i64 {
        (self.sign_bit() - 1) as i64
    }

    /// Encode a `(q, r)` pair. Fails if either value is out of range for
    /// this coder, rather than silently truncating it.
    pub fn encode(&self, q: i64, r: i64) -> Result<HexCode, HexError> {
        let q = self.shift_sign(q)?;
        let r = self.shift_sign(r)?;
        Ok(HexCode((spread(q) | (spread(r) << 1)) as i64))
    }

    pub fn encode_hex(&self, hex: Hex) -> Result<HexCode, HexError> {
        self.encode(hex.q(), hex.r())
    }

    /// Decode a code back into a hex. For any code produced by
    /// [Self::encode], this gives back exactly the input. Bits above this
    /// coder's width are ignored.
    pub fn decode(&self, code: HexCode) -> Hex {
        let code = code.0 as u64;
        let q = self.unshift_sign(compact(code) & self.axis_mask());
        let r = self.unshift_sign(compact(code >> 1) & self.axis_mask());
        Hex::new(q, r)
    }

    fn sign_bit(&self) -> u64 {
        1 << (self.bits - 1)
    }

    fn axis_mask(&self) -> u64 {
        u64::MAX >> (64 - self.bits)
    }

    /// Map a signed value to its sign-magnitude form
    fn shift_sign(&self, value: i64) -> Result<u64, HexError> {
        let max = self.max_value();
        if value > max || value < -max {
            return Err(HexError::EncodingOverflow {
                value,
                bits: self.bits,
            });
        }

        if value < 0 {
            Ok(value.unsigned_abs() | self.sign_bit())
        } else {
            Ok(value as u64)
        }
    }

    fn unshift_sign(&self, value: u64) -> i64 {
        let magnitude = (value & (self.sign_bit() - 1)) as i64;
        if value & self.sign_bit() == 0 {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl Default for HexCoder {
    fn default() -> Self {
        Self {
            bits: Self::MAX_BITS,
        }
    }
}

/// Spread the low 32 bits of a value out so there's a zero between each
/// pair, e.g. `0b1011 => 0b01000101`
fn spread(value: u64) -> u64 {
    let mut x = value & 0x0000_0000_FFFF_FFFF;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

/// Inverse of [spread]: gather every even bit into the low 32 bits
fn compact(value: u64) -> u64 {
    let mut x = value & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_compact() {
        assert_eq!(spread(0b1011), 0b0100_0101);
        assert_eq!(compact(0b0100_0101), 0b1011);
        assert_eq!(spread(0xFFFF_FFFF), 0x5555_5555_5555_5555);
        assert_eq!(compact(0x5555_5555_5555_5555), 0xFFFF_FFFF);
        // Odd bits are dropped
        assert_eq!(compact(0b1010), 0);
    }

    #[test]
    fn test_small_codes() {
        let coder = HexCoder::default();
        let code = |q, r| coder.encode(q, r).unwrap().0;
        assert_eq!(code(0, 0), 0);
        assert_eq!(code(1, 0), 1);
        assert_eq!(code(0, 1), 2);
        assert_eq!(code(1, 1), 3);
        assert_eq!(code(2, 0), 4);
        assert_eq!(code(1, 2), 9);
        assert_eq!(code(20, 26), 920);
        assert_eq!(code(20, 28), 944);
    }

    #[test]
    fn test_negative_codes() {
        let coder = HexCoder::new(4).unwrap();
        // -1 on a 4-bit axis is 0b1001
        assert_eq!(coder.encode(-1, 0).unwrap(), HexCode(0b0100_0001));
        assert_eq!(coder.encode(0, -1).unwrap(), HexCode(0b1000_0010));
        assert_eq!(coder.decode(HexCode(0b1100_0011)), Hex::new(-1, -1));
    }

    #[test]
    fn test_round_trip() {
        for bits in &[1, 2, 5, 16, 31, 32] {
            let coder = HexCoder::new(*bits).unwrap();
            let max = coder.max_value();
            let values = [0, 1, -1, 2, -2, 7, -7, max / 2, -max / 2, max, -max];
            for &q in values.iter().filter(|v| v.abs() <= max) {
                for &r in values.iter().filter(|v| v.abs() <= max) {
                    let code = coder.encode(q, r).unwrap();
                    assert_eq!(
                        coder.decode(code),
                        Hex::new(q, r),
                        "round trip failed for ({}, {}) with {} bits",
                        q,
                        r,
                        bits
                    );
                }
            }
        }
    }

    /// Codes for non-negative hexes follow Z-order, so they never collide
    #[test]
    fn test_codes_unique() {
        let coder = HexCoder::new(5).unwrap();
        let max = coder.max_value();
        let mut codes = Vec::new();
        for q in -max..=max {
            for r in -max..=max {
                codes.push(coder.encode(q, r).unwrap());
            }
        }
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_max_value() {
        assert_eq!(HexCoder::new(1).unwrap().max_value(), 0);
        assert_eq!(HexCoder::new(4).unwrap().max_value(), 7);
        assert_eq!(HexCoder::default().max_value(), i32::MAX as i64);
    }

    #[test]
    fn test_overflow() {
        let coder = HexCoder::new(4).unwrap();
        assert!(coder.encode(7, -7).is_ok());
        assert_eq!(
            coder.encode(8, 0),
            Err(HexError::EncodingOverflow { value: 8, bits: 4 })
        );
        assert_eq!(
            coder.encode(0, -8),
            Err(HexError::EncodingOverflow { value: -8, bits: 4 })
        );

        let coder = HexCoder::default();
        assert!(coder.encode(i64::from(i32::MAX), 0).is_ok());
        assert!(coder.encode(i64::from(i32::MAX) + 1, 0).is_err());
        assert!(coder.encode(i64::MIN, 0).is_err());
    }

    #[test]
    fn test_invalid_bits() {
        assert!(matches!(
            HexCoder::new(0),
            Err(HexError::InvalidArgument(_))
        ));
        assert!(matches!(
            HexCoder::new(33),
            Err(HexError::InvalidArgument(_))
        ));
        assert_eq!(HexCoder::new(32).unwrap(), HexCoder::default());
    }
}
