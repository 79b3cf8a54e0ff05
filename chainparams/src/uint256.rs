use std::convert::TryFrom;
use std::fmt::{
    Debug,
    Display,
    Formatter
};

use serde::{Serialize, Serializer};

/// A 256-bit value used for block hashes and difficulty limits
///
/// Bytes are stored least significant first. The hex representation is the reverse, most
/// significant byte first, as block explorers show it
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    pub fn null() -> Self {
        Uint256([0; 32])
    }

    /// All ones shifted right by `bits`, the usual way of writing a difficulty limit
    pub fn max_shr(bits: u32) -> Self {
        let mut data = [0xff; 32];
        let bits = bits.min(256) as usize;
        let (whole_bytes, remainder) = (bits / 8, bits % 8);

        for byte in data.iter_mut().rev().take(whole_bytes) {
            *byte = 0;
        }
        if whole_bytes < 32 {
            data[31 - whole_bytes] >>= remainder;
        }
        Uint256(data)
    }

    pub fn is_null(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }

    /// Raw little-endian bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }
}

impl Display for Uint256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Debug for Uint256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Uint256({})", self.to_hex())
    }
}

impl From<[u8; 32]> for Uint256 {
    fn from(data: [u8; 32]) -> Self {
        Uint256(data)
    }
}

/// Parses the most-significant-first hex form, with or without a `0x` prefix
impl TryFrom<&str> for Uint256 {
    type Error = hex::FromHexError;
    fn try_from(data: &str) -> Result<Self, Self::Error> {
        let data = data.trim_start_matches("0x");
        if data.len() != 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let decoded = hex::decode(data)?;

        let mut bytes = [0; 32];
        for (dst, src) in bytes.iter_mut().zip(decoded.iter().rev()) {
            *dst = *src;
        }
        Ok(Uint256(bytes))
    }
}

impl Serialize for Uint256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_hash() {
        assert!(Uint256::null().is_null());
        assert_eq!(Uint256::null().to_string(), "0000000000000000000000000000000000000000000000000000000000000000");
    }

    #[test]
    fn shifts_difficulty_limits() {
        assert_eq!(Uint256::max_shr(20).to_string(), "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
        assert_eq!(Uint256::max_shr(1).to_string(), "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
        assert_eq!(Uint256::max_shr(24).to_string(), "000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
        assert!(Uint256::max_shr(256).is_null());
        assert!(Uint256::max_shr(300).is_null());
    }

    #[test]
    fn decodes_most_significant_byte_first() {
        let hash = Uint256::try_from("0x0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20").unwrap();
        assert_eq!(hash.as_bytes()[0], 0x20);
        assert_eq!(hash.as_bytes()[31], 0x01);
        assert_eq!(hash.to_string(), "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20");
    }

    #[test]
    fn errors_on_invalid_input() {
        assert!(Uint256::try_from("01").is_err());
        assert!(Uint256::try_from("zz02030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20").is_err());
    }
}
