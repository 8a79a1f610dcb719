//! Canonical amount type and its storage codec.
//!
//! Amounts are unsigned 256-bit integers as the token standard requires.
//! The on-storage representation is a fixed 32-byte little-endian array so
//! that every stored value has exactly one byte encoding.

use primitive_types::U256;

/// Token amount. Checked or saturating arithmetic per operation, never
/// silently wrapping.
pub type Amount = U256;

/// Width of the fixed amount codec in bytes.
pub const AMOUNT_BYTES: usize = 32;

/// Encode an amount as 32 little-endian bytes.
pub fn amount_to_bytes(amount: Amount) -> [u8; AMOUNT_BYTES] {
    let mut bytes = [0u8; AMOUNT_BYTES];
    amount.to_little_endian(&mut bytes);
    bytes
}

/// Decode an amount from 32 little-endian bytes.
pub fn amount_from_bytes(bytes: &[u8; AMOUNT_BYTES]) -> Amount {
    Amount::from_little_endian(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_codec_round_trip() {
        for amount in [
            Amount::zero(),
            Amount::from(1u64),
            Amount::from(u128::MAX),
            Amount::MAX,
        ] {
            assert_eq!(amount_from_bytes(&amount_to_bytes(amount)), amount);
        }
    }

    #[test]
    fn test_amount_codec_is_little_endian() {
        let bytes = amount_to_bytes(Amount::from(0x01_02u64));
        assert_eq!(bytes[0], 0x02);
        assert_eq!(bytes[1], 0x01);
        assert!(bytes[2..].iter().all(|b| *b == 0));
    }
}
