//! Canonical account identity for the token ledger.
//!
//! A [`Key`] is a closed tagged union over the address variants the host
//! chain distinguishes: user accounts and deployed contracts. Both wrap a
//! fixed 32-byte hash. Equality is structural, and the canonical byte
//! encoding below is injective: two distinct keys never serialize to the
//! same byte string, which is what makes derived storage keys collision-free.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant tag for [`Key::Account`] in the canonical encoding.
pub const KEY_TAG_ACCOUNT: u8 = 0;

/// Variant tag for [`Key::Contract`] in the canonical encoding.
pub const KEY_TAG_CONTRACT: u8 = 1;

/// Length of the hash payload in every key variant.
pub const KEY_HASH_LENGTH: usize = 32;

// =============================================================================
// HASH NEWTYPES
// =============================================================================

/// 32-byte hash identifying a user account.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct AccountHash(pub [u8; KEY_HASH_LENGTH]);

/// 32-byte hash identifying a deployed contract.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct ContractHash(pub [u8; KEY_HASH_LENGTH]);

macro_rules! impl_hash_newtype {
    ($name:ident, $display_prefix:expr) => {
        impl $name {
            /// Create from raw bytes.
            pub const fn new(bytes: [u8; KEY_HASH_LENGTH]) -> Self {
                Self(bytes)
            }

            /// Borrow the underlying bytes.
            pub const fn as_bytes(&self) -> &[u8; KEY_HASH_LENGTH] {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), hex::encode(&self.0[..8]))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, hex::encode(self.0))
            }
        }

        impl From<[u8; KEY_HASH_LENGTH]> for $name {
            fn from(bytes: [u8; KEY_HASH_LENGTH]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

impl_hash_newtype!(AccountHash, "account-hash-");
impl_hash_newtype!(ContractHash, "contract-hash-");

// =============================================================================
// KEY
// =============================================================================

/// Account identity: a closed set of discriminated address variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    /// A user account, addressed by account hash.
    Account(AccountHash),
    /// A deployed contract, addressed by contract hash.
    Contract(ContractHash),
}

impl Key {
    /// Build an account key from raw hash bytes.
    pub const fn account(bytes: [u8; KEY_HASH_LENGTH]) -> Self {
        Key::Account(AccountHash::new(bytes))
    }

    /// Build a contract key from raw hash bytes.
    pub const fn contract(bytes: [u8; KEY_HASH_LENGTH]) -> Self {
        Key::Contract(ContractHash::new(bytes))
    }

    /// Variant tag used in the canonical encoding.
    pub const fn tag(&self) -> u8 {
        match self {
            Key::Account(_) => KEY_TAG_ACCOUNT,
            Key::Contract(_) => KEY_TAG_CONTRACT,
        }
    }

    /// Hash payload, independent of variant.
    pub const fn hash_bytes(&self) -> &[u8; KEY_HASH_LENGTH] {
        match self {
            Key::Account(AccountHash(bytes)) => bytes,
            Key::Contract(ContractHash(bytes)) => bytes,
        }
    }

    /// Canonical, injective byte encoding.
    ///
    /// Layout: `tag (1 byte) || payload_len (u32 LE) || payload`. The tag
    /// discriminates variants and the length prefix keeps the format
    /// self-describing, so no two keys share an encoding. Indexers rely on
    /// this exact layout; it must never change.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let payload = self.hash_bytes();
        let mut out = Vec::with_capacity(1 + 4 + payload.len());
        out.push(self.tag());
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(payload);
        out
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Account(hash) => write!(f, "{hash}"),
            Key::Contract(hash) => write!(f, "{hash}"),
        }
    }
}

impl From<AccountHash> for Key {
    fn from(hash: AccountHash) -> Self {
        Key::Account(hash)
    }
}

impl From<ContractHash> for Key {
    fn from(hash: ContractHash) -> Self {
        Key::Contract(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_bytes_layout() {
        let key = Key::account([7u8; 32]);
        let bytes = key.canonical_bytes();

        assert_eq!(bytes.len(), 1 + 4 + 32);
        assert_eq!(bytes[0], KEY_TAG_ACCOUNT);
        assert_eq!(&bytes[1..5], &32u32.to_le_bytes());
        assert_eq!(&bytes[5..], &[7u8; 32]);
    }

    #[test]
    fn test_canonical_bytes_discriminates_variants() {
        // Same payload, different variant: encodings must differ.
        let account = Key::account([9u8; 32]);
        let contract = Key::contract([9u8; 32]);
        assert_ne!(account.canonical_bytes(), contract.canonical_bytes());
    }

    #[test]
    fn test_canonical_bytes_deterministic() {
        let key = Key::contract([0xabu8; 32]);
        assert_eq!(key.canonical_bytes(), key.canonical_bytes());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Key::account([1u8; 32]), Key::account([1u8; 32]));
        assert_ne!(Key::account([1u8; 32]), Key::account([2u8; 32]));
        assert_ne!(Key::account([1u8; 32]), Key::contract([1u8; 32]));
    }

    #[test]
    fn test_serde_round_trip() {
        let key = Key::contract([0x11u8; 32]);
        let json = serde_json::to_string(&key).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_display_prefixes() {
        let account = Key::account([0u8; 32]);
        let contract = Key::contract([0u8; 32]);
        assert!(account.to_string().starts_with("account-hash-"));
        assert!(contract.to_string().starts_with("contract-hash-"));
    }
}
