//! Storage-key derivation for the balance and allowance dictionaries.
//!
//! These functions are the sole mechanism by which the ledger addresses its
//! two dictionaries. External indexers and auditors recompute the same keys
//! to locate entries without replaying history, so the algorithms here are
//! normative and must stay byte-for-byte stable:
//!
//! - balance key: standard base64 of the account's canonical bytes (the
//!   canonical encoding is already injective per account, so no hashing is
//!   needed);
//! - allowance key: lowercase hex of blake2b-256 over owner bytes followed
//!   by spender bytes. Concatenation order is owner-then-spender and is not
//!   commutative.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use lib_types::Key;

/// BLAKE2b with a 32-byte digest.
type Blake2b256 = Blake2b<U32>;

/// Dictionary key for an account's balance entry.
pub fn balance_key(account: &Key) -> String {
    BASE64_STANDARD.encode(account.canonical_bytes())
}

/// Dictionary key for an (owner, spender) allowance entry.
pub fn allowance_key(owner: &Key, spender: &Key) -> String {
    let mut hasher = Blake2b256::new();
    hasher.update(owner.canonical_bytes());
    hasher.update(spender.canonical_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(fill: u8) -> Key {
        Key::account([fill; 32])
    }

    #[test]
    fn test_balance_key_deterministic() {
        let key = account(1);
        assert_eq!(balance_key(&key), balance_key(&key));
    }

    #[test]
    fn test_balance_key_is_standard_base64_of_canonical_bytes() {
        let key = Key::contract([0x55u8; 32]);
        let decoded = BASE64_STANDARD
            .decode(balance_key(&key))
            .expect("balance key must be valid standard base64");
        assert_eq!(decoded, key.canonical_bytes());
    }

    #[test]
    fn test_balance_key_distinguishes_variants() {
        // Same hash payload under different variants must not collide.
        let user = Key::account([9u8; 32]);
        let contract = Key::contract([9u8; 32]);
        assert_ne!(balance_key(&user), balance_key(&contract));
    }

    #[test]
    fn test_allowance_key_deterministic() {
        let owner = account(1);
        let spender = account(2);
        assert_eq!(
            allowance_key(&owner, &spender),
            allowance_key(&owner, &spender)
        );
    }

    #[test]
    fn test_allowance_key_not_commutative() {
        let a = account(1);
        let b = account(2);
        assert_ne!(allowance_key(&a, &b), allowance_key(&b, &a));
    }

    #[test]
    fn test_allowance_key_is_lowercase_hex_digest() {
        let key = allowance_key(&account(3), &account(4));
        // blake2b-256 digest is 32 bytes, so 64 hex chars.
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_allowance_key_distinguishes_pairs() {
        let keys = [
            allowance_key(&account(1), &account(2)),
            allowance_key(&account(1), &account(3)),
            allowance_key(&account(2), &account(3)),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[0], keys[2]);
        assert_ne!(keys[1], keys[2]);
    }
}
