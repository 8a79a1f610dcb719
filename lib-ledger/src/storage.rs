//! Host storage abstraction.
//!
//! The host chain exposes a small set of named keys plus two key-value
//! dictionaries. [`LedgerStore`] models exactly that surface so the ledger
//! core is not tied to any particular runtime; implementations are provided
//! by the embedding layer. All access is synchronous: a contract call is the
//! atomic unit of work and nothing suspends inside it.
//!
//! Host-level storage failures are not modeled here; the standard defines
//! no error codes for them.

use lib_types::{amount_from_bytes, amount_to_bytes, Amount, AMOUNT_BYTES};

use std::collections::HashMap;

// =============================================================================
// STORAGE NAMES
// =============================================================================

/// Named key holding the token name.
pub const NAME_KEY: &str = "name";

/// Named key holding the token symbol.
pub const SYMBOL_KEY: &str = "symbol";

/// Named key holding the decimal count.
pub const DECIMALS_KEY: &str = "decimals";

/// Named key holding the total supply.
pub const TOTAL_SUPPLY_KEY: &str = "total_supply";

/// Dictionary of account balances.
pub const BALANCES_DICT: &str = "balances";

/// Dictionary of (owner, spender) allowances.
pub const ALLOWANCES_DICT: &str = "allowances";

// =============================================================================
// STORE TRAIT
// =============================================================================

/// Synchronous key-value host storage.
///
/// Required methods move raw bytes; the provided methods layer the ledger's
/// deterministic value codec on top (UTF-8 for text, one byte for
/// `decimals`, 32-byte little-endian for amounts).
pub trait LedgerStore {
    /// Read a simple named key.
    fn read_named(&self, name: &str) -> Option<Vec<u8>>;

    /// Write a simple named key.
    fn write_named(&mut self, name: &str, value: Vec<u8>);

    /// Read one dictionary entry.
    fn read_dictionary(&self, dictionary: &str, key: &str) -> Option<Vec<u8>>;

    /// Write one dictionary entry.
    fn write_dictionary(&mut self, dictionary: &str, key: &str, value: Vec<u8>);

    /// Read an amount from a dictionary entry, defaulting to zero for
    /// missing or malformed entries.
    fn read_amount(&self, dictionary: &str, key: &str) -> Amount {
        self.read_dictionary(dictionary, key)
            .as_deref()
            .and_then(decode_amount)
            .unwrap_or_default()
    }

    /// Write an amount to a dictionary entry.
    fn write_amount(&mut self, dictionary: &str, key: &str, amount: Amount) {
        self.write_dictionary(dictionary, key, amount_to_bytes(amount).to_vec());
    }

    /// Read an amount-valued named key, defaulting to zero.
    fn read_amount_named(&self, name: &str) -> Amount {
        self.read_named(name)
            .as_deref()
            .and_then(decode_amount)
            .unwrap_or_default()
    }

    /// Write an amount-valued named key.
    fn write_amount_named(&mut self, name: &str, amount: Amount) {
        self.write_named(name, amount_to_bytes(amount).to_vec());
    }

    /// Read a text-valued named key, defaulting to empty.
    fn read_text_named(&self, name: &str) -> String {
        self.read_named(name)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }

    /// Write a text-valued named key.
    fn write_text_named(&mut self, name: &str, value: &str) {
        self.write_named(name, value.as_bytes().to_vec());
    }

    /// Read a byte-valued named key, defaulting to zero.
    fn read_byte_named(&self, name: &str) -> u8 {
        self.read_named(name)
            .and_then(|bytes| bytes.first().copied())
            .unwrap_or_default()
    }

    /// Write a byte-valued named key.
    fn write_byte_named(&mut self, name: &str, value: u8) {
        self.write_named(name, vec![value]);
    }
}

fn decode_amount(bytes: &[u8]) -> Option<Amount> {
    <[u8; AMOUNT_BYTES]>::try_from(bytes)
        .ok()
        .map(|fixed| amount_from_bytes(&fixed))
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// In-memory [`LedgerStore`] for tests and standalone embedding.
///
/// `PartialEq` compares the full raw state, which is what the atomicity
/// tests lean on: a failing call must leave the store byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    named: HashMap<String, Vec<u8>>,
    dictionaries: HashMap<String, HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the raw entries of one dictionary.
    pub fn dictionary_entries(
        &self,
        dictionary: &str,
    ) -> impl Iterator<Item = (&String, &Vec<u8>)> {
        self.dictionaries
            .get(dictionary)
            .into_iter()
            .flat_map(|entries| entries.iter())
    }
}

impl LedgerStore for MemoryStore {
    fn read_named(&self, name: &str) -> Option<Vec<u8>> {
        self.named.get(name).cloned()
    }

    fn write_named(&mut self, name: &str, value: Vec<u8>) {
        self.named.insert(name.to_string(), value);
    }

    fn read_dictionary(&self, dictionary: &str, key: &str) -> Option<Vec<u8>> {
        self.dictionaries
            .get(dictionary)
            .and_then(|entries| entries.get(key))
            .cloned()
    }

    fn write_dictionary(&mut self, dictionary: &str, key: &str, value: Vec<u8>) {
        self.dictionaries
            .entry(dictionary.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_isolation() {
        let mut store = MemoryStore::new();
        store.write_dictionary(BALANCES_DICT, "k", vec![1]);
        store.write_dictionary(ALLOWANCES_DICT, "k", vec![2]);

        assert_eq!(store.read_dictionary(BALANCES_DICT, "k"), Some(vec![1]));
        assert_eq!(store.read_dictionary(ALLOWANCES_DICT, "k"), Some(vec![2]));
    }

    #[test]
    fn test_amount_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.read_amount(BALANCES_DICT, "missing"), Amount::zero());
        assert_eq!(store.read_amount_named(TOTAL_SUPPLY_KEY), Amount::zero());
    }

    #[test]
    fn test_amount_round_trip() {
        let mut store = MemoryStore::new();
        store.write_amount(BALANCES_DICT, "k", Amount::from(42u64));
        assert_eq!(store.read_amount(BALANCES_DICT, "k"), Amount::from(42u64));

        store.write_amount_named(TOTAL_SUPPLY_KEY, Amount::MAX);
        assert_eq!(store.read_amount_named(TOTAL_SUPPLY_KEY), Amount::MAX);
    }

    #[test]
    fn test_text_and_byte_named_keys() {
        let mut store = MemoryStore::new();
        store.write_text_named(NAME_KEY, "Test Token");
        store.write_byte_named(DECIMALS_KEY, 18);

        assert_eq!(store.read_text_named(NAME_KEY), "Test Token");
        assert_eq!(store.read_byte_named(DECIMALS_KEY), 18);
        assert_eq!(store.read_text_named(SYMBOL_KEY), "");
    }

    #[test]
    fn test_zero_amount_remains_a_valid_entry() {
        // Balances are never deleted; a zero write stays readable as an entry.
        let mut store = MemoryStore::new();
        store.write_amount(BALANCES_DICT, "k", Amount::zero());
        assert!(store.read_dictionary(BALANCES_DICT, "k").is_some());
    }
}
