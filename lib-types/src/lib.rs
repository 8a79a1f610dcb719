//! Token ledger primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: no String identifiers in ledger state. Ever. Accounts are
//! fixed-size hashes behind the [`Key`] tagged union, and amounts are
//! unsigned 256-bit integers with an explicit fixed-width codec.

pub mod key;
pub mod primitives;

pub use key::{AccountHash, ContractHash, Key};
pub use primitives::{amount_from_bytes, amount_to_bytes, Amount, AMOUNT_BYTES};
