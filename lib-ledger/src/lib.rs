//! CEP-18 fungible-token ledger.
//!
//! A host-agnostic implementation of the Casper ecosystem's ERC-20 analogue:
//! the balance/allowance state machine, the deterministic storage-key
//! derivation scheme, the event vocabulary, and the entrypoint dispatcher.
//! Host concerns (consensus, event transport, persistence engines, caller
//! authentication) stay behind the [`storage::LedgerStore`],
//! [`events::EventSink`], and [`entry_points::CallContext`] seams.
//!
//! # Key Types
//!
//! - [`TokenLedger`]: the ledger core, bound to one store and sink per call
//! - [`LedgerStore`]: synchronous host key-value storage
//! - [`LedgerEvent`]: the seven-variant event vocabulary
//! - [`EntryPoint`]: decoded public calls, executed via [`dispatch`]
//!
//! # Storage layout
//!
//! Simple named keys `name`, `symbol`, `decimals`, `total_supply`, plus two
//! dictionaries addressed through [`keys::balance_key`] and
//! [`keys::allowance_key`]. The derivation scheme is normative; indexers
//! recompute it to locate entries without replaying history.

pub mod entry_points;
pub mod errors;
pub mod events;
pub mod keys;
pub mod ledger;
pub mod storage;

pub use entry_points::{dispatch, CallContext, CallReturn, EntryPoint, RevertCode, StaticContext};
pub use errors::{TokenError, TokenResult};
pub use events::{EventSink, LedgerEvent, NullSink, RecordedEvents};
pub use keys::{allowance_key, balance_key};
pub use ledger::TokenLedger;
pub use storage::{LedgerStore, MemoryStore};
