//! Ledger event vocabulary and emission sink.
//!
//! The ledger core notifies a sink after every successful mutation, exactly
//! once per call and never on failure. Wire transport of events (the host
//! chain's event-log standard) is out of scope; embedders forward recorded
//! events however their host requires.

use serde::{Deserialize, Serialize};

use lib_types::{Amount, Key};

/// Event emitted after a successful ledger mutation.
///
/// The field sets are normative: external indexers consume these records
/// bit-exactly as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// Supply increased in favor of `recipient`.
    Mint { recipient: Key, amount: Amount },
    /// Supply decreased at the expense of `owner`.
    Burn { owner: Key, amount: Amount },
    /// Allowance overwritten to an absolute value.
    SetAllowance {
        owner: Key,
        spender: Key,
        allowance: Amount,
    },
    /// Allowance raised by `inc_by`; `allowance` is the new value.
    IncreaseAllowance {
        owner: Key,
        spender: Key,
        allowance: Amount,
        inc_by: Amount,
    },
    /// Allowance lowered by `decr_by`; `allowance` is the new value.
    DecreaseAllowance {
        owner: Key,
        spender: Key,
        allowance: Amount,
        decr_by: Amount,
    },
    /// Direct balance movement from `sender` to `recipient`.
    Transfer {
        sender: Key,
        recipient: Key,
        amount: Amount,
    },
    /// Delegated balance movement executed by `spender` on behalf of `owner`.
    TransferFrom {
        spender: Key,
        owner: Key,
        recipient: Key,
        amount: Amount,
    },
}

/// Abstract sink the ledger core emits into.
///
/// Emission is synchronous and happens immediately after the corresponding
/// state mutation commits.
pub trait EventSink {
    /// Accept one event record.
    fn emit(&mut self, event: LedgerEvent);
}

/// Accumulating sink for tests and for embedders that drain events into a
/// host event log after the call completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedEvents {
    events: Vec<LedgerEvent>,
}

impl RecordedEvents {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted so far, in call order.
    pub fn as_slice(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Number of events emitted so far.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain all recorded events, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordedEvents {
    fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: LedgerEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_variant_tags() {
        let event = LedgerEvent::SetAllowance {
            owner: Key::account([1u8; 32]),
            spender: Key::account([2u8; 32]),
            allowance: Amount::from(50u64),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("SetAllowance").is_some());

        let back: LedgerEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_recorded_events_preserve_call_order() {
        let a = Key::account([1u8; 32]);
        let b = Key::account([2u8; 32]);

        let mut sink = RecordedEvents::new();
        sink.emit(LedgerEvent::Mint {
            recipient: a,
            amount: Amount::from(5u64),
        });
        sink.emit(LedgerEvent::Transfer {
            sender: a,
            recipient: b,
            amount: Amount::from(3u64),
        });

        assert_eq!(sink.len(), 2);
        assert!(matches!(sink.as_slice()[0], LedgerEvent::Mint { .. }));
        assert!(matches!(sink.as_slice()[1], LedgerEvent::Transfer { .. }));

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }
}
