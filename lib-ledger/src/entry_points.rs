//! Entrypoint dispatch.
//!
//! The dispatcher is the only layer that talks to the execution context: it
//! resolves the caller identity from the environment (never from call
//! arguments, which would allow identity spoofing), invokes the ledger core,
//! and translates core errors into the standard's numeric revert codes. A
//! revert aborts the entire call effect; with check-before-mutate ordering
//! in the core there is nothing to roll back.

use tracing::{debug, warn};

use lib_types::{Amount, Key};

use crate::events::EventSink;
use crate::ledger::TokenLedger;
use crate::storage::LedgerStore;

// =============================================================================
// ENTRY-POINT NAMES
// =============================================================================

pub const ENTRY_POINT_NAME: &str = "name";
pub const ENTRY_POINT_SYMBOL: &str = "symbol";
pub const ENTRY_POINT_DECIMALS: &str = "decimals";
pub const ENTRY_POINT_TOTAL_SUPPLY: &str = "total_supply";
pub const ENTRY_POINT_BALANCE_OF: &str = "balance_of";
pub const ENTRY_POINT_ALLOWANCE: &str = "allowance";
pub const ENTRY_POINT_TRANSFER: &str = "transfer";
pub const ENTRY_POINT_TRANSFER_FROM: &str = "transfer_from";
pub const ENTRY_POINT_APPROVE: &str = "approve";
pub const ENTRY_POINT_INCREASE_ALLOWANCE: &str = "increase_allowance";
pub const ENTRY_POINT_DECREASE_ALLOWANCE: &str = "decrease_allowance";

// =============================================================================
// CALL SURFACE
// =============================================================================

/// Execution context of one contract call.
///
/// Supplied by the host; the dispatcher asks it for the caller identity so
/// that no entrypoint ever accepts a caller as an argument.
pub trait CallContext {
    /// Identity on whose authority this call executes.
    fn caller(&self) -> Key;
}

/// Fixed context for tests and standalone embedding.
#[derive(Debug, Clone, Copy)]
pub struct StaticContext(pub Key);

impl CallContext for StaticContext {
    fn caller(&self) -> Key {
        self.0
    }
}

/// One decoded public entrypoint invocation.
///
/// Mint and burn are deliberately absent: the base interface does not expose
/// them, they remain core-level operations for the installing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Name,
    Symbol,
    Decimals,
    TotalSupply,
    BalanceOf { address: Key },
    Allowance { owner: Key, spender: Key },
    Transfer { recipient: Key, amount: Amount },
    TransferFrom { owner: Key, recipient: Key, amount: Amount },
    Approve { spender: Key, amount: Amount },
    IncreaseAllowance { spender: Key, inc_by: Amount },
    DecreaseAllowance { spender: Key, decr_by: Amount },
}

impl EntryPoint {
    /// Public name of this entrypoint.
    pub const fn name(&self) -> &'static str {
        match self {
            EntryPoint::Name => ENTRY_POINT_NAME,
            EntryPoint::Symbol => ENTRY_POINT_SYMBOL,
            EntryPoint::Decimals => ENTRY_POINT_DECIMALS,
            EntryPoint::TotalSupply => ENTRY_POINT_TOTAL_SUPPLY,
            EntryPoint::BalanceOf { .. } => ENTRY_POINT_BALANCE_OF,
            EntryPoint::Allowance { .. } => ENTRY_POINT_ALLOWANCE,
            EntryPoint::Transfer { .. } => ENTRY_POINT_TRANSFER,
            EntryPoint::TransferFrom { .. } => ENTRY_POINT_TRANSFER_FROM,
            EntryPoint::Approve { .. } => ENTRY_POINT_APPROVE,
            EntryPoint::IncreaseAllowance { .. } => ENTRY_POINT_INCREASE_ALLOWANCE,
            EntryPoint::DecreaseAllowance { .. } => ENTRY_POINT_DECREASE_ALLOWANCE,
        }
    }
}

/// Value returned from a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallReturn {
    Unit,
    Text(String),
    Byte(u8),
    Amount(Amount),
}

/// Numeric code surfaced to the host when a call reverts.
pub type RevertCode = u16;

// =============================================================================
// DISPATCH
// =============================================================================

/// Execute one public entrypoint against the ledger.
///
/// On error the whole transaction effect is aborted and the corresponding
/// revert code is returned; the store has not been touched.
pub fn dispatch<S: LedgerStore, E: EventSink>(
    context: &dyn CallContext,
    store: &mut S,
    events: &mut E,
    call: EntryPoint,
) -> Result<CallReturn, RevertCode> {
    let caller = context.caller();
    debug!(entry_point = call.name(), %caller, "dispatching call");

    let mut ledger = TokenLedger::new(store, events);
    let result = match call {
        EntryPoint::Name => Ok(CallReturn::Text(ledger.name())),
        EntryPoint::Symbol => Ok(CallReturn::Text(ledger.symbol())),
        EntryPoint::Decimals => Ok(CallReturn::Byte(ledger.decimals())),
        EntryPoint::TotalSupply => Ok(CallReturn::Amount(ledger.total_supply())),
        EntryPoint::BalanceOf { address } => {
            Ok(CallReturn::Amount(ledger.balance_of(&address)))
        }
        EntryPoint::Allowance { owner, spender } => {
            Ok(CallReturn::Amount(ledger.allowance(&owner, &spender)))
        }
        EntryPoint::Transfer { recipient, amount } => ledger
            .transfer(caller, recipient, amount)
            .map(|()| CallReturn::Unit),
        EntryPoint::TransferFrom {
            owner,
            recipient,
            amount,
        } => ledger
            .transfer_from(caller, owner, recipient, amount)
            .map(|()| CallReturn::Unit),
        EntryPoint::Approve { spender, amount } => ledger
            .approve(caller, spender, amount)
            .map(|()| CallReturn::Unit),
        EntryPoint::IncreaseAllowance { spender, inc_by } => ledger
            .increase_allowance(caller, spender, inc_by)
            .map(|()| CallReturn::Unit),
        EntryPoint::DecreaseAllowance { spender, decr_by } => ledger
            .decrease_allowance(caller, spender, decr_by)
            .map(|()| CallReturn::Unit),
    };

    result.map_err(|error| {
        let code = error.revert_code();
        warn!(entry_point = call.name(), %caller, code, %error, "call reverted");
        code
    })
}
