//! Ledger core: the balance/allowance state machine.
//!
//! [`TokenLedger`] holds exclusive access to host storage for the duration
//! of one call and enforces every invariant of the standard:
//!
//! - checked arithmetic on balances and the total supply, never wrapping;
//! - self-target prohibition on direct and delegated transfers;
//! - strict allowance deduction on `transfer_from` (no unlimited sentinel);
//! - atomic all-or-nothing mutation: every precondition is verified before
//!   the first write, so a failing call performs zero writes and emits zero
//!   events;
//! - exactly one event per successful mutation, emitted after the writes
//!   commit.

use lib_types::{Amount, Key};

use crate::errors::{TokenError, TokenResult};
use crate::events::{EventSink, LedgerEvent};
use crate::keys::{allowance_key, balance_key};
use crate::storage::{
    LedgerStore, ALLOWANCES_DICT, BALANCES_DICT, DECIMALS_KEY, NAME_KEY, SYMBOL_KEY,
    TOTAL_SUPPLY_KEY,
};

/// The token ledger, bound to one store and one event sink for one call.
///
/// The store is held exclusively: no other component mutates balances,
/// allowances, or the supply while a ledger borrows it.
pub struct TokenLedger<'a, S: LedgerStore, E: EventSink> {
    store: &'a mut S,
    events: &'a mut E,
}

impl<'a, S: LedgerStore, E: EventSink> TokenLedger<'a, S, E> {
    /// Bind a ledger to host storage and an event sink.
    pub fn new(store: &'a mut S, events: &'a mut E) -> Self {
        Self { store, events }
    }

    // =========================================================================
    // INSTALLATION
    // =========================================================================

    /// Seed metadata and mint the initial supply to the installer.
    ///
    /// Runs once at contract installation. Emits a single `Mint` when
    /// `initial_supply` is non-zero.
    pub fn init(
        &mut self,
        name: &str,
        symbol: &str,
        decimals: u8,
        initial_supply: Amount,
        installer: Key,
    ) -> TokenResult<()> {
        self.store.write_text_named(NAME_KEY, name);
        self.store.write_text_named(SYMBOL_KEY, symbol);
        self.store.write_byte_named(DECIMALS_KEY, decimals);
        self.store.write_amount_named(TOTAL_SUPPLY_KEY, Amount::zero());

        if !initial_supply.is_zero() {
            self.mint(installer, initial_supply)?;
        }
        Ok(())
    }

    // =========================================================================
    // READ-ONLY QUERIES
    // =========================================================================

    /// Token name.
    pub fn name(&self) -> String {
        self.store.read_text_named(NAME_KEY)
    }

    /// Token symbol.
    pub fn symbol(&self) -> String {
        self.store.read_text_named(SYMBOL_KEY)
    }

    /// Decimal places (display only).
    pub fn decimals(&self) -> u8 {
        self.store.read_byte_named(DECIMALS_KEY)
    }

    /// Total supply in circulation.
    pub fn total_supply(&self) -> Amount {
        self.store.read_amount_named(TOTAL_SUPPLY_KEY)
    }

    /// Balance of an account, zero if it has never been credited.
    pub fn balance_of(&self, account: &Key) -> Amount {
        self.store.read_amount(BALANCES_DICT, &balance_key(account))
    }

    /// Remaining allowance of `spender` over `owner`'s funds, zero default.
    pub fn allowance(&self, owner: &Key, spender: &Key) -> Amount {
        self.store
            .read_amount(ALLOWANCES_DICT, &allowance_key(owner, spender))
    }

    // =========================================================================
    // TRANSFERS
    // =========================================================================

    /// Move `amount` from `caller` to `recipient`.
    pub fn transfer(&mut self, caller: Key, recipient: Key, amount: Amount) -> TokenResult<()> {
        if recipient == caller {
            return Err(TokenError::CannotTargetSelfUser);
        }

        let new_sender_balance = self
            .balance_of(&caller)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        // Sum of balances equals total supply, so the credit cannot wrap
        // once the debit is funded; checked anyway.
        let new_recipient_balance = self
            .balance_of(&recipient)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.write_balance(&caller, new_sender_balance);
        self.write_balance(&recipient, new_recipient_balance);

        self.events.emit(LedgerEvent::Transfer {
            sender: caller,
            recipient,
            amount,
        });
        Ok(())
    }

    /// Move `amount` from `owner` to `recipient` on behalf of `caller`,
    /// strictly deducting the caller's allowance.
    pub fn transfer_from(
        &mut self,
        caller: Key,
        owner: Key,
        recipient: Key,
        amount: Amount,
    ) -> TokenResult<()> {
        if recipient == owner {
            return Err(TokenError::CannotTargetSelfUser);
        }

        let new_owner_balance = self
            .balance_of(&owner)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        let new_allowance = self
            .allowance(&owner, &caller)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientAllowance)?;
        let new_recipient_balance = self
            .balance_of(&recipient)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.write_balance(&owner, new_owner_balance);
        self.write_balance(&recipient, new_recipient_balance);
        self.write_allowance(&owner, &caller, new_allowance);

        self.events.emit(LedgerEvent::TransferFrom {
            spender: caller,
            owner,
            recipient,
            amount,
        });
        Ok(())
    }

    // =========================================================================
    // ALLOWANCES
    // =========================================================================

    /// Overwrite the allowance of `spender` over `caller`'s funds.
    pub fn approve(&mut self, caller: Key, spender: Key, amount: Amount) -> TokenResult<()> {
        self.write_allowance(&caller, &spender, amount);
        self.events.emit(LedgerEvent::SetAllowance {
            owner: caller,
            spender,
            allowance: amount,
        });
        Ok(())
    }

    /// Raise the allowance by `inc_by`, saturating at the maximum amount.
    pub fn increase_allowance(
        &mut self,
        caller: Key,
        spender: Key,
        inc_by: Amount,
    ) -> TokenResult<()> {
        let new_allowance = self.allowance(&caller, &spender).saturating_add(inc_by);
        self.write_allowance(&caller, &spender, new_allowance);
        self.events.emit(LedgerEvent::IncreaseAllowance {
            owner: caller,
            spender,
            allowance: new_allowance,
            inc_by,
        });
        Ok(())
    }

    /// Lower the allowance by `decr_by`, flooring at zero.
    pub fn decrease_allowance(
        &mut self,
        caller: Key,
        spender: Key,
        decr_by: Amount,
    ) -> TokenResult<()> {
        let new_allowance = self.allowance(&caller, &spender).saturating_sub(decr_by);
        self.write_allowance(&caller, &spender, new_allowance);
        self.events.emit(LedgerEvent::DecreaseAllowance {
            owner: caller,
            spender,
            allowance: new_allowance,
            decr_by,
        });
        Ok(())
    }

    // =========================================================================
    // SUPPLY
    // =========================================================================

    /// Credit `recipient` and grow the total supply.
    pub fn mint(&mut self, recipient: Key, amount: Amount) -> TokenResult<()> {
        let new_total_supply = self
            .total_supply()
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let new_balance = self
            .balance_of(&recipient)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        self.store
            .write_amount_named(TOTAL_SUPPLY_KEY, new_total_supply);
        self.write_balance(&recipient, new_balance);

        self.events.emit(LedgerEvent::Mint { recipient, amount });
        Ok(())
    }

    /// Debit `owner` and shrink the total supply.
    pub fn burn(&mut self, owner: Key, amount: Amount) -> TokenResult<()> {
        let new_balance = self
            .balance_of(&owner)
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance)?;
        // total_supply >= balance(owner) >= amount by the supply invariant.
        let new_total_supply = self
            .total_supply()
            .checked_sub(amount)
            .ok_or(TokenError::Overflow)?;

        self.store
            .write_amount_named(TOTAL_SUPPLY_KEY, new_total_supply);
        self.write_balance(&owner, new_balance);

        self.events.emit(LedgerEvent::Burn { owner, amount });
        Ok(())
    }

    // =========================================================================
    // INTERNAL WRITES
    // =========================================================================

    fn write_balance(&mut self, account: &Key, amount: Amount) {
        self.store
            .write_amount(BALANCES_DICT, &balance_key(account), amount);
    }

    fn write_allowance(&mut self, owner: &Key, spender: &Key, amount: Amount) {
        self.store
            .write_amount(ALLOWANCES_DICT, &allowance_key(owner, spender), amount);
    }
}
