//! Token Ledger Errors

use thiserror::Error;

/// Revert code for [`TokenError::InsufficientBalance`].
pub const REVERT_INSUFFICIENT_BALANCE: u16 = 60001;

/// Revert code for [`TokenError::InsufficientAllowance`].
pub const REVERT_INSUFFICIENT_ALLOWANCE: u16 = 60002;

/// Revert code for [`TokenError::CannotTargetSelfUser`].
pub const REVERT_CANNOT_TARGET_SELF_USER: u16 = 60003;

/// Revert code for [`TokenError::Overflow`].
pub const REVERT_OVERFLOW: u16 = 60004;

/// Error during token ledger operations.
///
/// Every error is a terminal abort of the current call: the ledger performs
/// no writes and emits no events on the failing path. The three standard
/// variants are the only ones reachable through public entrypoints;
/// [`TokenError::Overflow`] can only arise from `mint`, which is not part
/// of the public interface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Insufficient allowance")]
    InsufficientAllowance,

    #[error("Cannot target self")]
    CannotTargetSelfUser,

    #[error("Arithmetic overflow")]
    Overflow,
}

impl TokenError {
    /// Numeric revert code surfaced to the host on abort.
    pub const fn revert_code(&self) -> u16 {
        match self {
            TokenError::InsufficientBalance => REVERT_INSUFFICIENT_BALANCE,
            TokenError::InsufficientAllowance => REVERT_INSUFFICIENT_ALLOWANCE,
            TokenError::CannotTargetSelfUser => REVERT_CANNOT_TARGET_SELF_USER,
            TokenError::Overflow => REVERT_OVERFLOW,
        }
    }
}

/// Result type for token ledger operations.
pub type TokenResult<T> = Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revert_codes_match_standard() {
        assert_eq!(TokenError::InsufficientBalance.revert_code(), 60001);
        assert_eq!(TokenError::InsufficientAllowance.revert_code(), 60002);
        assert_eq!(TokenError::CannotTargetSelfUser.revert_code(), 60003);
    }
}
