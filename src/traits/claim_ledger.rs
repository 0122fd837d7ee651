//! Claim-token bookkeeping interface.
//!
//! Per-holder claim balances live outside the pool, in a [`ClaimLedger`].
//! The pool keeps only the aggregate `claim_supply` in its state and is the
//! sole authorized minter and burner, so after every completed operation
//! `ClaimLedger::total_supply` equals the pool's tracked supply.

use crate::domain::{AccountId, Liquidity};
use crate::error::LedgerError;

/// Mint/burn/balance bookkeeping for the pool's claim token.
///
/// # Failure semantics
///
/// A returned `Err` means the ledger performed **no** change for that call.
pub trait ClaimLedger {
    /// Credits `amount` new claims to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Overflow`] if supply would exceed 256 bits, or any
    /// implementation-specific refusal.
    fn mint(&mut self, to: &AccountId, amount: Liquidity) -> Result<(), LedgerError>;

    /// Destroys `amount` claims held by `from`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if `from` holds less than
    /// `amount`.
    fn burn(&mut self, from: &AccountId, amount: Liquidity) -> Result<(), LedgerError>;

    /// Returns the claims held by `account`.
    #[must_use]
    fn balance_of(&self, account: &AccountId) -> Liquidity;

    /// Returns the total outstanding claims.
    #[must_use]
    fn total_supply(&self) -> Liquidity;
}
