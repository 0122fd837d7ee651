//! External asset-transfer interface.
//!
//! The pool never stores balances of its assets itself; it moves them
//! through an [`AssetLedger`], one per asset.  The ledger is an injected
//! capability, so the engine's ordering of "commit state, then call out"
//! can be exercised against any implementation, including the in-memory
//! ledgers in [`crate::ledgers`].
//!
//! # Caller identity
//!
//! A host ledger learns who is calling from the execution environment.
//! Here that identity is passed explicitly: `sender` for
//! [`AssetLedger::transfer`] and `spender` for
//! [`AssetLedger::transfer_from`] are always the pool's custody account.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;

/// A fungible-asset ledger the pool can move balances on.
///
/// # Failure semantics
///
/// A returned `Err` means the ledger performed **no** change for that call.
/// The engine treats any failure as fatal to the enclosing operation.
pub trait AssetLedger {
    /// Returns the identity of the asset this ledger tracks.
    #[must_use]
    fn asset(&self) -> AssetId;

    /// Returns the balance held by `account`.
    #[must_use]
    fn balance_of(&self, account: &AccountId) -> Amount;

    /// Moves `amount` from `sender` to `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if `sender` holds less than
    /// `amount`, or any implementation-specific refusal.
    fn transfer(
        &mut self,
        sender: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// an allowance previously granted by `from` to `spender`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is too low.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds too little.
    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
