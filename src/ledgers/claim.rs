//! In-memory [`ClaimLedger`] implementation.

use std::collections::{HashMap, HashSet};

use crate::domain::{AccountId, Liquidity};
use crate::error::LedgerError;
use crate::traits::ClaimLedger;

/// Holder-to-balance mapping for the pool's claim token.
///
/// Frozen accounts can neither receive minted claims nor have claims
/// burned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryClaimLedger {
    total_supply: Liquidity,
    balances: HashMap<AccountId, Liquidity>,
    frozen: HashSet<AccountId>,
}

impl InMemoryClaimLedger {
    /// Creates a ledger with no claims outstanding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every future mint to or burn from `account`.
    pub fn freeze(&mut self, account: &AccountId) {
        self.frozen.insert(*account);
    }

    /// Lifts a previous [`freeze`](Self::freeze).
    pub fn unfreeze(&mut self, account: &AccountId) {
        self.frozen.remove(account);
    }

    /// Number of accounts holding a non-zero balance.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.balances.values().filter(|b| !b.is_zero()).count()
    }
}

impl ClaimLedger for InMemoryClaimLedger {
    fn mint(&mut self, to: &AccountId, amount: Liquidity) -> Result<(), LedgerError> {
        if self.frozen.contains(to) {
            return Err(LedgerError::Rejected("account is frozen"));
        }
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        Ok(())
    }

    fn burn(&mut self, from: &AccountId, amount: Liquidity) -> Result<(), LedgerError> {
        if self.frozen.contains(from) {
            return Err(LedgerError::Rejected("account is frozen"));
        }
        let balance = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        // balance_of(from) <= total_supply, so this cannot underflow.
        let supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.total_supply = supply;
        self.balances.insert(*from, balance);
        Ok(())
    }

    fn balance_of(&self, account: &AccountId) -> Liquidity {
        self.balances
            .get(account)
            .copied()
            .unwrap_or(Liquidity::ZERO)
    }

    fn total_supply(&self) -> Liquidity {
        self.total_supply
    }
}
