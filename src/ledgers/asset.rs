//! In-memory [`AssetLedger`] implementation.

use std::collections::{HashMap, HashSet};

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::LedgerError;
use crate::traits::AssetLedger;

/// A `HashMap`-backed fungible-asset ledger with ERC-20 style allowances.
///
/// Accounts can be frozen: any transfer debiting or crediting a frozen
/// account is rejected.  This is the hook tests use to make an external
/// transfer fail at a chosen point of an operation.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{AccountId, Amount, AssetId};
/// use pair_amm::ledgers::InMemoryAssetLedger;
/// use pair_amm::traits::AssetLedger;
///
/// let alice = AccountId::from_bytes([1u8; 32]);
/// let bob = AccountId::from_bytes([2u8; 32]);
///
/// let mut ledger = InMemoryAssetLedger::new(AssetId::from_bytes([7u8; 32]));
/// ledger.mint_to(&alice, Amount::new(100)).expect("mint");
/// ledger.transfer(&alice, &bob, Amount::new(40)).expect("transfer");
///
/// assert_eq!(ledger.balance_of(&alice), Amount::new(60));
/// assert_eq!(ledger.balance_of(&bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryAssetLedger {
    asset: AssetId,
    total_supply: Amount,
    balances: HashMap<AccountId, Amount>,
    allowances: HashMap<(AccountId, AccountId), Amount>,
    frozen: HashSet<AccountId>,
}

impl InMemoryAssetLedger {
    /// Creates an empty ledger for `asset`.
    #[must_use]
    pub fn new(asset: AssetId) -> Self {
        Self {
            asset,
            total_supply: Amount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            frozen: HashSet::new(),
        }
    }

    /// Issues `amount` new units to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if total supply would overflow.
    pub fn mint_to(&mut self, to: &AccountId, amount: Amount) -> Result<(), LedgerError> {
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

    /// Sets the allowance `owner` grants to `spender`.
    pub fn approve(&mut self, owner: &AccountId, spender: &AccountId, amount: Amount) {
        self.allowances.insert((*owner, *spender), amount);
    }

    /// Returns the allowance `owner` grants to `spender`.
    pub fn allowance(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Rejects every future transfer touching `account`.
    pub fn freeze(&mut self, account: &AccountId) {
        self.frozen.insert(*account);
    }

    /// Lifts a previous [`freeze`](Self::freeze).
    pub fn unfreeze(&mut self, account: &AccountId) {
        self.frozen.remove(account);
    }

    /// Returns all units ever issued.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn move_balance(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.frozen.contains(from) || self.frozen.contains(to) {
            return Err(LedgerError::Rejected("account is frozen"));
        }
        let from_balance = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.balances.insert(*from, from_balance);
        // Re-read after the debit so a self-transfer nets to zero.
        let to_balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(*to, to_balance);
        Ok(())
    }
}

impl AssetLedger for InMemoryAssetLedger {
    fn asset(&self) -> AssetId {
        self.asset
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        sender: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.move_balance(sender, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let remaining = self
            .allowance(from, spender)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance)?;
        self.move_balance(from, to, amount)?;
        self.allowances.insert((*from, *spender), remaining);
        Ok(())
    }
}
