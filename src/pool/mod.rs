//! The constant-product pair pool.
//!
//! [`Pool`] owns its configuration, its [`PoolState`], the three external
//! ledgers it works against and the [`EventLog`].  Public operations live
//! in submodules by concern:
//!
//! | Module | Operations |
//! |--------|------------|
//! | `liquidity` | [`Pool::add_liquidity`], [`Pool::remove_liquidity`] |
//! | `exchange` | [`Pool::swap_exact_tokens_for_tokens`] |
//! | `oracle` | [`Pool::get_price`], [`Pool::quote`], [`Pool::quote_amount_out`], [`get_amount_out`], [`get_amount_in`] |
//!
//! # Execution model
//!
//! Every mutating operation runs in the same order: validate the request,
//! compute against a snapshot of the state, pull inbound assets, commit
//! the new state, then perform outbound effects (mint, burn, push).
//!
//! The whole body runs under a reentrancy lock held in [`PoolState`].  A
//! checkpoint of the state and all three ledgers is taken on entry and
//! restored if the body fails at any point, so every operation is
//! all-or-nothing.
//!
//! # Example
//!
//! ```
//! use pair_amm::config::PoolConfig;
//! use pair_amm::domain::{
//!     AccountId, AddLiquidity, Amount, AssetId, AssetPair, CallContext,
//!     Deadline, Liquidity, Timestamp,
//! };
//! use pair_amm::ledgers::{InMemoryAssetLedger, InMemoryClaimLedger};
//! use pair_amm::pool::Pool;
//!
//! let (usd, eth) = (AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
//! let pool_account = AccountId::from_bytes([0xAA; 32]);
//! let alice = AccountId::from_bytes([1u8; 32]);
//!
//! let mut ledger_a = InMemoryAssetLedger::new(usd);
//! let mut ledger_b = InMemoryAssetLedger::new(eth);
//! ledger_a.mint_to(&alice, Amount::new(200)).expect("seed");
//! ledger_b.mint_to(&alice, Amount::new(50)).expect("seed");
//! ledger_a.approve(&alice, &pool_account, Amount::new(200));
//! ledger_b.approve(&alice, &pool_account, Amount::new(50));
//!
//! let pair = AssetPair::new(usd, eth).expect("distinct");
//! let config = PoolConfig::new(pair, pool_account).expect("valid");
//! let mut pool = Pool::new(config, ledger_a, ledger_b, InMemoryClaimLedger::new())
//!     .expect("pool");
//!
//! let ctx = CallContext::new(alice, Timestamp::from_secs(10));
//! let request = AddLiquidity::new(
//!     usd, Amount::new(200), eth, Amount::new(50), alice, Deadline::NEVER,
//! );
//! let receipt = pool.add_liquidity(&ctx, &request).expect("deposit");
//! assert_eq!(receipt.minted(), Liquidity::new(100));
//! ```

mod events;
mod exchange;
mod liquidity;
mod oracle;
#[cfg(test)]
mod proptest_properties;
mod state;
#[cfg(test)]
mod test_support;

pub use events::{EventLog, PoolEvent};
pub use oracle::{get_amount_in, get_amount_out};
pub use state::PoolState;

use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::domain::{AccountId, Amount, AssetPair, CallContext, Liquidity, Side};
use crate::error::{AmmError, Result};
use crate::traits::{AssetLedger, ClaimLedger};

/// A two-asset constant-product pool bound to its external ledgers.
///
/// `A` and `B` hold the assets backing reserve A and reserve B; `C` holds
/// the pool's claim token.  The pool is the only minter and burner of `C`.
#[derive(Debug, Clone)]
pub struct Pool<A, B, C> {
    config: PoolConfig,
    state: PoolState,
    ledger_a: A,
    ledger_b: B,
    claims: C,
    events: EventLog,
}

/// Everything a failed operation must put back.
struct Checkpoint<A, B, C> {
    state: PoolState,
    ledger_a: A,
    ledger_b: B,
    claims: C,
    events: usize,
}

impl<A, B, C> Pool<A, B, C>
where
    A: AssetLedger + Clone,
    B: AssetLedger + Clone,
    C: ClaimLedger + Clone,
{
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - [`AmmError::InvalidConfiguration`] if a ledger's asset does not
    ///   match its side of the pair, or if the claim ledger already has
    ///   outstanding supply.
    pub fn new(config: PoolConfig, ledger_a: A, ledger_b: B, claims: C) -> Result<Self> {
        config.validate()?;
        let pair = config.pair();
        if ledger_a.asset() != pair.first() {
            return Err(AmmError::InvalidConfiguration(
                "ledger A does not hold the pair's first asset",
            ));
        }
        if ledger_b.asset() != pair.second() {
            return Err(AmmError::InvalidConfiguration(
                "ledger B does not hold the pair's second asset",
            ));
        }
        if !claims.total_supply().is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "claim ledger must start with zero supply",
            ));
        }
        debug!(
            asset_a = %pair.first(),
            asset_b = %pair.second(),
            pool_account = %config.pool_account(),
            "pool created"
        );
        Ok(Self {
            config,
            state: PoolState::EMPTY,
            ledger_a,
            ledger_b,
            claims,
            events: EventLog::new(),
        })
    }

    // -- views ----------------------------------------------------------------

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the pool's asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        self.config.pair()
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &PoolState {
        &self.state
    }

    /// Returns `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.state.reserve_a(), self.state.reserve_b())
    }

    /// Returns the emitted events.
    #[must_use]
    pub const fn events(&self) -> &EventLog {
        &self.events
    }

    /// Returns the claims held by `account`.
    #[must_use]
    pub fn claim_balance_of(&self, account: &AccountId) -> Liquidity {
        self.claims.balance_of(account)
    }

    /// Returns the ledger of asset A.
    #[must_use]
    pub const fn ledger_a(&self) -> &A {
        &self.ledger_a
    }

    /// Mutable access to the ledger of asset A, for activity outside the
    /// pool.
    pub fn ledger_a_mut(&mut self) -> &mut A {
        &mut self.ledger_a
    }

    /// Returns the ledger of asset B.
    #[must_use]
    pub const fn ledger_b(&self) -> &B {
        &self.ledger_b
    }

    /// Mutable access to the ledger of asset B, for activity outside the
    /// pool.
    pub fn ledger_b_mut(&mut self) -> &mut B {
        &mut self.ledger_b
    }

    /// Returns the claim ledger.
    #[must_use]
    pub const fn claims(&self) -> &C {
        &self.claims
    }

    /// Mutable access to the claim ledger, for activity outside the pool.
    pub fn claims_mut(&mut self) -> &mut C {
        &mut self.claims
    }

    /// Checks that the tracked state is backed by the external ledgers.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if the state is partially
    /// funded, a custody balance differs from its reserve, or the claim
    /// ledger's supply differs from the tracked claim supply.
    pub fn verify_backing(&self) -> Result<()> {
        self.state.check_invariants()?;
        if self.custody(Side::A) != self.state.reserve_a() {
            return Err(AmmError::InvariantViolation(
                "custody balance of asset A differs from reserve A",
            ));
        }
        if self.custody(Side::B) != self.state.reserve_b() {
            return Err(AmmError::InvariantViolation(
                "custody balance of asset B differs from reserve B",
            ));
        }
        if self.claims.total_supply() != self.state.claim_supply() {
            return Err(AmmError::InvariantViolation(
                "claim ledger supply differs from tracked claim supply",
            ));
        }
        Ok(())
    }

    // -- skim -----------------------------------------------------------------

    /// Pays out custody balances above the tracked reserves to `to`.
    ///
    /// Assets sent to the pool account outside of a deposit or swap are not
    /// counted as reserves.  Skimming hands them on and leaves reserves and
    /// prices untouched.  Returns the `(excess_a, excess_b)` paid.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvariantViolation`] if a custody balance is below its
    ///   reserve.
    /// - [`AmmError::TransferFailed`] if a push fails; nothing is paid.
    pub fn skim(&mut self, ctx: &CallContext, to: &AccountId) -> Result<(Amount, Amount)> {
        let to = *to;
        self.guarded("skim", |pool| {
            let excess_a = pool.excess(Side::A)?;
            let excess_b = pool.excess(Side::B)?;
            if !excess_a.is_zero() {
                pool.push(Side::A, &to, excess_a)?;
            }
            if !excess_b.is_zero() {
                pool.push(Side::B, &to, excess_b)?;
            }
            pool.events.emit(PoolEvent::Skim {
                caller: ctx.caller(),
                to,
                excess_a,
                excess_b,
            });
            Ok((excess_a, excess_b))
        })
    }

    // -- guard and checkpoint -------------------------------------------------

    /// Runs `body` under the reentrancy lock, restoring the checkpoint
    /// taken on entry if it fails.
    fn guarded<T>(
        &mut self,
        operation: &'static str,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.state.is_locked() {
            warn!(operation, "reentrant call rejected");
            return Err(AmmError::Reentrancy);
        }
        let checkpoint = self.checkpoint();
        self.state.set_locked(true);
        match body(self) {
            Ok(value) => {
                self.state.set_locked(false);
                Ok(value)
            }
            Err(err) => {
                warn!(operation, error = %err, "operation rolled back");
                self.restore(checkpoint);
                Err(err)
            }
        }
    }

    fn checkpoint(&self) -> Checkpoint<A, B, C> {
        Checkpoint {
            state: self.state,
            ledger_a: self.ledger_a.clone(),
            ledger_b: self.ledger_b.clone(),
            claims: self.claims.clone(),
            events: self.events.len(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint<A, B, C>) {
        self.state = checkpoint.state;
        self.ledger_a = checkpoint.ledger_a;
        self.ledger_b = checkpoint.ledger_b;
        self.claims = checkpoint.claims;
        self.events.truncate(checkpoint.events);
    }

    // -- ledger plumbing ------------------------------------------------------

    /// Balance the pool account holds on the ledger of `side`.
    fn custody(&self, side: Side) -> Amount {
        let pool_account = self.config.pool_account();
        match side {
            Side::A => self.ledger_a.balance_of(&pool_account),
            Side::B => self.ledger_b.balance_of(&pool_account),
        }
    }

    /// Custody balance above the tracked reserve of `side`.
    fn excess(&self, side: Side) -> Result<Amount> {
        self.custody(side)
            .checked_sub(&self.state.reserve(side))
            .ok_or(AmmError::InvariantViolation(
                "custody balance is below the tracked reserve",
            ))
    }

    /// Fails unless the pool holds at least `amount` on `side`.
    fn ensure_custody(&self, side: Side, amount: Amount) -> Result<()> {
        if self.custody(side) < amount {
            return Err(AmmError::InvariantViolation(
                "custody balance is below the outbound amount",
            ));
        }
        Ok(())
    }

    /// Moves `amount` from `from` into pool custody using the pool's
    /// allowance.
    fn pull(&mut self, side: Side, from: &AccountId, amount: Amount) -> Result<()> {
        let pool_account = self.config.pool_account();
        let asset = self.config.pair().asset(side);
        let outcome = match side {
            Side::A => self
                .ledger_a
                .transfer_from(&pool_account, from, &pool_account, amount),
            Side::B => self
                .ledger_b
                .transfer_from(&pool_account, from, &pool_account, amount),
        };
        outcome.map_err(|source| AmmError::TransferFailed { asset, source })
    }

    /// Moves `amount` out of pool custody to `to`.
    fn push(&mut self, side: Side, to: &AccountId, amount: Amount) -> Result<()> {
        let pool_account = self.config.pool_account();
        let asset = self.config.pair().asset(side);
        let outcome = match side {
            Side::A => self.ledger_a.transfer(&pool_account, to, amount),
            Side::B => self.ledger_b.transfer(&pool_account, to, amount),
        };
        outcome.map_err(|source| AmmError::TransferFailed { asset, source })
    }
}
