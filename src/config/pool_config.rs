//! Configuration for a constant-product pair pool.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, AssetPair};
use crate::error::AmmError;

/// Immutable parameters of one pool instance.
///
/// A pool is identified by its [`AssetPair`] and holds custody of both
/// assets under `pool_account` on the external ledgers.  The pool has no
/// fee and no tunable parameters beyond these.
///
/// # Validation
///
/// - `pool_account` must not be the all-zero account.
/// - The pair is validated at [`AssetPair`] construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pair: AssetPair,
    pool_account: AccountId,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `pool_account` is zero.
    pub fn new(pair: AssetPair, pool_account: AccountId) -> Result<Self, AmmError> {
        let config = Self { pair, pool_account };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `pool_account` is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pool_account.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must be non-zero",
            ));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the account holding the pool's custody balances.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }
}
