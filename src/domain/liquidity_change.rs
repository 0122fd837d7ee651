//! Deposit and withdrawal requests.
//!
//! Each request carries everything the caller controls about one liquidity
//! operation.  [`AddLiquidity::validate`] and [`RemoveLiquidity::validate`]
//! perform every precondition that does not depend on pool state, so a
//! request that fails them never reaches the engine.

use super::{AccountId, Amount, AssetId, Deadline, Liquidity, Timestamp};
use crate::error::AmmError;

/// A request to deposit both assets and mint claim tokens.
///
/// The assets may be named in either order; amounts and minimums follow
/// the order given here.  Minimums default to zero.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{
///     AccountId, AddLiquidity, Amount, AssetId, Deadline, Timestamp,
/// };
///
/// let req = AddLiquidity::new(
///     AssetId::from_bytes([1u8; 32]),
///     Amount::new(200),
///     AssetId::from_bytes([2u8; 32]),
///     Amount::new(50),
///     AccountId::from_bytes([9u8; 32]),
///     Deadline::at(Timestamp::from_secs(1_000)),
/// )
/// .with_minimums(Amount::new(190), Amount::new(50));
///
/// assert!(req.validate(Timestamp::from_secs(999)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidity {
    asset_a: AssetId,
    asset_b: AssetId,
    amount_a_desired: Amount,
    amount_b_desired: Amount,
    amount_a_min: Amount,
    amount_b_min: Amount,
    to: AccountId,
    deadline: Deadline,
}

impl AddLiquidity {
    /// Creates a deposit request with zero minimums.
    #[must_use]
    pub const fn new(
        asset_a: AssetId,
        amount_a_desired: Amount,
        asset_b: AssetId,
        amount_b_desired: Amount,
        to: AccountId,
        deadline: Deadline,
    ) -> Self {
        Self {
            asset_a,
            asset_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to,
            deadline,
        }
    }

    /// Sets the minimum acceptable amounts.
    #[must_use]
    pub const fn with_minimums(self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        Self {
            amount_a_min,
            amount_b_min,
            ..self
        }
    }

    /// Returns the first named asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second named asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns the desired deposit of the first named asset.
    #[must_use]
    pub const fn amount_a_desired(&self) -> Amount {
        self.amount_a_desired
    }

    /// Returns the desired deposit of the second named asset.
    #[must_use]
    pub const fn amount_b_desired(&self) -> Amount {
        self.amount_b_desired
    }

    /// Returns the minimum acceptable deposit of the first named asset.
    #[must_use]
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Returns the minimum acceptable deposit of the second named asset.
    #[must_use]
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }

    /// Returns the recipient of the minted claims.
    #[must_use]
    pub const fn to(&self) -> AccountId {
        self.to
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Checks every stateless precondition.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if a desired amount is zero or a
    ///   minimum exceeds its desired amount.
    /// - [`AmmError::DeadlineExpired`] if `now` is past the deadline.
    pub fn validate(&self, now: Timestamp) -> Result<(), AmmError> {
        if self.amount_a_desired.is_zero() || self.amount_b_desired.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "both desired amounts must be non-zero",
            ));
        }
        if self.amount_a_min > self.amount_a_desired || self.amount_b_min > self.amount_b_desired
        {
            return Err(AmmError::InvalidQuantity(
                "minimum amount exceeds desired amount",
            ));
        }
        self.deadline.check(now)
    }
}

/// A request to burn claim tokens for a proportional share of the reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidity {
    asset_a: AssetId,
    asset_b: AssetId,
    liquidity: Liquidity,
    amount_a_min: Amount,
    amount_b_min: Amount,
    to: AccountId,
    deadline: Deadline,
}

impl RemoveLiquidity {
    /// Creates a withdrawal request with zero minimums.
    #[must_use]
    pub const fn new(
        asset_a: AssetId,
        asset_b: AssetId,
        liquidity: Liquidity,
        to: AccountId,
        deadline: Deadline,
    ) -> Self {
        Self {
            asset_a,
            asset_b,
            liquidity,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to,
            deadline,
        }
    }

    /// Sets the minimum acceptable payouts.
    #[must_use]
    pub const fn with_minimums(self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        Self {
            amount_a_min,
            amount_b_min,
            ..self
        }
    }

    /// Returns the first named asset.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second named asset.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns the claims to burn.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns the minimum acceptable payout of the first named asset.
    #[must_use]
    pub const fn amount_a_min(&self) -> Amount {
        self.amount_a_min
    }

    /// Returns the minimum acceptable payout of the second named asset.
    #[must_use]
    pub const fn amount_b_min(&self) -> Amount {
        self.amount_b_min
    }

    /// Returns the recipient of the withdrawn assets.
    #[must_use]
    pub const fn to(&self) -> AccountId {
        self.to
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Checks every stateless precondition.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `liquidity` is zero.
    /// - [`AmmError::DeadlineExpired`] if `now` is past the deadline.
    pub fn validate(&self, now: Timestamp) -> Result<(), AmmError> {
        if self.liquidity.is_zero() {
            return Err(AmmError::InvalidQuantity("liquidity to burn must be non-zero"));
        }
        self.deadline.check(now)
    }
}
