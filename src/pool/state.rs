//! The pool's mutable accounting record.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Liquidity, Side};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Reserve and claim-supply counters of one pool instance.
///
/// Created empty, becomes funded on the first deposit and returns to empty
/// only when a withdrawal retires the whole claim supply.  Outside of a
/// running operation the three counters are either all zero or all
/// non-zero (see [`PoolState::check_invariants`]).
///
/// `locked` is set while an operation is in progress and is never
/// serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    claim_supply: Liquidity,
    #[serde(skip)]
    locked: bool,
}

impl PoolState {
    /// An empty, unlocked state.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
        claim_supply: Liquidity::ZERO,
        locked: false,
    };

    /// Tracked reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Tracked reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Total outstanding claims.
    #[must_use]
    pub const fn claim_supply(&self) -> Liquidity {
        self.claim_supply
    }

    /// Tracked reserve of the given side.
    #[must_use]
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Returns `true` while an operation holds the reentrancy lock.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns `true` if no claims are outstanding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claim_supply.is_zero()
    }

    /// Checks that the pool is either fully empty or fully funded.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if exactly one or two of
    /// the counters are zero.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        let zeros = [
            self.reserve_a.is_zero(),
            self.reserve_b.is_zero(),
            self.claim_supply.is_zero(),
        ];
        if zeros.iter().all(|z| *z) || zeros.iter().all(|z| !*z) {
            Ok(())
        } else {
            Err(AmmError::InvariantViolation(
                "reserves and claim supply must be all zero or all non-zero",
            ))
        }
    }

    /// Returns the state with both reserves increased and `minted` claims
    /// added.
    pub(crate) fn deposited(
        &self,
        side: Side,
        amount: Amount,
        other_amount: Amount,
        minted: Liquidity,
    ) -> Result<Self, AmmError> {
        let mut next = *self;
        let (first, second) = match side {
            Side::A => (amount, other_amount),
            Side::B => (other_amount, amount),
        };
        next.reserve_a = self.reserve_a.safe_add(&first)?;
        next.reserve_b = self.reserve_b.safe_add(&second)?;
        next.claim_supply = self.claim_supply.safe_add(&minted)?;
        Ok(next)
    }

    /// Returns the state with both reserves reduced and `burned` claims
    /// retired.
    pub(crate) fn withdrawn(
        &self,
        amount_a: Amount,
        amount_b: Amount,
        burned: Liquidity,
    ) -> Result<Self, AmmError> {
        let mut next = *self;
        next.reserve_a = self.reserve_a.safe_sub(&amount_a)?;
        next.reserve_b = self.reserve_b.safe_sub(&amount_b)?;
        next.claim_supply = self.claim_supply.safe_sub(&burned)?;
        Ok(next)
    }

    /// Returns the state after `amount_in` entered on `side_in` and
    /// `amount_out` left the other side.
    pub(crate) fn swapped(
        &self,
        side_in: Side,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<Self, AmmError> {
        let mut next = *self;
        let reserve_in = self.reserve(side_in).safe_add(&amount_in)?;
        let reserve_out = self.reserve(side_in.other()).safe_sub(&amount_out)?;
        match side_in {
            Side::A => {
                next.reserve_a = reserve_in;
                next.reserve_b = reserve_out;
            }
            Side::B => {
                next.reserve_b = reserve_in;
                next.reserve_a = reserve_out;
            }
        }
        Ok(next)
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
