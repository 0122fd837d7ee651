//! Claim-token quantities.

use core::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::Amount;

/// A quantity of the pool's claim token.
///
/// This is distinct from [`Amount`] because it measures a proportional
/// share of both reserves, not a quantity of either asset.  All `U256`
/// values are valid liquidity amounts.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Liquidity(U256);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Creates a new `Liquidity` from a `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(U256([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Creates a new `Liquidity` from a full-width `U256` value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Reinterprets the quantity as a plain [`Amount`].
    pub const fn as_amount(&self) -> Amount {
        Amount::from_u256(self.0)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
