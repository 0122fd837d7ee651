//! Raw asset amount with checked arithmetic.

use core::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A raw asset amount in the smallest unit of the asset.
///
/// Backed by an unsigned 256-bit integer so reserve products of two
/// realistic balances never leave the representable range.  All `U256`
/// values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// or underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256::MAX);

    /// Creates a new `Amount` from a `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(U256([value as u64, (value >> 64) as u64, 0, 0]))
    }

    /// Creates a new `Amount` from a full-width `U256` value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the value as `u128`, or `None` if it does not fit.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.0.bits() > 128 {
            None
        } else {
            Some(self.0.low_u128())
        }
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
