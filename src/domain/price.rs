//! Exchange rate between the two pool assets.

use core::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// Fixed-point scale of [`Price`]: one whole unit is `10^18`.
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Exchange rate as an unsigned fixed-point number scaled by
/// [`PRICE_SCALE`].
///
/// `Price::from_reserves(numerator, denominator)` represents
/// `numerator / denominator`, i.e. units of the numerator asset per unit of
/// the denominator asset, rounded down.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, Price, PRICE_SCALE};
/// use primitive_types::U256;
///
/// let price = Price::from_reserves(Amount::new(200), Amount::new(100)).expect("non-zero");
/// assert_eq!(price.raw(), U256::from(2 * PRICE_SCALE));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(U256);

impl Price {
    /// Price ratio of zero.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Price ratio of 1:1.
    pub const ONE: Self = Self(U256([PRICE_SCALE as u64, 0, 0, 0]));

    /// Creates a price from its raw scaled representation.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Returns the raw value scaled by [`PRICE_SCALE`].
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Computes `floor(numerator × 10^18 / denominator)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidReserve`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the scaled price exceeds 256 bits.
    pub fn from_reserves(numerator: Amount, denominator: Amount) -> Result<Self, AmmError> {
        if denominator.is_zero() {
            return Err(AmmError::InvalidReserve("price denominator reserve is zero"));
        }
        let raw = mul_div(
            numerator,
            Amount::new(PRICE_SCALE),
            denominator,
            Rounding::Down,
        )?;
        Ok(Self(raw.get()))
    }

    /// Returns the whole-unit part of the price.
    #[must_use]
    pub fn integer_part(&self) -> U256 {
        self.0 / U256::from(PRICE_SCALE)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = U256::from(PRICE_SCALE);
        let frac = (self.0 % scale).low_u128();
        write!(f, "{}.{:018}", self.0 / scale, frac)
    }
}
