//! Outcome of a swap operation.

use serde::{Deserialize, Serialize};

use super::{Amount, AssetId, Price};
use crate::error::AmmError;

/// The outcome of an exact-input swap.
///
/// # Invariants
///
/// `amount_in > 0` and `amount_out > 0`.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, AssetId, SwapResult};
///
/// let result = SwapResult::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
///     Amount::new(10),
///     Amount::new(9),
/// );
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapResult {
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapResult {
    /// Creates a new `SwapResult` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if either amount is zero.
    pub fn new(
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_out must be positive"));
        }
        Ok(Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
        })
    }

    /// Returns the asset sold.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Returns the asset bought.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Realized execution price as `amount_out / amount_in`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the scaled price exceeds 256 bits.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        Price::from_reserves(self.amount_out, self.amount_in)
    }
}
