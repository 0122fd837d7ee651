//! Read-only pricing views.
//!
//! [`get_amount_out`] and [`get_amount_in`] are pure functions of the
//! reserves they are given.  The [`Pool`] methods resolve asset identities
//! to tracked reserves and never mutate anything.
//!
//! # Formulas
//!
//! - `amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))`
//! - `amount_in  = ceil(reserve_in × amount_out / (reserve_out − amount_out))`
//! - `price(base, quote) = floor(reserve_quote × 10^18 / reserve_base)`

use super::Pool;
use crate::domain::{Amount, AssetId, Price, Rounding};
use crate::error::{AmmError, Result};
use crate::math::mul_div;
use crate::traits::{AssetLedger, ClaimLedger};

/// Output of an exact-input trade against the given reserves.
///
/// Rounds down, so `(reserve_in + amount_in) × (reserve_out − amount_out)`
/// is never below `reserve_in × reserve_out`.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
/// - [`AmmError::InvalidReserve`] if `reserve_in` is zero.
/// - [`AmmError::Overflow`] if an intermediate exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Amount;
/// use pair_amm::pool::get_amount_out;
///
/// let out = get_amount_out(Amount::new(10), Amount::new(100), Amount::new(100));
/// assert_eq!(out, Ok(Amount::new(9)));
/// ```
pub fn get_amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidQuantity("input amount must be non-zero"));
    }
    if reserve_in.is_zero() {
        return Err(AmmError::InvalidReserve("input reserve is zero"));
    }
    let denominator = reserve_in
        .checked_add(&amount_in)
        .ok_or(AmmError::Overflow("input reserve plus amount overflows"))?;
    mul_div(amount_in, reserve_out, denominator, Rounding::Down)
}

/// Smallest input whose [`get_amount_out`] is at least `amount_out`.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `amount_out` is zero.
/// - [`AmmError::InvalidReserve`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out >= reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds 256 bits.
pub fn get_amount_in(amount_out: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidQuantity("output amount must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserve("reserve is zero"));
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity(
            "requested output drains the reserve",
        ));
    }
    let remaining = reserve_out
        .checked_sub(&amount_out)
        .ok_or(AmmError::Underflow("output reserve underflow"))?;
    mul_div(reserve_in, amount_out, remaining, Rounding::Up)
}

impl<A, B, C> Pool<A, B, C>
where
    A: AssetLedger + Clone,
    B: AssetLedger + Clone,
    C: ClaimLedger + Clone,
{
    /// Price of `base` in units of `quote`, scaled by
    /// [`PRICE_SCALE`](crate::domain::PRICE_SCALE).
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] / [`AmmError::IdenticalAssets`] if the
    ///   two identities are not the pool's two assets.
    /// - [`AmmError::InvalidReserve`] if the `base` reserve is zero.
    pub fn get_price(&self, base: &AssetId, quote: &AssetId) -> Result<Price> {
        let side_base = self.config.pair().orient(base, quote)?;
        Price::from_reserves(
            self.state.reserve(side_base.other()),
            self.state.reserve(side_base),
        )
    }

    /// Amount of the other asset proportional to `amount` of `asset_from`
    /// at the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if `asset_from` is not in the pool.
    /// - [`AmmError::InvalidQuantity`] if `amount` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    pub fn quote(&self, amount: Amount, asset_from: &AssetId) -> Result<Amount> {
        let side = self.config.pair().side_of(asset_from)?;
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("quote amount must be non-zero"));
        }
        let reserve_from = self.state.reserve(side);
        let reserve_to = self.state.reserve(side.other());
        if reserve_from.is_zero() || reserve_to.is_zero() {
            return Err(AmmError::InsufficientLiquidity("pool has no reserves"));
        }
        mul_div(amount, reserve_to, reserve_from, Rounding::Down)
    }

    /// [`get_amount_out`] against this pool's tracked reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if `asset_in` is not in the pool.
    /// - Any error of [`get_amount_out`].
    pub fn quote_amount_out(&self, asset_in: &AssetId, amount_in: Amount) -> Result<Amount> {
        let side_in = self.config.pair().side_of(asset_in)?;
        get_amount_out(
            amount_in,
            self.state.reserve(side_in),
            self.state.reserve(side_in.other()),
        )
    }
}
