//! Rounding helpers for wide integer division.
//!
//! [`mul_div`] is the multiply-before-divide primitive every proportional
//! calculation in the engine goes through: minting, withdrawal payouts,
//! swap output and price scaling.  The product is taken in 512 bits, so
//! `a × b` never overflows; only a quotient that does not fit back into
//! 256 bits is an error.  [`div_round`] performs the 512-bit division with
//! an explicit [`Rounding`] direction.
//!
//! # Convention
//!
//! **Always round against the caller** (pool-favorable):
//!
//! | Quantity | Direction | Rationale |
//! |----------|-----------|-----------|
//! | Minted claims | [`Rounding::Down`] | Depositor receives less |
//! | Withdrawal payout | [`Rounding::Down`] | Withdrawer receives less |
//! | Swap output | [`Rounding::Down`] | Trader receives less |
//! | Required input | [`Rounding::Up`] | Trader pays more |
//!
//! # Examples
//!
//! ```
//! use pair_amm::domain::{Amount, Rounding};
//! use pair_amm::math::mul_div;
//!
//! // 10 * 100 / 110, floored
//! let out = mul_div(Amount::new(10), Amount::new(100), Amount::new(110), Rounding::Down);
//! assert_eq!(out, Ok(Amount::new(9)));
//! ```

use primitive_types::{U256, U512};

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

/// Integer division of `U512` values with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division (round towards zero).
/// - [`Rounding::Up`]: ceiling division, the smallest integer
///   ≥ the exact quotient.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: U512, denominator: U512, rounding: Rounding) -> Option<U512> {
    if denominator.is_zero() {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up => {
            // q + 1 cannot overflow: a non-zero remainder implies d > 1,
            // so q <= U512::MAX / 2.
            if (numerator % denominator).is_zero() {
                Some(q)
            } else {
                Some(q + U512::one())
            }
        }
    }
}

/// Computes `a × b / denominator` with the multiplication first.
///
/// The product is carried in 512 bits and the quotient narrowed back to
/// 256 bits after rounding.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the rounded quotient exceeds 256 bits.
pub fn mul_div(
    a: Amount,
    b: Amount,
    denominator: Amount,
    rounding: Rounding,
) -> Result<Amount, AmmError> {
    let product = a.get().full_mul(b.get());
    let quotient = div_round(product, U512::from(denominator.get()), rounding)
        .ok_or(AmmError::DivisionByZero)?;
    U256::try_from(quotient)
        .map(Amount::from_u256)
        .map_err(|_| AmmError::Overflow("mul_div quotient exceeds 256 bits"))
}
