//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, AmmError>`](crate::error::AmmError) instead
//! of panicking on overflow or underflow.  Proportional calculations that
//! multiply and divide go through [`mul_div`](super::mul_div) instead.
//!
//! # Implementations
//!
//! - [`Amount`]: asset quantities (`U256`)
//! - [`Liquidity`]: claim-token quantities (`U256`)
//!
//! # Examples
//!
//! ```
//! use pair_amm::domain::Amount;
//! use pair_amm::math::CheckedArithmetic;
//!
//! let a = Amount::new(100);
//! let b = Amount::new(200);
//! assert_eq!(a.safe_add(&b), Ok(Amount::new(300)));
//! assert!(a.safe_sub(&b).is_err());
//! ```

use crate::domain::{Amount, Liquidity};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// Every method returns [`Result<Self, AmmError>`] with a specific error
/// variant so callers can distinguish overflow from underflow.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds 256 bits.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("liquidity subtraction underflow"))
    }
}
